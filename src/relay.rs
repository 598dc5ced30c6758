// src/relay.rs
//! Request relay - turns abstract instructions into HTTP calls against the
//! job storage server and classifies the outcome.

use crate::config::ClientConfig;
use crate::types::{CreateJobBody, Instruction, JobEnvelope, RequestResult};
use anyhow::{Context, Result};
use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::path::PathBuf;
use tracing::{error, info};

pub const EXPORT_FILE_NAME: &str = "JobDataExtractor_AllPostings.json";

pub struct RequestRelay {
    client: Client,
    base_url: String,
    export_dir: PathBuf,
}

impl RequestRelay {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.server_url.clone(),
            export_dir: config.export_dir.clone(),
        })
    }

    /// Where a successful GetAll writes its export file.
    pub fn export_path(&self) -> PathBuf {
        self.export_dir.join(EXPORT_FILE_NAME)
    }

    /// Execute one instruction against the server. Errors never escape this
    /// boundary: every call produces exactly one terminal `RequestResult`,
    /// with no retries.
    pub async fn execute(&self, instruction: Instruction) -> RequestResult {
        let kind = instruction.kind();

        match instruction {
            Instruction::Post { id, html } => match self.create_job(&id, &html).await {
                Ok(created_id) => RequestResult::success(kind, Some(created_id)),
                Err(e) => {
                    error!("POST failed for job {}: {:#}", id, e);
                    RequestResult::failure(kind, Some(id), &e)
                }
            },
            Instruction::Get { id } => match self.fetch_job(&id).await {
                Ok(found_id) => RequestResult::success(kind, Some(found_id)),
                Err(e) => {
                    error!("GET failed for job {}: {:#}", id, e);
                    RequestResult::failure(kind, Some(id), &e)
                }
            },
            Instruction::GetAll => match self.fetch_all_jobs().await {
                Ok(count) => {
                    info!("Exported {} postings to {}", count, self.export_path().display());
                    RequestResult::success(kind, None)
                }
                Err(e) => {
                    error!("GETALL failed: {:#}", e);
                    RequestResult::failure(kind, None, &e)
                }
            },
        }
    }

    async fn create_job(&self, id: &str, html: &str) -> Result<String> {
        let url = format!("{}/jobs", self.base_url);
        let body = CreateJobBody { id, html };

        info!("Posting job {} to {}", id, url);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .context("Request failed")?;

        let envelope: JobEnvelope = Self::read_json(response).await?;
        Ok(envelope.job.id_string())
    }

    async fn fetch_job(&self, id: &str) -> Result<String> {
        let url = format!("{}/jobs/{}", self.base_url, id);

        info!("Fetching job {} from {}", id, url);

        let response = self.client.get(&url).send().await.context("Request failed")?;

        let envelope: JobEnvelope = Self::read_json(response).await?;
        Ok(envelope.job.id_string())
    }

    async fn fetch_all_jobs(&self) -> Result<usize> {
        let url = format!("{}/jobs/", self.base_url);

        info!("Fetching all stored postings from {}", url);

        let response = self.client.get(&url).send().await.context("Request failed")?;

        let jobs: Vec<serde_json::Value> = Self::read_json(response).await?;

        let data = pretty_json(&jobs)?;
        let path = self.export_path();

        tokio::fs::create_dir_all(&self.export_dir)
            .await
            .with_context(|| format!("Failed to create export directory: {}", self.export_dir.display()))?;
        tokio::fs::write(&path, data)
            .await
            .with_context(|| format!("Failed to write export file: {}", path.display()))?;

        Ok(jobs.len())
    }

    /// Classify the response: non-2xx becomes a "{code} - {reason}" error,
    /// otherwise the body is parsed as JSON.
    async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            anyhow::bail!(
                "{} - {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown Error")
            );
        }

        response
            .json::<T>()
            .await
            .context("Failed to parse server response")
    }
}

// 4-space indentation.
fn pretty_json(jobs: &[serde_json::Value]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);

    jobs.serialize(&mut serializer)
        .context("Failed to serialize job list")?;

    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_json_uses_four_space_indent() {
        let jobs = vec![serde_json::json!({"id": "1"})];
        let data = pretty_json(&jobs).unwrap();
        let text = String::from_utf8(data).unwrap();
        assert_eq!(text, "[\n    {\n        \"id\": \"1\"\n    }\n]");
    }
}
