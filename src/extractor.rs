// src/extractor.rs
use crate::page;
use crate::types::JobPosting;
use anyhow::{Context, Result};
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{info, warn};

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Fetches a job-posting page and captures its full markup. Read-only: the
/// page is never mutated, and a single attempt is made per call.
pub struct PageExtractor {
    client: Client,
}

impl PageExtractor {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// Fetch the page at `url` and return its markup together with the job id
    /// parsed from the URL. Callers must have validated the URL with
    /// `page::is_job_posting_url` first.
    pub async fn extract(&self, url: &str) -> Result<JobPosting> {
        let id = page::job_id_from_url(url)
            .ok_or_else(|| anyhow::anyhow!("No job id found in URL: {}", url))?;

        info!("Fetching job posting {}: {}", id, url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to fetch job posting page")?;

        if !response.status().is_success() {
            anyhow::bail!("HTTP error: {}", response.status());
        }

        let html = response.text().await.context("Failed to read page body")?;

        log_page_title(&html);

        Ok(JobPosting { id, html })
    }
}

fn log_page_title(html: &str) {
    let document = Html::parse_document(html);
    let selector = match Selector::parse("title") {
        Ok(selector) => selector,
        Err(_) => return,
    };

    match document.select(&selector).next() {
        Some(element) => {
            let title = element.text().collect::<String>();
            info!("Page title: {}", title.trim());
        }
        None => warn!("Page has no <title>; markup may be incomplete"),
    }
}
