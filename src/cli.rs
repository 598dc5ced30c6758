// src/cli.rs
use crate::config::ClientConfig;
use crate::extractor::PageExtractor;
use crate::page;
use crate::relay::RequestRelay;
use crate::types::{Instruction, InstructionKind, RequestResult, RequestStatus};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::warn;

#[derive(Parser)]
#[command(name = "jobxtract")]
#[command(about = "Scrape LinkedIn job postings and relay them to a local job store")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Base URL of the job storage server
    #[arg(long)]
    pub server_url: Option<String>,

    /// Directory the bulk export file is written to
    #[arg(long)]
    pub export_dir: Option<PathBuf>,

    /// HTTP timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scrape the job posting at URL and store it on the server
    Extract { url: String },
    /// Retrieve a stored posting by id
    Get { id: String },
    /// Retrieve every stored posting and export them as JSON
    GetAll,
}

/// Run one user action to its single terminal outcome. Returns whether the
/// action succeeded so `main` can set the exit code.
pub async fn run(cli: Cli) -> Result<bool> {
    let mut config = ClientConfig::from_env();
    if let Some(url) = cli.server_url.as_deref() {
        config = config.with_server_url(url);
    }
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout_secs(secs);
    }
    if let Some(dir) = cli.export_dir {
        config = config.with_export_dir(dir);
    }

    let relay = RequestRelay::new(&config)?;

    let result = match cli.command {
        Command::Extract { url } => {
            if !page::is_job_posting_url(&url) {
                warn!("Rejected non-matching URL: {}", url);
                println!("Invalid webpage! The URL must be a LinkedIn job posting.");
                println!("Hint: it should begin with 'https://www.linkedin.com/jobs/view'");
                return Ok(false);
            }

            let extractor = PageExtractor::new(config.timeout)?;
            let posting = extractor.extract(&url).await?;
            println!("✓ Extracted job posting {}", posting.id);

            relay
                .execute(Instruction::Post {
                    id: posting.id,
                    html: posting.html,
                })
                .await
        }
        Command::Get { id } => relay.execute(Instruction::Get { id }).await,
        Command::GetAll => relay.execute(Instruction::GetAll).await,
    };

    report(&result, &relay);
    Ok(result.is_success())
}

fn report(result: &RequestResult, relay: &RequestRelay) {
    match result.status {
        RequestStatus::Success => match result.instruction {
            InstructionKind::GetAll => {
                println!("✓ GETALL succeeded");
                println!("  Saved all postings to {}", relay.export_path().display());
            }
            _ => match &result.id {
                Some(id) => println!("✓ {} succeeded for job {}", result.instruction, id),
                None => println!("✓ {} succeeded", result.instruction),
            },
        },
        RequestStatus::Failure => {
            let error = result.error.as_deref().unwrap_or("unknown error");
            match &result.id {
                Some(id) => println!("❌ {} failed for job {}: {}", result.instruction, id, error),
                None => println!("❌ {} failed: {}", result.instruction, error),
            }
        }
    }
}
