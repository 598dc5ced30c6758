use anyhow::Result;
use clap::Parser;
use job_extractor::cli::{self, Cli};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging first; keep stdout for user-facing output
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::from_default_env()
                .add_directive("info".parse().expect("Invalid log directive")),
        )
        .init();

    let cli = Cli::parse();
    let succeeded = cli::run(cli).await?;

    if !succeeded {
        std::process::exit(1);
    }

    Ok(())
}
