use anyhow::{Context, Result};
use clap::Parser;
use facemark_core::{annotate_file, DetectionClient, OUTLINE_COLOR};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod config;

#[derive(Parser)]
#[command(
    name = "facemark",
    version,
    about = "Outline faces found by a remote detection service",
    long_about = "Sends an image to the face-detection service at $ENDPOINT (authenticated \
                  with $API_KEY, both optionally read from ./.env) and writes a copy with a \
                  red rectangle around every detected face to <input>_output.png."
)]
struct Cli {
    /// Image to annotate (PNG, JPEG, or any other supported format)
    input: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("{e:#}");
        return Err(e);
    }

    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => return Err(e).context("failed to load .env"),
    }

    let config = config::Config::from_env()?;
    let client = DetectionClient::new(config.endpoint, config.api_key);

    let output = annotate_file(&cli.input, &client, OUTLINE_COLOR)
        .await
        .with_context(|| format!("failed to annotate {}", cli.input.display()))?;

    println!("{}", output.display());
    Ok(())
}
