//! CLI entry point: serve the quiz API or classify a saved answer record.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use introspect::config::Config;
use introspect::scoring::{AnswerRecord, classify, first_missing_field};
use introspect::server::start_server;

#[derive(Parser)]
#[command(
    name = "introspect",
    about = "Rule-based introvert/extrovert quiz service",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API server.
    Serve,
    /// Classify a saved answer record and print the result.
    Classify {
        /// Path to a JSON file with the seven answer fields.
        #[arg(long)]
        input: PathBuf,
        /// Print the raw JSON result instead of the text report.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("introspect=info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Serve => serve().await,
        Command::Classify { input, json } => classify_file(&input, json),
    }
}

async fn serve() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let handle = start_server(config.server.addr()).await?;

    tokio::signal::ctrl_c().await?;
    tracing::info!("Received ctrl-c, shutting down");
    handle.shutdown();
    Ok(())
}

fn classify_file(input: &Path, json: bool) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(input)?;
    let body: serde_json::Value = serde_json::from_str(&raw)?;
    if let Some(field) = first_missing_field(&body) {
        anyhow::bail!("Missing required field: {field}");
    }

    let result = classify(&AnswerRecord::from_value(&body));
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", result.text_report());
    }
    Ok(())
}
