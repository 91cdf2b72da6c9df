use anyhow::{Context, Result};
use clap::Parser;
use genome_lit_query::{ClientConfig, EuropePmcClient, MockExtractor, run_lookup};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "genome-lit-query",
    version,
    about = "Fetch Genome Metadata from Literature",
    long_about = "Search Europe PMC for the paper describing a genome assembly and print a structured metadata record"
)]
struct Cli {
    /// Assembly Accession (e.g., GCA_000355885.1)
    #[arg(long, required = true)]
    accession: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the report
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env()?;
    let client = EuropePmcClient::with_config(config)?;

    let mut stdout = std::io::stdout().lock();
    run_lookup(&client, &MockExtractor, &cli.accession, &mut stdout)
        .await
        .with_context(|| format!("Europe PMC lookup failed for {}", cli.accession))?;

    Ok(())
}
