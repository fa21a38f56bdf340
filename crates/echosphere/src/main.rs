use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use echosphere::commands;

#[derive(Parser)]
#[command(name = "echosphere")]
#[command(about = "Brand mention monitoring and reputation analysis")]
struct Cli {
  /// Base URL of the analysis backend (or use ECHOSPHERE_API_URL env var)
  #[arg(long, env = "ECHOSPHERE_API_URL")]
  api_url: Option<String>,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Run a full analysis round for a brand
  Analyze {
    /// Brand name to analyze
    brand: String,
  },
  /// Show recently analyzed brands
  History,
  /// Check backend reachability and AI model availability
  Status,
}

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();

  match cli.command {
    Commands::Analyze { brand } => commands::analyze::handle(brand, cli.api_url).await,
    Commands::History => commands::history::handle().await,
    Commands::Status => commands::status::handle(cli.api_url).await,
  }
}
