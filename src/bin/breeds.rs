//! breeds — look up dog sub-breeds from the command line.
//!
//! Every lookup goes through a [`CachingBreedProvider`], so repeated breeds
//! (in any letter case) cost a single provider call.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use breedfetch::config::Config;
use breedfetch::{BreedProvider, CachingBreedProvider, StaticBreedProvider};

/// Look up dog sub-breeds.
#[derive(Parser)]
#[command(name = "breeds")]
#[command(version = breedfetch::PKG_VERSION)]
#[command(about = "Look up dog sub-breeds via dog.ceo")]
struct Args {
    /// Path to configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// API base URL (overrides the config file).
    #[arg(long, env = "BREEDFETCH_BASE_URL")]
    base_url: Option<String>,

    /// Serve lookups from a JSON breed table instead of the API.
    #[arg(long, value_name = "FILE")]
    offline: Option<PathBuf>,

    /// Breeds to look up.
    #[arg(required = true)]
    breeds: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Initialise tracing (default: warn for CLI; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let provider = CachingBreedProvider::new(build_provider(&args)?);
    info!(
        version = breedfetch::version_string(),
        provider = provider.name(),
        "breeds starting"
    );

    let mut failed = false;
    for breed in &args.breeds {
        match provider.sub_breeds(breed).await {
            Ok(sub_breeds) if sub_breeds.is_empty() => println!("{breed}: (no sub-breeds)"),
            Ok(sub_breeds) => println!("{breed}: {}", sub_breeds.join(", ")),
            Err(e) => {
                eprintln!("{breed}: not found");
                info!(error = %e, "lookup failed");
                failed = true;
            }
        }
    }

    println!("provider calls: {}", provider.calls_made());

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Build the wrapped provider from CLI flags and configuration.
fn build_provider(args: &Args) -> breedfetch::Result<Arc<dyn BreedProvider>> {
    if let Some(ref path) = args.offline {
        return Ok(Arc::new(StaticBreedProvider::load(path)?));
    }

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(ref base_url) = args.base_url {
        config.api.base_url = base_url.clone();
    }

    Ok(Arc::new(config.api.client()))
}
