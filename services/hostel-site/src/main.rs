//! Hostel site CLI
//!
//! Command-line entry point for the City Hostel website.

use std::path::PathBuf;

use clap::Parser;
use hostel_site::{load_config, Config, HostelSiteBuilder};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hostel-site")]
#[command(about = "City Hostel website server")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen port (overrides config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

/// `RUST_LOG` directives when set and valid, otherwise the CLI level
fn log_filter(level: Level, rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(level.to_string().to_lowercase()))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(
            args.log_level,
            std::env::var("RUST_LOG").ok().as_deref(),
        ))
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, port={:?}, log_level={:?}",
        args.config,
        args.port,
        args.log_level
    );

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    config.resolve_secrets()?;

    if let Some(port) = args.port {
        config.server.port = port;
    }

    tracing::info!("Starting hostel site");
    tracing::debug!(
        "Content store: {}, key facility limit: {}, category matching: {:?}",
        config.content.type_name(),
        config.catalog.key_facility_limit,
        config.catalog.category_matching
    );

    HostelSiteBuilder::new(config).build().await?.start().await?;

    Ok(())
}
