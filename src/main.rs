//! Fruit Slot Server Binary

use clap::Parser;
use fruit_slot::{
    api::{server::init_tracing, ApiServer},
    config::{generate_sample_config, parse_origins, ConfigLoader},
    FruitSlotResult, OsRandomSource,
};
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "fruit-slot")]
#[command(about = "Fruit slot machine HTTP service", long_about = None)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<String>,

    /// Write a sample configuration file to this path and exit
    #[arg(long)]
    generate_config: Option<String>,

    /// Listen address, overrides the configuration
    #[arg(long)]
    host: Option<String>,

    /// Listen port, overrides the configuration
    #[arg(long)]
    port: Option<u16>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Allowed CORS origins (comma-separated, use * for all)
    #[arg(long)]
    cors_origins: Option<String>,
}

#[tokio::main]
async fn main() -> FruitSlotResult<()> {
    let args = Args::parse();
    init_tracing();

    if let Some(path) = args.generate_config {
        generate_sample_config(&path)?;
        info!("Wrote sample configuration to {}", path);
        return Ok(());
    }

    let loader = match &args.config {
        Some(path) => ConfigLoader::new().with_path(path),
        None => ConfigLoader::new(),
    };
    let mut config = loader.load()?;

    // Command line flags win over file and environment
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(timeout) = args.timeout {
        config.server.request_timeout_secs = timeout;
    }
    if let Some(origins) = args.cors_origins {
        config.server.allowed_origins = parse_origins(&origins);
    }
    loader.validate(&config)?;

    ApiServer::new(config.server, Arc::new(OsRandomSource)).run().await
}
