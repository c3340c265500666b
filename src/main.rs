use std::path::PathBuf;

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use travelpack::config::LoggingConfig;
use travelpack::{TravelPackConfig, web};

/// Config path from `--config <path>` or `TRAVELPACK_CONFIG`
fn config_path() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
        if let Some(path) = arg.strip_prefix("--config=") {
            return Some(PathBuf::from(path));
        }
    }
    std::env::var_os("TRAVELPACK_CONFIG").map(PathBuf::from)
}

fn init_logging(logging: &LoggingConfig) {
    // RUST_LOG wins over the configured level
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},tower_http=info", logging.level)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false);

    if logging.format == "json" {
        builder.json().init();
    } else {
        builder.pretty().init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = TravelPackConfig::load_from_path(config_path())?;
    init_logging(&config.logging);

    tracing::info!(
        version = travelpack::VERSION,
        address = %config.bind_address(),
        "Starting TravelPack"
    );

    web::run(config).await
}
