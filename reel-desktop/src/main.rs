use std::sync::Arc;

use reel_core::config::Config;
use reel_core::favorites::JsonFileStore;
use reel_core::tmdb::TmdbClient;
use tracing::{error, info};

mod ui;

pub use ui::AppContext;

fn configure_logging() {
    use tracing_subscriber::prelude::*;

    // Default to info level if RUST_LOG not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn main() {
    configure_logging();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    info!("Building services...");
    let catalog = Arc::new(TmdbClient::new(config.api_key.clone()));
    let store = Arc::new(JsonFileStore::new(config.data_dir.clone()));

    let context = AppContext { catalog, store };

    info!("Starting UI");
    ui::launch_app(context);
    info!("UI quit");
}
