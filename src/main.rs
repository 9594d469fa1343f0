use std::sync::Arc;

use tracing::{error, info};

use config::Config;
use error::AppError;
use profile::ProfileClient;
use ui::App;

mod config;
mod error;
mod logging;
mod profile;
mod search;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!(error = %e, "❌ exiting");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;
    logging::init(&config)?;

    info!(
        base_url = %config.api_base_url,
        region = %config.default_region,
        "🐙 Starting..."
    );

    let client = ProfileClient::new(config.api_base_url.clone(), config.request_timeout)?;
    let mut app = App::new(config.default_region, config.ddragon_version.clone());

    ui::run(&mut app, Arc::new(client)).await
}
