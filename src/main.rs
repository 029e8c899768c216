mod logging_initialization;
mod web_initialization;

extern crate dotenv;

use crate::logging_initialization::initialize_logging;
use crate::web_initialization::initialize_web_server;
use anyhow::Result;
use autoscan_common::AutoscanConfig;
use autoscan_plex_client::PlexClient;
use autoscan_webhook_api::NotificationProcessor;
use dotenv::dotenv;
use tracing::{info, warn};

#[actix_web::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let _log_guard = initialize_logging()?;
    info!("Initializing autoscan...");

    let config = AutoscanConfig::load()?;
    for service in config.remappings.services() {
        info!(
            service,
            rules = config.remappings.rules_for(service).len(),
            "Loaded path remappings."
        );
    }

    info!("Initializing Plex client...");
    let plex = PlexClient::from_config(&config)?;
    match plex.current_user().await {
        Ok(user) => info!(username = user.username.as_str(), "Plex token verified."),
        Err(e) => warn!("Could not verify the Plex token with plex.tv: {:?}", e),
    }

    let processor = NotificationProcessor::new(plex, config.remappings);

    info!("Starting up web server...");
    let http_server = initialize_web_server(processor)?;

    info!("Autoscan started!");
    http_server.await?;

    info!("Shutting autoscan down.");
    Ok(())
}
