use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use autoscan_common::environment::get_env_var_or;
use autoscan_common::environment::variables::{WEB_ADDRESS, WEB_PORT};
use autoscan_plex_client::PlexClient;
use autoscan_webhook_api::{notify_config, AutoscanRootSpan, NotificationProcessor};
use std::str::FromStr;
use tracing::info;
use tracing_actix_web::TracingLogger;

const DEFAULT_ADDRESS: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "3030";

pub fn initialize_web_server(processor: NotificationProcessor<PlexClient>) -> Result<Server> {
    let processor = web::Data::new(processor);
    let address = get_env_var_or(WEB_ADDRESS, DEFAULT_ADDRESS);
    let port = get_port()?;
    info!(address = address.as_str(), port, "Binding web server.");

    let http_server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::<AutoscanRootSpan>::new())
            .app_data(processor.clone())
            .configure(notify_config::<PlexClient>)
    })
    .bind((address.as_str(), port))
    .with_context(|| format!("Failed to bind the web server to {}:{}.", address, port))?
    .run();
    Ok(http_server)
}

fn get_port() -> Result<u16> {
    let value = get_env_var_or(WEB_PORT, DEFAULT_PORT);
    u16::from_str(&value).with_context(|| format!("Failed to parse \"{}\" as a valid port.", value))
}
