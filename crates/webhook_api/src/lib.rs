//! Configuration and handling of webhook pushes from Sonarr.

use crate::models::sonarr::SonarrWebhook;
use actix_web::http::header::ContentType;
use actix_web::{web, Error, HttpResponse};
use anyhow::{anyhow, Context, Result};
use autoscan_plex_client::MediaServerClient;
use futures_util::StreamExt;
use serde::Deserialize;
use std::str;
use tracing::{debug, debug_span, info, warn};
use tracing_actix_web::RootSpan;

mod autoscan_root_span;
pub mod models;
mod notification_error;
mod path_resolver;
mod processor;

const MAX_SIZE: usize = 262_144; // Limit max payload size to 256k.

pub use autoscan_root_span::AutoscanRootSpan;
pub use notification_error::NotificationError;
pub use path_resolver::remap;
pub use processor::{
    find_library_ids, DispatchReport, NotificationProcessor, ProcessOutcome, RescanOutcome,
};

/// Configure the webhook API endpoints. Expects a [NotificationProcessor] in the app data.
pub fn notify_config<T: MediaServerClient + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/notify")
            .service(web::resource("/{service_id}").route(web::post().to(index::<T>))),
    );
}

fn parse_body<'de, T>(body: &'de web::BytesMut) -> Result<T>
where
    T: Deserialize<'de>,
{
    serde_json::from_slice::<T>(body).with_context(|| {
        let span = debug_span!("Parsing Request Body");
        span.in_scope(|| {
            let str_body = str::from_utf8(body).unwrap_or("Could not convert body to string.");
            debug!("Request body: {}", str_body)
        });

        "Encountered an error while parsing webhook request body."
    })
}

async fn read_body(mut payload: web::Payload) -> Result<web::BytesMut, Error> {
    // Essentially copied from: https://actix.rs/docs/request/
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk?;
        if (body.len() + chunk.len()) > MAX_SIZE {
            return Err(NotificationError::BadRequestBody(anyhow!(
                "Body exceeded limit of {} bytes.",
                MAX_SIZE
            ))
            .into());
        }

        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

async fn index<T: MediaServerClient + 'static>(
    root_span: RootSpan,
    service_id: web::Path<String>,
    processor: web::Data<NotificationProcessor<T>>,
    payload: web::Payload,
) -> Result<HttpResponse, Error> {
    let service_id = service_id.into_inner();
    root_span.record("service_id", &service_id.as_str());
    info!(service_id = service_id.as_str(), "Received request.");

    let body = read_body(payload).await?;
    let notification = match parse_body::<SonarrWebhook>(&body) {
        Ok(n) => n,
        Err(e) => {
            debug!("Encountered error while parsing webhook: {:?}", e);
            return Err(NotificationError::BadRequestBody(e).into());
        }
    };
    root_span.record("event_type", &notification.event_type.as_str());

    match processor.process(&notification, &service_id).await? {
        ProcessOutcome::ConnectivityTest => Ok(HttpResponse::Ok()
            .content_type(ContentType::plaintext())
            .body(format!("Test request received from {}", service_id))),
        ProcessOutcome::Dispatched(report) => {
            // Rescan failures are only logged; the webhook is still acknowledged.
            if !report.all_succeeded() {
                let failed: Vec<&str> = report
                    .failures()
                    .map(|o| o.library_id.as_str())
                    .collect();
                warn!(
                    path = report.plex_path.as_str(),
                    "Rescan failed for libraries {:?} of {}.",
                    failed,
                    report.outcomes.len()
                );
            }
            Ok(HttpResponse::Ok()
                .content_type(ContentType::plaintext())
                .body(format!("Request received from {}", service_id)))
        }
    }
}
