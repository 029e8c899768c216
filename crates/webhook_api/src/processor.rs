//! Turns a parsed webhook into rescans of the affected media server libraries.

use crate::models::sonarr::SonarrWebhook;
use crate::notification_error::NotificationError;
use crate::path_resolver::remap;
use anyhow::anyhow;
use autoscan_common::RemapTable;
use autoscan_plex_client::models::LibrarySection;
use autoscan_plex_client::MediaServerClient;
use tracing::{debug, error, info};

/// What [NotificationProcessor::process] did with a webhook.
#[derive(Debug)]
pub enum ProcessOutcome {
    /// The webhook was a connectivity test; the media server was not contacted.
    ConnectivityTest,
    /// Rescans were attempted for every matching library.
    Dispatched(DispatchReport),
}

/// The result of asking one library to rescan.
#[derive(Debug)]
pub struct RescanOutcome {
    pub library_id: String,
    pub result: Result<(), NotificationError>,
}

/// Every rescan attempted for one webhook, in the order the libraries were reported.
#[derive(Debug)]
pub struct DispatchReport {
    pub plex_path: String,
    pub season: Option<u32>,
    pub outcomes: Vec<RescanOutcome>,
}

impl DispatchReport {
    pub fn failures(&self) -> impl Iterator<Item = &RescanOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }

    pub fn all_succeeded(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// Ids of the libraries with a location that `plex_path` starts with, in library order.
///
/// The check is a plain string prefix test: a location of `/data/show` also claims
/// `/data/showalt`.
pub fn find_library_ids(libraries: &[LibrarySection], plex_path: &str) -> Vec<String> {
    libraries
        .iter()
        .filter(|library| {
            library
                .locations
                .iter()
                .any(|location| plex_path.starts_with(location.path.as_str()))
        })
        .map(|library| library.id.clone())
        .collect()
}

/// Handles webhooks for every configured service. Built once at startup and shared between
/// requests; it holds no mutable state.
pub struct NotificationProcessor<T: MediaServerClient> {
    client: T,
    remappings: RemapTable,
}

impl<T: MediaServerClient> NotificationProcessor<T> {
    pub fn new(client: T, remappings: RemapTable) -> Self {
        NotificationProcessor { client, remappings }
    }

    /// Rescan whatever `notification` refers to.
    ///
    /// Fails before any rescan is attempted if the libraries cannot be listed or none of them
    /// contain the path. Once dispatch starts every matching library is tried, one after another,
    /// and individual failures are reported in the [DispatchReport] rather than as an error.
    pub async fn process(
        &self,
        notification: &SonarrWebhook,
        service_id: &str,
    ) -> Result<ProcessOutcome, NotificationError> {
        debug!(?notification, "Received notification body.");

        if notification.is_test() {
            info!(service_id, "Test request received.");
            return Ok(ProcessOutcome::ConnectivityTest);
        }

        let source_path = match &notification.series {
            Some(series) => series.path.as_str(),
            None => {
                error!(service_id, "Notification has no series to rescan.");
                return Err(NotificationError::BadRequestBody(anyhow!(
                    "The {} notification did not include a series.",
                    notification.event_type
                )));
            }
        };
        let plex_path = remap(source_path, self.remappings.rules_for(service_id));
        info!(source_path, plex_path = plex_path.as_str(), "Received path.");

        let libraries = self.client.list_libraries().await.map_err(|e| {
            error!("Failed to get libraries: {:?}", e);
            NotificationError::LibraryDiscoveryFailed(e)
        })?;

        let library_ids = find_library_ids(&libraries, &plex_path);
        if library_ids.is_empty() {
            error!(path = plex_path.as_str(), "No libraries found for path.");
            return Err(NotificationError::NoLibraryForPath(plex_path));
        }

        let season = notification.season_hint();
        if let Some(season_number) = season {
            info!(season_number, "Found a season number.");
        }

        let mut outcomes = Vec::with_capacity(library_ids.len());
        for library_id in library_ids {
            let result = self
                .client
                .rescan(&library_id, &plex_path, season)
                .await
                .map_err(|source| {
                    error!(library_id = library_id.as_str(), "Rescan failed: {:?}", source);
                    NotificationError::RescanFailed {
                        library_id: library_id.clone(),
                        source,
                    }
                });
            outcomes.push(RescanOutcome { library_id, result });
        }

        Ok(ProcessOutcome::Dispatched(DispatchReport {
            plex_path,
            season,
            outcomes,
        }))
    }
}
