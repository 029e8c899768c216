#![allow(dead_code)]

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use autoscan_plex_client::models::{LibrarySection, Location};
use autoscan_plex_client::MediaServerClient;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A rescan request captured by [SpyMediaServerClient]: library id, path, season.
pub type RescanCall = (String, String, Option<u32>);

/// Fake implementation of [MediaServerClient] that serves a fixed library list and captures
/// every call made to it.
#[derive(Clone)]
pub struct SpyMediaServerClient {
    libraries: Option<Vec<LibrarySection>>,
    failing_libraries: Vec<String>,
    list_calls: Arc<RwLock<usize>>,
    rescans: Arc<RwLock<Vec<RescanCall>>>,
}

impl SpyMediaServerClient {
    pub fn new(libraries: Vec<LibrarySection>) -> Self {
        SpyMediaServerClient {
            libraries: Some(libraries),
            failing_libraries: Vec::new(),
            list_calls: Arc::new(RwLock::new(0)),
            rescans: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// A client whose library listing always fails.
    pub fn unreachable() -> Self {
        SpyMediaServerClient {
            libraries: None,
            ..Self::new(Vec::new())
        }
    }

    /// Make rescans of `library_id` fail (they are still recorded).
    pub fn failing_rescan_for(mut self, library_id: &str) -> Self {
        self.failing_libraries.push(String::from(library_id));
        self
    }

    pub async fn list_calls(&self) -> usize {
        *self.list_calls.read().await
    }

    pub async fn rescans(&self) -> Vec<RescanCall> {
        self.rescans.read().await.clone()
    }
}

#[async_trait]
impl MediaServerClient for SpyMediaServerClient {
    async fn list_libraries(&self) -> Result<Vec<LibrarySection>> {
        *self.list_calls.write().await += 1;
        self.libraries
            .clone()
            .ok_or_else(|| anyhow!("Request failed with status: 503 Service Unavailable"))
    }

    async fn rescan(&self, library_id: &str, path: &str, season: Option<u32>) -> Result<()> {
        let mut rescans = self.rescans.write().await;
        rescans.push((String::from(library_id), String::from(path), season));

        if self.failing_libraries.iter().any(|l| l == library_id) {
            return Err(anyhow!("Request failed with status: 500 Internal Server Error"));
        }
        Ok(())
    }
}

pub fn library(id: &str, paths: &[&str]) -> LibrarySection {
    LibrarySection {
        id: String::from(id),
        title: format!("Library {}", id),
        section_type: String::from("show"),
        locations: paths
            .iter()
            .enumerate()
            .map(|(i, p)| Location {
                id: i as u64,
                path: String::from(*p),
            })
            .collect(),
    }
}

pub fn download_body(path: &str, seasons: &[u32]) -> String {
    let episodes: Vec<String> = seasons
        .iter()
        .enumerate()
        .map(|(i, s)| {
            format!(
                "{{ \"id\": {}, \"episodeNumber\": {}, \"seasonNumber\": {}, \"title\": \"Episode\" }}",
                i + 1,
                i + 1,
                s
            )
        })
        .collect();
    format!(
        "{{ \"eventType\": \"Download\", \"series\": {{ \"id\": 1, \"title\": \"MyShow\", \"path\": \"{}\" }}, \"episodes\": [{}] }}",
        path,
        episodes.join(", ")
    )
}

pub const TEST_BODY: &str = "{
    \"eventType\": \"Test\",
    \"series\": {
        \"id\": 1,
        \"title\": \"Test Title\",
        \"path\": \"C:\\\\testpath\",
        \"tvdbId\": 1234,
        \"type\": \"standard\"
    },
    \"episodes\": [
        {
            \"id\": 123,
            \"episodeNumber\": 1,
            \"seasonNumber\": 1,
            \"title\": \"Test title\",
            \"qualityVersion\": 0
        }
    ]
}";
