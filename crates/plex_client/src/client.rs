use crate::models::{LibrarySection, PlexResponse, PlexUser, SectionsContainer};
use crate::MediaServerClient;
use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use autoscan_common::AutoscanConfig;
use reqwest::header::ACCEPT;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, error, info};
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const TOKEN_PARAM: &str = "X-Plex-Token";
const PLEX_TV_USER_URL: &str = "https://plex.tv/api/v2/user";

/// Append the season folder Plex expects (`{path}/Season {n}`) when a season is given.
pub fn season_path(path: &str, season: Option<u32>) -> String {
    match season {
        Some(n) => format!("{}/Season {}", path, n),
        None => String::from(path),
    }
}

/// A [MediaServerClient] that talks to a Plex Media Server.
pub struct PlexClient {
    client: Client,
    base_url: Url,
    token: String,
    account_url: Url,
}

impl PlexClient {
    pub fn new(base_url: Url, token: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build the Plex HTTP client.")?;
        let account_url = Url::parse(PLEX_TV_USER_URL)?;
        info!(plex_url = %base_url, "Initializing Plex client.");
        Ok(PlexClient {
            client,
            base_url,
            token: String::from(token),
            account_url,
        })
    }

    pub fn from_config(config: &AutoscanConfig) -> Result<Self> {
        Self::new(config.plex_url.clone(), &config.plex_token)
    }

    /// Point [PlexClient::current_user] somewhere other than plex.tv.
    pub fn with_account_url(mut self, account_url: Url) -> Self {
        self.account_url = account_url;
        self
    }

    /// Look up the plex.tv account that the configured token belongs to.
    pub async fn current_user(&self) -> Result<PlexUser> {
        let url = self.authorize(self.account_url.clone());
        let response = self.send(url).await?;
        response
            .json::<PlexUser>()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to parse the plex.tv user response.")
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("Plex URL cannot be a base: {}", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(self.authorize(url))
    }

    fn authorize(&self, mut url: Url) -> Url {
        url.query_pairs_mut().append_pair(TOKEN_PARAM, &self.token);
        url
    }

    async fn send(&self, url: Url) -> Result<Response> {
        // The query carries the token: only the path is logged, and errors are stripped of the URL.
        debug!(path = url.path(), "Making Plex request.");
        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .with_context(|| format!("Failed to make Plex request to {}.", url.path()))?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            error!(path = url.path(), %status, "Plex request failed.");
            bail!("Request failed with status: {}", status);
        }

        Ok(response)
    }
}

#[async_trait]
impl MediaServerClient for PlexClient {
    async fn list_libraries(&self) -> Result<Vec<LibrarySection>> {
        let url = self.endpoint(&["library", "sections"])?;
        let response = self.send(url).await?;
        let body = response
            .json::<PlexResponse<SectionsContainer>>()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to parse the Plex library sections response.")?;
        debug!(count = body.media_container.directory.len(), "Retrieved library sections.");
        Ok(body.media_container.directory)
    }

    async fn rescan(&self, library_id: &str, path: &str, season: Option<u32>) -> Result<()> {
        info!(library_id, path, ?season, "Refreshing library path.");
        let mut url = self.endpoint(&["library", "sections", library_id, "refresh"])?;
        url.query_pairs_mut()
            .append_pair("path", &season_path(path, season));

        self.send(url).await?;
        Ok(())
    }
}
