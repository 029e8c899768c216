//! Loading of the autoscan configuration file.
//!
//! The file is JSON and is read once when the process starts. The Plex token may instead be
//! provided through the environment (see [variables::PLEX_TOKEN]) so that it can be kept out of
//! the file entirely.

use crate::environment::{get_env_var, get_env_var_or, variables};
use anyhow::{bail, ensure, Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use url::Url;

const DEFAULT_CONFIG_PATH: &str = "data/config.json";

/// A literal find/replace applied to a path reported by a media source to get the path the
/// media server sees.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RemapRule {
    pub from: String,
    pub to: String,
}

impl RemapRule {
    pub fn new(from: &str, to: &str) -> Self {
        RemapRule {
            from: String::from(from),
            to: String::from(to),
        }
    }
}

/// Ordered [RemapRule] lists keyed by the (case-sensitive) name of the service sending webhooks.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct RemapTable(HashMap<String, Vec<RemapRule>>);

impl RemapTable {
    pub fn new(rules: HashMap<String, Vec<RemapRule>>) -> Self {
        RemapTable(rules)
    }

    /// The rules configured for `service_id`, or an empty slice if there are none.
    pub fn rules_for(&self, service_id: &str) -> &[RemapRule] {
        self.0.get(service_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn services(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RawConfig {
    plex_host: String,
    plex_port: u16,
    #[serde(default)]
    plex_token: Option<String>,
    #[serde(default)]
    remappings: RemapTable,
}

/// Validated application configuration.
#[derive(Debug, Clone)]
pub struct AutoscanConfig {
    /// The Plex server's base URL, with the configured port applied.
    pub plex_url: Url,
    pub plex_token: String,
    pub remappings: RemapTable,
}

impl AutoscanConfig {
    /// Load the configuration from the path in [variables::CONFIG_PATH], or from
    /// `data/config.json` when that isn't set.
    pub fn load() -> Result<Self> {
        let path = PathBuf::from(get_env_var_or(variables::CONFIG_PATH, DEFAULT_CONFIG_PATH));
        Self::load_from(&path)
    }

    /// Load the configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        info!(config_path = %path.display(), "Loading configuration.");
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to load config file: {}", path.display()))
    }

    /// Parse and validate a configuration document. A token found in the environment takes
    /// precedence over one in the document.
    pub fn from_json(content: &str) -> Result<Self> {
        let raw: RawConfig =
            serde_json::from_str(content).context("Failed to decode config file.")?;
        let token = match get_env_var(variables::PLEX_TOKEN) {
            Ok(t) => {
                debug!("Using the Plex token from the environment.");
                Some(t)
            }
            Err(_) => raw.plex_token,
        };
        Self::build(raw.plex_host, raw.plex_port, token, raw.remappings)
    }

    fn build(
        host: String,
        port: u16,
        token: Option<String>,
        remappings: RemapTable,
    ) -> Result<Self> {
        ensure!(port != 0, "Plex port cannot be 0.");
        let mut plex_url =
            Url::parse(&host).with_context(|| format!("Failed to parse Plex host \"{}\".", host))?;
        if !matches!(plex_url.scheme(), "http" | "https") {
            bail!("Plex host must be an http(s) URL: {}", host);
        }
        if plex_url.set_port(Some(port)).is_err() {
            bail!("Plex host cannot carry a port: {}", host);
        }

        let plex_token = match token {
            Some(t) if !t.trim().is_empty() => t.trim().to_string(),
            _ => bail!(
                "No Plex token was configured; set plexToken or {}.",
                variables::PLEX_TOKEN
            ),
        };

        Ok(AutoscanConfig {
            plex_url,
            plex_token,
            remappings,
        })
    }
}
