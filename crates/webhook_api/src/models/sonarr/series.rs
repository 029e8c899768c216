use serde::{Deserialize, Serialize};

/// General data about the series a webhook refers to. Only `path` is needed to find the
/// library to rescan; the rest is carried for logging.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SonarrSeries {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub title: String,
    pub path: String,
    #[serde(rename = "type")]
    pub series_type: Option<String>,
    pub tvdb_id: Option<u32>,
    pub tv_maze_id: Option<u32>,
    pub year: Option<u32>,
}
