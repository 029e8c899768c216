use serde::{Deserialize, Serialize};

/// A record of an episode.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SonarrEpisode {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub episode_number: u32,
    pub season_number: u32,
    #[serde(default)]
    pub title: String,
    pub series_id: Option<u64>,
    pub tvdb_id: Option<u32>,
}
