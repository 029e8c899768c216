//! Models intended to be used when deserializing webhook bodies from Sonarr.
//! Source: https://github.com/Sonarr/Sonarr/tree/3c45349404f59064d1c8db0549401189c456e4c0/src/NzbDrone.Core/Notifications/Webhook

mod episode;
mod series;

pub use episode::SonarrEpisode;
use serde::{Deserialize, Serialize};
pub use series::SonarrSeries;

/// The `eventType` Sonarr sends when the user presses "Test" on the connection.
pub const TEST_EVENT_TYPE: &str = "Test";

/// The subset of a Sonarr webhook body needed to decide what to rescan.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SonarrWebhook {
    pub event_type: String,
    pub instance_name: Option<String>,
    pub application_url: Option<String>,
    /// Sonarr always sends this, but a bare connectivity test does not need it.
    pub series: Option<SonarrSeries>,
    #[serde(default)]
    pub episodes: Vec<SonarrEpisode>,
}

impl SonarrWebhook {
    /// Whether this is only a connectivity check.
    pub fn is_test(&self) -> bool {
        self.event_type == TEST_EVENT_TYPE
    }

    /// The season of the first listed episode, if any episodes were listed. Later episodes are
    /// not consulted.
    pub fn season_hint(&self) -> Option<u32> {
        self.episodes.first().map(|e| e.season_number)
    }
}
