use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::model::structures::queue_type::QueueType;

/// One completed game as delivered by the match-data provider. Matches are
/// read-only input; the provider is responsible for deduplication.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub match_id: String,
    pub queue_id: u16,
    pub game_creation: DateTime<FixedOffset>,
    pub game_duration_secs: u32,
    pub participants: Vec<Participant>
}

impl Match {
    pub fn queue_type(&self) -> QueueType {
        QueueType::classify(self.queue_id)
    }
}

/// A single player's record within one match.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Provider-assigned account id. Opaque: only ever compared for
    /// equality against roster-linked accounts.
    pub puuid: String,
    pub champion_name: String,
    pub team_id: u16,
    pub win: bool
}
