use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::structures::rank::Rank;

/// A leaderboard entry's score. Count-based criteria produce plain
/// numbers; the rank criterion carries the full rank so the presentation
/// layer can format tier and division.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum Score {
    Count(u32),
    Ratio(f64),
    Rank(Rank)
}

/// One row of a computed leaderboard. Entries are produced fresh per query
/// and never persisted; ordering them is the consumer's job.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub player_id: i64,
    pub alias: String,
    pub score: Score,
    /// Criterion-specific display data, e.g. wins/losses/winRate.
    pub metadata: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discord_user_id: Option<i64>
}
