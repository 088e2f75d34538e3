use serde::{Deserialize, Serialize};

/// A roster entry: someone whose standing a competition tracks. Sourced
/// from the identity store; the engine never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedPlayer {
    pub id: i64,
    pub alias: String,
    /// Linked game accounts (puuids). At most one participant per match is
    /// resolved through this set.
    pub game_accounts: Vec<String>,
    /// Messaging-platform identity, carried through to leaderboard entries
    /// for attribution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discord_user_id: Option<i64>
}
