use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Competitive ladder tiers, worst to best.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Tier {
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Emerald,
    Diamond,
    Master,
    Grandmaster,
    Challenger
}

impl Tier {
    /// The apex tiers have a single division; the division number carries
    /// no meaning there.
    pub fn is_apex(self) -> bool {
        matches!(self, Tier::Master | Tier::Grandmaster | Tier::Challenger)
    }
}

/// A ranked standing in one queue, as reported by the provider's league
/// endpoint. Win/loss counts are the queue's cumulative season totals and
/// never participate in rank comparison.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Rank {
    pub tier: Tier,
    /// Division within the tier, 1..=4, 1 being closest to promotion.
    /// Stored but meaningless for apex tiers.
    pub division: u8,
    pub league_points: i32,
    pub wins: u32,
    pub losses: u32
}

impl Rank {
    /// The substitute standing shown for players with no rank on record.
    /// This is display policy, applied only by the rank criterion
    /// processor: an unplaced player is not actually equivalent to a
    /// placed Iron IV one.
    pub fn unranked() -> Rank {
        Rank {
            tier: Tier::Iron,
            division: 4,
            league_points: 0,
            wins: 0,
            losses: 0
        }
    }
}
