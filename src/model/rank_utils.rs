use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::model::{
    constants::{DIVISIONS_PER_TIER, DIVISION_LP_SPAN, TIER_LP_SPAN},
    structures::rank::{Rank, Tier}
};

lazy_static! {
    /// Approximate share of the ranked population at or above each tier,
    /// as a "top X%" figure. Display data only; ordering never reads it.
    static ref TIER_PERCENTILES: HashMap<Tier, f64> = HashMap::from([
        (Tier::Iron, 100.0),
        (Tier::Bronze, 92.5),
        (Tier::Silver, 73.0),
        (Tier::Gold, 48.0),
        (Tier::Platinum, 24.0),
        (Tier::Emerald, 10.5),
        (Tier::Diamond, 2.8),
        (Tier::Master, 0.52),
        (Tier::Grandmaster, 0.06),
        (Tier::Challenger, 0.011),
    ]);
}

/// Collapses a rank into a single comparable number: full tiers sit 400 LP
/// apart, divisions 100 LP apart, and league points fill in the rest. The
/// apex tiers share one base, since standing among them is carried
/// entirely by league points.
pub fn rank_to_league_points(rank: &Rank) -> i32 {
    let division_offset = if rank.tier.is_apex() {
        0
    } else {
        (DIVISIONS_PER_TIER - rank.division.clamp(1, DIVISIONS_PER_TIER)) as i32 * DIVISION_LP_SPAN
    };

    tier_base(rank.tier) + division_offset + rank.league_points
}

fn tier_base(tier: Tier) -> i32 {
    match tier {
        Tier::Iron => 0,
        Tier::Bronze => TIER_LP_SPAN,
        Tier::Silver => 2 * TIER_LP_SPAN,
        Tier::Gold => 3 * TIER_LP_SPAN,
        Tier::Platinum => 4 * TIER_LP_SPAN,
        Tier::Emerald => 5 * TIER_LP_SPAN,
        Tier::Diamond => 6 * TIER_LP_SPAN,
        Tier::Master | Tier::Grandmaster | Tier::Challenger => 7 * TIER_LP_SPAN
    }
}

/// True when `current` sits above `previous` on the ladder: a tier
/// climbed, or a lower (better) division within the same tier. League
/// points never trigger a promotion on their own.
///
/// With no prior rank on record there is nothing to compare against, so
/// the answer is false.
pub fn was_promoted(previous: Option<&Rank>, current: &Rank) -> bool {
    match previous {
        Some(previous) => {
            current.tier > previous.tier || (current.tier == previous.tier && current.division < previous.division)
        }
        None => false
    }
}

/// Mirror of [`was_promoted`].
pub fn was_demoted(previous: Option<&Rank>, current: &Rank) -> bool {
    match previous {
        Some(previous) => {
            current.tier < previous.tier || (current.tier == previous.tier && current.division > previous.division)
        }
        None => false
    }
}

/// Approximate "top X%" population figure for a tier.
pub fn tier_to_percentile(tier: Tier) -> f64 {
    TIER_PERCENTILES[&tier]
}
