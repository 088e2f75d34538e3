use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::structures::competition_queue::CompetitionQueue;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CriterionError {
    #[error("minimum game count must be at least 1")]
    InvalidMinGames,

    #[error("champion filter must not be empty")]
    EmptyChampionFilter
}

/// Which ranked ladder a highest-rank competition reads. Rank snapshots
/// only exist for the two ranked queues.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RankedQueue {
    Solo,
    Flex
}

/// The scoring rule for one leaderboard query. A closed set: competitions
/// are configured from these variants and nothing else.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Criterion {
    MostWins {
        queue: CompetitionQueue,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        champion: Option<String>
    },
    HighestWinRate {
        queue: CompetitionQueue,
        /// Sample-size floor; falls back to the crate default when unset.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_games: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        champion: Option<String>
    },
    HighestRank {
        queue: RankedQueue
    }
}

impl Criterion {
    /// Rejects malformed configuration before any aggregation runs.
    /// Aggregation itself never raises configuration errors.
    pub fn validate(&self) -> Result<(), CriterionError> {
        match self {
            Criterion::HighestWinRate { min_games: Some(0), .. } => Err(CriterionError::InvalidMinGames),
            Criterion::MostWins { champion: Some(champion), .. }
            | Criterion::HighestWinRate { champion: Some(champion), .. }
                if champion.trim().is_empty() =>
            {
                Err(CriterionError::EmptyChampionFilter)
            }
            _ => Ok(())
        }
    }
}
