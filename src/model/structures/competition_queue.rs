use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::model::structures::queue_type::QueueType;

/// Queue selector carried by a competition's configuration: either a
/// concrete queue or one of the union filters.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompetitionQueue {
    All,
    RankedAny,
    Solo,
    Flex,
    Aram,
    Arena,
    Clash,
    Urf,
    /// Custom lobbies report no classifiable queue id, so this selector
    /// has no semantic mapping and matches nothing.
    Custom
}

impl CompetitionQueue {
    /// The semantic queue a concrete selector maps to. Union selectors and
    /// unmapped selectors have none.
    pub fn semantic_type(self) -> Option<QueueType> {
        match self {
            CompetitionQueue::Solo => Some(QueueType::RankedSolo),
            CompetitionQueue::Flex => Some(QueueType::RankedFlex),
            CompetitionQueue::Aram => Some(QueueType::Aram),
            CompetitionQueue::Arena => Some(QueueType::Arena),
            CompetitionQueue::Clash => Some(QueueType::Clash),
            CompetitionQueue::Urf => Some(QueueType::Urf),
            CompetitionQueue::All | CompetitionQueue::RankedAny | CompetitionQueue::Custom => None
        }
    }
}
