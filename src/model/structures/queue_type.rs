use serde_repr::{Deserialize_repr, Serialize_repr};
use std::convert::TryFrom;
use strum_macros::{Display, EnumIter};

/// Semantic queue classification for a match. The discriminants are the
/// provider's wire queue ids.
#[derive(Deserialize_repr, Serialize_repr, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[repr(u16)]
pub enum QueueType {
    Unrecognized = 0,
    NormalDraft = 400,
    RankedSolo = 420,
    NormalBlind = 430,
    RankedFlex = 440,
    Aram = 450,
    Clash = 700,
    Urf = 900,
    Arena = 1700
}

impl QueueType {
    /// Classifies a raw provider queue id. Total: ids we do not track come
    /// back as `Unrecognized`, never as an error.
    pub fn classify(raw_queue_id: u16) -> QueueType {
        match raw_queue_id {
            400 => QueueType::NormalDraft,
            420 => QueueType::RankedSolo,
            430 => QueueType::NormalBlind,
            440 => QueueType::RankedFlex,
            450 => QueueType::Aram,
            700 => QueueType::Clash,
            900 => QueueType::Urf,
            1700 => QueueType::Arena,
            _ => QueueType::Unrecognized
        }
    }

    pub fn is_ranked(self) -> bool {
        matches!(self, QueueType::RankedSolo | QueueType::RankedFlex)
    }
}

impl TryFrom<i32> for QueueType {
    type Error = ();

    fn try_from(v: i32) -> Result<Self, Self::Error> {
        match v {
            400 => Ok(QueueType::NormalDraft),
            420 => Ok(QueueType::RankedSolo),
            430 => Ok(QueueType::NormalBlind),
            440 => Ok(QueueType::RankedFlex),
            450 => Ok(QueueType::Aram),
            700 => Ok(QueueType::Clash),
            900 => Ok(QueueType::Urf),
            1700 => Ok(QueueType::Arena),
            _ => Err(())
        }
    }
}
