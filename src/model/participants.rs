use crate::model::structures::{
    match_data::{Match, Participant},
    player::TrackedPlayer
};

/// Finds the participant record belonging to a tracked player, or `None`
/// if none of the player's linked accounts appear in the match.
///
/// Resolution is first-match-wins in the provider's participant order: if
/// two linked accounts somehow appear in the same match, the earlier one
/// is picked. Deterministic as long as the provider keeps its participant
/// ordering stable.
pub fn find_participant<'m>(player: &TrackedPlayer, match_: &'m Match) -> Option<&'m Participant> {
    match_
        .participants
        .iter()
        .find(|participant| player.game_accounts.iter().any(|account| account == &participant.puuid))
}

/// Whether any of the player's linked accounts played in this match.
pub fn is_tracked_in(player: &TrackedPlayer, match_: &Match) -> bool {
    find_participant(player, match_).is_some()
}
