use indexmap::IndexMap;
use itertools::Itertools;
use tracing::debug;

use crate::model::{
    participants::find_participant,
    queues::matches_filter,
    structures::{
        competition_queue::CompetitionQueue,
        match_data::{Match, Participant},
        player::TrackedPlayer
    }
};

/// Participant-level filter applied on top of the queue filter, e.g. "only
/// games on a specific champion". Evaluated per (player, match) pairing:
/// two tracked players in the same match can differ on it.
pub type ParticipantPredicate = dyn Fn(&Participant) -> bool;

/// Per-player win and game counts over a match corpus.
///
/// Keys appear in first-recorded order. Lookups for players who never
/// recorded a game return zero rather than signalling absence, so
/// downstream arithmetic never sees a missing key.
#[derive(Debug, Clone, Default)]
pub struct TallySheet {
    wins: IndexMap<i64, u32>,
    games: IndexMap<i64, u32>
}

impl TallySheet {
    pub fn new() -> TallySheet {
        TallySheet {
            wins: IndexMap::new(),
            games: IndexMap::new()
        }
    }

    /// Records one counted game for the player.
    pub fn record(&mut self, player_id: i64, win: bool) {
        *self.games.entry(player_id).or_insert(0) += 1;

        let wins = self.wins.entry(player_id).or_insert(0);
        if win {
            *wins += 1;
        }
    }

    pub fn wins_for(&self, player_id: i64) -> u32 {
        self.wins.get(&player_id).copied().unwrap_or(0)
    }

    pub fn games_for(&self, player_id: i64) -> u32 {
        self.games.get(&player_id).copied().unwrap_or(0)
    }

    /// Player ids with at least one counted game, in first-recorded order.
    pub fn players(&self) -> impl Iterator<Item = i64> + '_ {
        self.games.keys().copied()
    }
}

/// Aggregates wins and games for every roster member over the corpus.
///
/// A match outside the queue filter contributes nothing at all. Within a
/// counted match, a roster member with no resolvable participant is
/// skipped, and a participant rejected by the predicate is skipped too:
/// that game then counts as neither a game played nor a loss for the
/// player. Aggregation is commutative, so corpus order is irrelevant.
pub fn count_wins_and_games(
    matches: &[Match],
    roster: &[TrackedPlayer],
    filter: CompetitionQueue,
    predicate: Option<&ParticipantPredicate>
) -> TallySheet {
    debug!(
        "Tallying {} matches under filter {} for [{}]",
        matches.len(),
        filter,
        roster.iter().map(|p| p.alias.as_str()).join(", ")
    );

    let mut tally = TallySheet::new();
    for match_ in matches {
        if !matches_filter(match_.queue_type(), filter) {
            continue;
        }

        for player in roster {
            let participant = match find_participant(player, match_) {
                Some(participant) => participant,
                None => continue
            };

            if let Some(predicate) = predicate {
                if !predicate(participant) {
                    continue;
                }
            }

            tally.record(player.id, participant.win);
        }
    }

    tally
}

#[cfg(test)]
mod tests {
    use crate::{
        model::{
            structures::{competition_queue::CompetitionQueue, match_data::Participant},
            tally::{count_wins_and_games, TallySheet}
        },
        utils::test_utils::{generate_match, generate_matches, generate_participant, generate_player}
    };

    #[test]
    fn test_default_zero_lookups() {
        let tally = TallySheet::new();

        assert_eq!(tally.wins_for(42), 0);
        assert_eq!(tally.games_for(42), 0);
        assert_eq!(tally.players().count(), 0);
    }

    #[test]
    fn test_record_increments_games_and_wins() {
        let mut tally = TallySheet::new();

        tally.record(1, true);
        tally.record(1, false);
        tally.record(1, true);

        assert_eq!(tally.wins_for(1), 2);
        assert_eq!(tally.games_for(1), 3);
    }

    #[test]
    fn test_counts_only_filtered_queues() {
        let roster = vec![generate_player(1, "hex", &["puuid-a"])];
        let matches = vec![
            generate_match("NA1_1", 420, &[generate_participant("puuid-a", "Lux", true)]),
            generate_match("NA1_2", 440, &[generate_participant("puuid-a", "Lux", true)]),
            generate_match("NA1_3", 450, &[generate_participant("puuid-a", "Lux", false)]),
        ];

        let solo = count_wins_and_games(&matches, &roster, CompetitionQueue::Solo, None);
        let ranked = count_wins_and_games(&matches, &roster, CompetitionQueue::RankedAny, None);
        let all = count_wins_and_games(&matches, &roster, CompetitionQueue::All, None);

        assert_eq!((solo.wins_for(1), solo.games_for(1)), (1, 1));
        assert_eq!((ranked.wins_for(1), ranked.games_for(1)), (2, 2));
        assert_eq!((all.wins_for(1), all.games_for(1)), (2, 3));
    }

    #[test]
    fn test_absent_player_contributes_nothing() {
        let roster = vec![
            generate_player(1, "hex", &["puuid-a"]),
            generate_player(2, "mira", &["puuid-z"]),
        ];
        let matches = vec![generate_match(
            "NA1_1",
            420,
            &[generate_participant("puuid-a", "Lux", true)]
        )];

        let tally = count_wins_and_games(&matches, &roster, CompetitionQueue::All, None);

        assert_eq!(tally.wins_for(2), 0);
        assert_eq!(tally.games_for(2), 0);
        assert_eq!(tally.players().collect::<Vec<i64>>(), vec![1]);
    }

    #[test]
    fn test_predicate_excludes_game_entirely() {
        let roster = vec![generate_player(1, "hex", &["puuid-a"])];
        let matches = vec![
            generate_match("NA1_1", 420, &[generate_participant("puuid-a", "Lux", false)]),
            generate_match("NA1_2", 420, &[generate_participant("puuid-a", "Ahri", true)]),
        ];

        let on_lux = |p: &Participant| p.champion_name == "Lux";
        let tally = count_wins_and_games(&matches, &roster, CompetitionQueue::Solo, Some(&on_lux));

        // The Ahri game is not a loss or a game played, it simply does not count.
        assert_eq!(tally.wins_for(1), 0);
        assert_eq!(tally.games_for(1), 1);
    }

    #[test]
    fn test_predicate_is_per_player_not_per_match() {
        let roster = vec![
            generate_player(1, "hex", &["puuid-a"]),
            generate_player(2, "mira", &["puuid-b"]),
        ];
        let matches = vec![generate_match(
            "NA1_1",
            420,
            &[
                generate_participant("puuid-a", "Lux", true),
                generate_participant("puuid-b", "Ahri", false),
            ]
        )];

        let on_lux = |p: &Participant| p.champion_name == "Lux";
        let tally = count_wins_and_games(&matches, &roster, CompetitionQueue::Solo, Some(&on_lux));

        assert_eq!(tally.games_for(1), 1);
        assert_eq!(tally.games_for(2), 0);
    }

    #[test]
    fn test_wins_never_exceed_games() {
        let accounts = ["puuid-a", "puuid-b", "puuid-c"];
        let roster = vec![
            generate_player(1, "hex", &["puuid-a"]),
            generate_player(2, "mira", &["puuid-b"]),
            generate_player(3, "tove", &["puuid-c"]),
        ];
        let matches = generate_matches(200, &accounts);

        let tally = count_wins_and_games(&matches, &roster, CompetitionQueue::RankedAny, None);

        for player in &roster {
            assert!(tally.wins_for(player.id) <= tally.games_for(player.id));
            assert_eq!(tally.games_for(player.id), 200);
        }
    }

    #[test]
    fn test_aggregation_is_order_independent() {
        let accounts = ["puuid-a", "puuid-b"];
        let roster = vec![
            generate_player(1, "hex", &["puuid-a"]),
            generate_player(2, "mira", &["puuid-b"]),
        ];
        let mut matches = generate_matches(50, &accounts);

        let forward = count_wins_and_games(&matches, &roster, CompetitionQueue::All, None);
        matches.reverse();
        let backward = count_wins_and_games(&matches, &roster, CompetitionQueue::All, None);

        for player in &roster {
            assert_eq!(forward.wins_for(player.id), backward.wins_for(player.id));
            assert_eq!(forward.games_for(player.id), backward.games_for(player.id));
        }
    }
}
