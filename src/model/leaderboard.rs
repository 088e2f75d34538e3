use serde_json::{Map, Value};
use tracing::debug;

use crate::model::{
    structures::{
        leaderboard_entry::{LeaderboardEntry, Score},
        player::TrackedPlayer
    },
    tally::TallySheet
};

/// Scoring strategy plugged into [`build_leaderboard`]. Each count-based
/// criterion supplies its own score and metadata derivation from a
/// player's win and game counts. Implementations must produce a sensible
/// score for the zero-games case.
pub trait Scoring {
    fn score(&self, wins: u32, games: u32) -> Score;
    fn metadata(&self, wins: u32, games: u32) -> Map<String, Value>;
}

/// Builds one leaderboard entry per roster member from tallied counts.
///
/// Entries come out in roster order: sorting by score is the consumer's
/// job, because which direction is "best" depends on the criterion.
/// Players below `min_games` are dropped from the output entirely rather
/// than carried with an empty score.
pub fn build_leaderboard(
    tally: &TallySheet,
    roster: &[TrackedPlayer],
    scoring: &dyn Scoring,
    min_games: Option<u32>
) -> Vec<LeaderboardEntry> {
    let mut entries = Vec::with_capacity(roster.len());

    for player in roster {
        let wins = tally.wins_for(player.id);
        let games = tally.games_for(player.id);

        if let Some(min_games) = min_games {
            if games < min_games {
                debug!("{} below minimum game count ({} < {})", player.alias, games, min_games);
                continue;
            }
        }

        entries.push(LeaderboardEntry {
            player_id: player.id,
            alias: player.alias.clone(),
            score: scoring.score(wins, games),
            metadata: scoring.metadata(wins, games),
            discord_user_id: player.discord_user_id
        });
    }

    entries
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Map, Value};

    use crate::{
        model::{
            leaderboard::{build_leaderboard, Scoring},
            structures::leaderboard_entry::Score,
            tally::TallySheet
        },
        utils::test_utils::generate_player
    };

    struct WinCountScoring;

    impl Scoring for WinCountScoring {
        fn score(&self, wins: u32, _games: u32) -> Score {
            Score::Count(wins)
        }

        fn metadata(&self, wins: u32, games: u32) -> Map<String, Value> {
            let mut metadata = Map::new();
            metadata.insert("wins".to_string(), json!(wins));
            metadata.insert("games".to_string(), json!(games));
            metadata
        }
    }

    #[test]
    fn test_entries_follow_roster_order() {
        let roster = vec![
            generate_player(3, "tove", &["puuid-c"]),
            generate_player(1, "hex", &["puuid-a"]),
            generate_player(2, "mira", &["puuid-b"]),
        ];
        let mut tally = TallySheet::new();
        tally.record(1, true);
        tally.record(2, false);
        tally.record(3, true);

        let entries = build_leaderboard(&tally, &roster, &WinCountScoring, None);

        let ids: Vec<i64> = entries.iter().map(|e| e.player_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_zero_count_players_receive_entries() {
        let roster = vec![generate_player(1, "hex", &["puuid-a"])];
        let tally = TallySheet::new();

        let entries = build_leaderboard(&tally, &roster, &WinCountScoring, None);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].score, Score::Count(0));
        assert_eq!(entries[0].metadata["games"], json!(0));
    }

    #[test]
    fn test_min_games_excludes_rather_than_zeroes() {
        let roster = vec![
            generate_player(1, "hex", &["puuid-a"]),
            generate_player(2, "mira", &["puuid-b"]),
        ];
        let mut tally = TallySheet::new();
        for _ in 0..10 {
            tally.record(1, true);
        }
        tally.record(2, true);

        let entries = build_leaderboard(&tally, &roster, &WinCountScoring, Some(10));

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].player_id, 1);
    }

    #[test]
    fn test_discord_identity_carried_through() {
        let roster = vec![generate_player(7, "hex", &["puuid-a"])];
        let tally = TallySheet::new();

        let entries = build_leaderboard(&tally, &roster, &WinCountScoring, None);

        assert_eq!(entries[0].discord_user_id, roster[0].discord_user_id);
    }
}
