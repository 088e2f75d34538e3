use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::info;

use crate::model::{
    constants::DEFAULT_MIN_GAMES,
    leaderboard::{build_leaderboard, Scoring},
    rank_utils::rank_to_league_points,
    structures::{
        criterion::{Criterion, CriterionError, RankedQueue},
        leaderboard_entry::{LeaderboardEntry, Score},
        match_data::{Match, Participant},
        player::TrackedPlayer,
        rank::Rank
    },
    tally::{count_wins_and_games, ParticipantPredicate}
};

/// A player's most recent ranked standings, fetched by an upstream
/// collaborator before the engine runs. A missing queue entry means no
/// rank on record for that queue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankSnapshot {
    pub solo: Option<Rank>,
    pub flex: Option<Rank>
}

impl RankSnapshot {
    pub fn for_queue(&self, queue: RankedQueue) -> Option<&Rank> {
        match queue {
            RankedQueue::Solo => self.solo.as_ref(),
            RankedQueue::Flex => self.flex.as_ref()
        }
    }
}

pub struct MostWinsScoring;

impl Scoring for MostWinsScoring {
    fn score(&self, wins: u32, _games: u32) -> Score {
        Score::Count(wins)
    }

    fn metadata(&self, wins: u32, games: u32) -> Map<String, Value> {
        count_metadata(wins, games)
    }
}

pub struct WinRateScoring;

impl Scoring for WinRateScoring {
    fn score(&self, wins: u32, games: u32) -> Score {
        Score::Ratio(win_rate(wins, games))
    }

    fn metadata(&self, wins: u32, games: u32) -> Map<String, Value> {
        let mut metadata = count_metadata(wins, games);
        metadata.insert("winRate".to_string(), json!(win_rate(wins, games)));
        metadata
    }
}

/// Win rate with an explicit zero for the no-games case. Never NaN.
pub fn win_rate(wins: u32, games: u32) -> f64 {
    if games == 0 {
        return 0.0;
    }

    wins as f64 / games as f64
}

fn count_metadata(wins: u32, games: u32) -> Map<String, Value> {
    let mut metadata = Map::new();
    metadata.insert("wins".to_string(), json!(wins));
    metadata.insert("games".to_string(), json!(games));
    metadata.insert("losses".to_string(), json!(games - wins));
    metadata
}

/// Builds a highest-rank leaderboard from pre-fetched rank snapshots.
/// Match history never enters this path: current rank is not derivable
/// from the corpus.
///
/// A player with no snapshot for the queue stays on the board with the
/// unranked substitute rank instead of disappearing.
pub fn rank_leaderboard(
    roster: &[TrackedPlayer],
    snapshots: &HashMap<i64, RankSnapshot>,
    queue: RankedQueue
) -> Vec<LeaderboardEntry> {
    let mut entries = Vec::with_capacity(roster.len());

    for player in roster {
        let rank = snapshots
            .get(&player.id)
            .and_then(|snapshot| snapshot.for_queue(queue))
            .copied()
            .unwrap_or_else(Rank::unranked);

        entries.push(LeaderboardEntry {
            player_id: player.id,
            alias: player.alias.clone(),
            metadata: rank_metadata(&rank),
            score: Score::Rank(rank),
            discord_user_id: player.discord_user_id
        });
    }

    entries
}

fn rank_metadata(rank: &Rank) -> Map<String, Value> {
    let mut metadata = Map::new();
    metadata.insert("leaguePoints".to_string(), json!(rank_to_league_points(rank)));
    metadata.insert("tier".to_string(), json!(rank.tier.to_string()));
    metadata.insert("division".to_string(), json!(rank.division));
    metadata.insert("lp".to_string(), json!(rank.league_points));
    metadata.insert("wins".to_string(), json!(rank.wins));
    metadata.insert("losses".to_string(), json!(rank.losses));
    metadata
}

/// Entry point for one leaderboard query: validates the criterion, then
/// routes it to match aggregation or the rank snapshot path. Pure over its
/// inputs; re-invocation with identical inputs yields identical output.
pub fn process_criterion(
    matches: &[Match],
    roster: &[TrackedPlayer],
    snapshots: &HashMap<i64, RankSnapshot>,
    criterion: &Criterion
) -> Result<Vec<LeaderboardEntry>, CriterionError> {
    criterion.validate()?;

    info!(
        "Processing criterion {:?} over {} matches, {} players",
        criterion,
        matches.len(),
        roster.len()
    );

    let entries = match criterion {
        Criterion::MostWins { queue, champion } => {
            let predicate = champion_predicate(champion);
            let tally = count_wins_and_games(matches, roster, *queue, predicate.as_deref());
            build_leaderboard(&tally, roster, &MostWinsScoring, None)
        }
        Criterion::HighestWinRate {
            queue,
            min_games,
            champion
        } => {
            let predicate = champion_predicate(champion);
            let tally = count_wins_and_games(matches, roster, *queue, predicate.as_deref());
            build_leaderboard(&tally, roster, &WinRateScoring, Some(min_games.unwrap_or(DEFAULT_MIN_GAMES)))
        }
        Criterion::HighestRank { queue } => rank_leaderboard(roster, snapshots, *queue)
    };

    Ok(entries)
}

fn champion_predicate(champion: &Option<String>) -> Option<Box<ParticipantPredicate>> {
    champion.as_ref().map(|champion| {
        let champion = champion.clone();
        Box::new(move |participant: &Participant| participant.champion_name == champion) as Box<ParticipantPredicate>
    })
}
