use chrono::{DateTime, Duration, FixedOffset};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::model::structures::{
    match_data::{Match, Participant},
    player::TrackedPlayer,
    queue_type::QueueType,
    rank::{Rank, Tier}
};

pub fn generate_player(id: i64, alias: &str, accounts: &[&str]) -> TrackedPlayer {
    TrackedPlayer {
        id,
        alias: alias.to_string(),
        game_accounts: accounts.iter().map(|account| account.to_string()).collect(),
        discord_user_id: Some(100_000 + id)
    }
}

pub fn generate_participant(puuid: &str, champion: &str, win: bool) -> Participant {
    Participant {
        puuid: puuid.to_string(),
        champion_name: champion.to_string(),
        team_id: if win { 100 } else { 200 },
        win
    }
}

pub fn generate_match(match_id: &str, queue_id: u16, participants: &[Participant]) -> Match {
    Match {
        match_id: match_id.to_string(),
        queue_id,
        game_creation: default_game_creation(),
        game_duration_secs: 1800,
        participants: participants.to_vec()
    }
}

pub fn generate_rank(tier: Tier, division: u8, league_points: i32) -> Rank {
    Rank {
        tier,
        division,
        league_points,
        wins: 40,
        losses: 38
    }
}

/// Seeded corpus of solo-queue matches with random outcomes for the given
/// accounts. Reproducible across runs.
pub fn generate_matches(n: usize, accounts: &[&str]) -> Vec<Match> {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut matches = Vec::with_capacity(n);

    for i in 0..n {
        let participants: Vec<Participant> = accounts
            .iter()
            .map(|account| generate_participant(account, "Lux", rng.random_bool(0.5)))
            .collect();

        let mut match_ = generate_match(
            &format!("NA1_{}", 4_000_000_000u64 + i as u64),
            QueueType::RankedSolo as u16,
            &participants
        );
        match_.game_creation = default_game_creation() + Duration::hours(i as i64);
        matches.push(match_);
    }

    matches
}

fn default_game_creation() -> DateTime<FixedOffset> {
    "2024-03-01T20:00:00+00:00".parse().unwrap()
}
