// The scoring engine: queue classification, match aggregation, and the
// leaderboard paths built on top of them.
pub mod constants;
pub mod criteria;
pub mod leaderboard;
pub mod participants;
pub mod queues;
pub mod rank_utils;
pub mod structures;
pub mod tally;
