pub mod competition_queue;
pub mod criterion;
pub mod leaderboard_entry;
pub mod match_data;
pub mod player;
pub mod queue_type;
pub mod rank;
