// Scoring constants
/// Sample-size floor for win-rate leaderboards when the competition does
/// not override it. Keeps 1/1 records off the top of the board.
pub const DEFAULT_MIN_GAMES: u32 = 10;

// League point scale used by rank scoring
pub const DIVISIONS_PER_TIER: u8 = 4;
pub const DIVISION_LP_SPAN: i32 = 100;
pub const TIER_LP_SPAN: i32 = DIVISIONS_PER_TIER as i32 * DIVISION_LP_SPAN;
