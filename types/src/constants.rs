//! Table-wide constants.

/// Number of point numbers (4, 5, 6, 8, 9, 10).
pub const NUM_POINTS: usize = 6;

/// Number of hardway bets (hard 4, 6, 8, 10).
pub const NUM_HARDWAYS: usize = 4;

/// Total wager slots in a position: four line slots, five point-indexed arrays of
/// six, one hardway array of four, and six single-roll slots.
pub const NUM_BET_SLOTS: usize = 4 + 5 * NUM_POINTS + NUM_HARDWAYS + 6;

/// Maximum single bet amount, in the smallest currency unit.
pub const MAX_BET_AMOUNT: u64 = 100_000_000_000;
