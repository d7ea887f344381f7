//! Craps settlement domain types.
//!
//! Defines the dice roll, bet taxonomy, payout ratio table, per-player position and
//! shared table records consumed by the execution layer. Records that cross the
//! storage boundary implement the commonware codec traits; the storage collaborator
//! only ever sees encoded blobs.

mod bet;
mod constants;
mod payout;
mod position;
mod roll;
mod table;

pub use bet::*;
pub use constants::*;
pub use payout::*;
pub use position::*;
pub use roll::*;
pub use table::*;

#[cfg(test)]
mod tests;
