//! Sevenout settlement engine.
//!
//! This crate contains the deterministic wager settlement logic: placement
//! validation, the pure per-roll resolution pass, the solvency-gated commit
//! against the house bankroll, and epoch rollover on seven-out.
//!
//! ## Determinism requirements
//! - Do not use wall-clock time inside settlement.
//! - Dice come from the external RNG oracle as a validated
//!   [`sevenout_types::DiceRoll`]; no randomness is drawn here.
//! - All payout arithmetic is integer-only (floored rationals through a wide
//!   intermediate); results must be bit-reproducible across platforms.
//!
//! ## Commit discipline
//! Every operation computes its fallible values first and mutates state only
//! once nothing can fail. A settlement that returns an error leaves the table
//! and the position exactly as they were.
//!
//! The primary entrypoints are [`place_bet`], [`settle_roll`] (or
//! [`settle_round`] for several positions against one roll) and
//! [`claim_winnings`].

pub mod bankroll;
pub mod claim;
pub mod epoch;
pub mod error;
pub mod place;
pub mod policy;
pub mod resolve;
pub mod settle;

pub use bankroll::{available_bankroll, fund_house};
pub use claim::claim_winnings;
pub use epoch::{refund_stale, EpochRefund};
pub use error::{ClaimError, FundError, PlaceError, SettleError};
pub use place::place_bet;
pub use policy::{FixedOdds, PayoutPolicy};
pub use resolve::{resolve_roll, roll_transition, BetOutcome, Outcome, PhaseTransition, RollResolution};
pub use settle::{advance_table, settle_position, settle_roll, settle_round, SettlementOutcome};
