//! House bankroll accounting.
//!
//! The bankroll is house capital only. Stakes stay on the table (in position
//! slots) until they resolve: winners are paid gross from the bankroll and
//! every resolved stake is collected into it in the same commit.
//! `reserved_payouts` earmarks the worst-case payout for every unresolved
//! wager so new bets are only accepted while the house stays solvent.

use sevenout_types::TableState;
use tracing::info;

use crate::error::{FundError, SettleError};

/// Plan the net effect of one resolution pass: `winnings` (stakes returned
/// plus profits) are paid from house capital, while the stakes of every
/// resolved wager are collected off the table. Returns the new bankroll.
///
/// The solvency check runs against the gross payout before any collection is
/// counted; a settlement the house cannot cover fails here with nothing
/// mutated.
pub(crate) fn plan_settlement(
    table: &TableState,
    winnings: u64,
    collected: u64,
) -> Result<u64, SettleError> {
    if table.house_bankroll < winnings {
        return Err(SettleError::InsufficientHouseFunds {
            needed: winnings,
            available: table.house_bankroll,
        });
    }
    (table.house_bankroll - winnings)
        .checked_add(collected)
        .ok_or(SettleError::Overflow)
}

/// Release reservation after slots resolve. Saturating: a release computed
/// against stale context may exceed what is still reserved.
pub(crate) fn release_reserve(table: &mut TableState, amount: u64) {
    table.reserved_payouts = table.reserved_payouts.saturating_sub(amount);
}

/// Bankroll not yet earmarked for unresolved wagers.
pub fn available_bankroll(table: &TableState) -> u64 {
    table.house_bankroll.saturating_sub(table.reserved_payouts)
}

/// Add house capital. Returns the new bankroll.
pub fn fund_house(table: &mut TableState, amount: u64) -> Result<u64, FundError> {
    if amount == 0 {
        return Err(FundError::ZeroAmount);
    }
    table.house_bankroll = table
        .house_bankroll
        .checked_add(amount)
        .ok_or(FundError::Overflow)?;
    info!(amount, house_bankroll = table.house_bankroll, "house funded");
    Ok(table.house_bankroll)
}
