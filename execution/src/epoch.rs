//! Epoch rollover and stale-position refunds.
//!
//! A position whose `epoch_id` trails the table missed the seven-out that
//! ended its epoch. Its wagers can no longer resolve, so they are refunded in
//! full into `pending_winnings` before the position adopts the current epoch.
//! Stale wagers are never dropped.

use sevenout_types::{Position, TableState};
use tracing::debug;

use crate::bankroll;
use crate::error::SettleError;
use crate::policy::PayoutPolicy;
use crate::resolve::reservation;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EpochRefund {
    /// Total stake moved into `pending_winnings`.
    pub refunded: u64,
    /// Worst-case reservation released back to the bankroll.
    pub released_reserve: u64,
}

/// Refund every active wager on a stale position and adopt the table's epoch.
///
/// The stakes still sit on the table, so the refund moves them straight into
/// `pending_winnings` without touching the bankroll. Fails only on overflow,
/// without mutating anything.
pub fn refund_stale<P: PayoutPolicy>(
    table: &mut TableState,
    position: &mut Position,
    policy: &P,
) -> Result<EpochRefund, SettleError> {
    let mut refunded: u64 = 0;
    let mut released_reserve: u64 = 0;
    for (slot, wagered) in position.active_slots() {
        refunded = refunded.checked_add(wagered).ok_or(SettleError::Overflow)?;
        // The point that backed odds reservations is gone; fall back to the
        // widest ratio.
        released_reserve = released_reserve.saturating_add(reservation(policy, slot, wagered, None));
    }
    let pending = position
        .pending_winnings
        .checked_add(refunded)
        .ok_or(SettleError::Overflow)?;

    bankroll::release_reserve(table, released_reserve);
    position.pending_winnings = pending;
    position.reset_for_epoch(table.epoch_id);
    if refunded > 0 {
        debug!(
            refunded,
            epoch_id = table.epoch_id,
            "stale position refunded"
        );
    }
    Ok(EpochRefund {
        refunded,
        released_reserve,
    })
}
