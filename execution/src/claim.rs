//! Claiming settled winnings.

use sevenout_types::Position;
use tracing::debug;

use crate::error::ClaimError;

/// Take the position's pending winnings for payout.
///
/// Pending winnings are already fully funded when they are settled or
/// refunded, so no solvency check happens here. The balance is cleared before
/// the amount is handed to the caller for transfer (check-effects-
/// interactions).
pub fn claim_winnings(position: &mut Position) -> Result<u64, ClaimError> {
    let amount = position.pending_winnings;
    if amount == 0 {
        return Err(ClaimError::NothingPending);
    }
    position.pending_winnings = 0;
    debug!(amount, "winnings claimed");
    Ok(amount)
}
