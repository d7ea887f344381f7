//! Settlement orchestration.
//!
//! A settlement runs in two strict phases: a check phase that computes every
//! fallible value (resolution deltas, counter sums, the net bankroll movement)
//! and a commit phase that only assigns. An error from any settle function
//! leaves the table and the position exactly as they were.

use sevenout_types::{DiceRoll, Position, TableState};
use tracing::debug;

use crate::bankroll;
use crate::epoch;
use crate::error::SettleError;
use crate::policy::PayoutPolicy;
use crate::resolve::{resolve_roll, reservation, roll_transition, PhaseTransition, RollResolution};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettlementOutcome {
    /// Wagers resolved against the roll.
    Resolved(RollResolution),
    /// The position predated the current epoch; its wagers were refunded in
    /// full instead of being resolved.
    StaleRefund { refunded: u64 },
    /// The position had already settled this round; only produced by
    /// [`settle_round`] when a batch is re-driven.
    Skipped { last_settled: u64 },
}

/// Settle one position against one roll and advance the table phase.
///
/// For rounds with several positions use [`settle_round`], which resolves all
/// of them against the pre-roll phase before the table advances.
pub fn settle_roll<P: PayoutPolicy>(
    table: &mut TableState,
    position: &mut Position,
    round_id: u64,
    roll: DiceRoll,
    policy: &P,
) -> Result<SettlementOutcome, SettleError> {
    let transition = roll_transition(table, roll);
    let outcome = settle_position(table, position, round_id, roll, policy)?;
    advance_table(table, round_id, transition);
    Ok(outcome)
}

/// Settle several positions against the same roll, then advance the table
/// phase once. Positions after a failing one are left unsettled.
///
/// Positions already settled for this round are skipped rather than treated
/// as an error, so a round that failed mid-batch (say on
/// [`SettleError::InsufficientHouseFunds`]) can be re-driven to completion
/// once the failure is corrected.
pub fn settle_round<'a, P: PayoutPolicy>(
    table: &mut TableState,
    positions: impl IntoIterator<Item = &'a mut Position>,
    round_id: u64,
    roll: DiceRoll,
    policy: &P,
) -> Result<Vec<SettlementOutcome>, SettleError> {
    let transition = roll_transition(table, roll);
    let mut outcomes = Vec::new();
    for position in positions {
        match settle_position(table, position, round_id, roll, policy) {
            Ok(outcome) => outcomes.push(outcome),
            Err(SettleError::AlreadySettled { last_settled, .. }) => {
                outcomes.push(SettlementOutcome::Skipped { last_settled });
            }
            Err(err) => return Err(err),
        }
    }
    // A batch where every position was skipped is a pure retry; the phase
    // transition was already applied the first time around.
    if outcomes.is_empty()
        || outcomes
            .iter()
            .any(|outcome| !matches!(outcome, SettlementOutcome::Skipped { .. }))
    {
        advance_table(table, round_id, transition);
    }
    Ok(outcomes)
}

/// Resolve and commit one position without touching the table phase.
///
/// On a seven-out the position adopts the next epoch immediately; wagers the
/// roll did not resolve (non-working place bets) are refunded rather than
/// carried into an epoch where they could never resolve.
pub fn settle_position<P: PayoutPolicy>(
    table: &mut TableState,
    position: &mut Position,
    round_id: u64,
    roll: DiceRoll,
    policy: &P,
) -> Result<SettlementOutcome, SettleError> {
    if position.epoch_id != table.epoch_id {
        let refund = epoch::refund_stale(table, position, policy)?;
        position.last_settled_round = round_id;
        return Ok(SettlementOutcome::StaleRefund {
            refunded: refund.refunded,
        });
    }
    if position.last_settled_round >= round_id {
        return Err(SettleError::AlreadySettled {
            round: round_id,
            last_settled: position.last_settled_round,
        });
    }

    let resolution = resolve_roll(table, position, roll, policy)?;

    // Check phase: compute everything that can fail.
    let mut leftover_refund: u64 = 0;
    let mut leftover_reserve: u64 = 0;
    if resolution.transition == PhaseTransition::SevenOut {
        for (slot, wagered) in position.active_slots() {
            if resolution.cleared & (1 << slot.bit()) != 0 {
                continue;
            }
            leftover_refund = leftover_refund
                .checked_add(wagered)
                .ok_or(SettleError::Overflow)?;
            leftover_reserve =
                leftover_reserve.saturating_add(reservation(policy, slot, wagered, table.point));
        }
    }
    let pending = position
        .pending_winnings
        .checked_add(resolution.credited)
        .ok_or(SettleError::Overflow)?
        .checked_add(leftover_refund)
        .ok_or(SettleError::Overflow)?;
    let total_won = position
        .total_won
        .checked_add(resolution.credited)
        .ok_or(SettleError::Overflow)?;
    let total_lost = position
        .total_lost
        .checked_add(resolution.retained)
        .ok_or(SettleError::Overflow)?;
    let total_payouts = table
        .total_payouts
        .checked_add(resolution.credited)
        .ok_or(SettleError::Overflow)?;
    let total_collected = table
        .total_collected
        .checked_add(resolution.retained)
        .ok_or(SettleError::Overflow)?;
    let house_bankroll =
        bankroll::plan_settlement(table, resolution.credited, resolution.resolved_stakes)?;

    // Commit phase: assignments only.
    position.clear_mask(resolution.cleared);
    position.pending_winnings = pending;
    position.total_won = total_won;
    position.total_lost = total_lost;
    position.last_settled_round = round_id;
    table.total_payouts = total_payouts;
    table.total_collected = total_collected;
    table.house_bankroll = house_bankroll;
    bankroll::release_reserve(
        table,
        resolution.released_reserve.saturating_add(leftover_reserve),
    );
    if resolution.transition == PhaseTransition::SevenOut {
        // The table itself rolls over in `advance_table`.
        position.reset_for_epoch(table.epoch_id + 1);
    }

    debug!(
        round_id,
        credited = resolution.credited,
        retained = resolution.retained,
        refunded = leftover_refund,
        transition = ?resolution.transition,
        "roll settled"
    );
    Ok(SettlementOutcome::Resolved(resolution))
}

/// Apply a roll's phase transition to the table. Call once per round, after
/// every position has been settled against the pre-roll phase.
pub fn advance_table(table: &mut TableState, round_id: u64, transition: PhaseTransition) {
    match transition {
        PhaseTransition::None => {}
        PhaseTransition::PointEstablished(point) => table.set_point(point),
        PhaseTransition::PointMade => table.clear_point(),
        PhaseTransition::SevenOut => {
            table.start_new_epoch(round_id);
            debug!(epoch_id = table.epoch_id, "seven-out, new epoch");
        }
    }
}
