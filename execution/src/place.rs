//! Wager placement.
//!
//! Placement validates phase and target and reserves the worst-case payout
//! against the unreserved bankroll before the stake lands in its slot. A bet
//! the house could not pay out in full is rejected up front instead of
//! failing at settlement.

use sevenout_types::{BetKind, Hardway, Point, Position, Slot, TableState, MAX_BET_AMOUNT};
use tracing::debug;

use crate::bankroll;
use crate::epoch;
use crate::error::PlaceError;
use crate::policy::PayoutPolicy;

/// Place a wager of `amount` for the position. `target` carries the point or
/// hardway number for the bet kinds that ride on one.
///
/// Returns the slot the wager landed in.
pub fn place_bet<P: PayoutPolicy>(
    table: &mut TableState,
    position: &mut Position,
    kind: BetKind,
    target: Option<u8>,
    amount: u64,
    policy: &P,
) -> Result<Slot, PlaceError> {
    if amount == 0 || amount > MAX_BET_AMOUNT {
        return Err(PlaceError::InvalidAmount {
            max: MAX_BET_AMOUNT,
        });
    }

    // A position left over from a previous epoch is refunded before it can
    // wager again.
    if position.epoch_id != table.epoch_id {
        epoch::refund_stale(table, position, policy).map_err(|_| PlaceError::Overflow)?;
    }

    let slot = slot_for(kind, target)?;
    check_phase(table, position, kind, slot)?;

    // Reserve the worst case before accepting the stake.
    let ratio = policy.reserve(slot, table.point);
    let winnings = ratio.winnings(amount).ok_or(PlaceError::Overflow)?;
    let max_payout = amount.checked_add(winnings).ok_or(PlaceError::Overflow)?;
    let available = bankroll::available_bankroll(table);
    if max_payout > available {
        return Err(PlaceError::InsufficientBankroll {
            needed: max_payout,
            available,
        });
    }

    let total_wagered = position
        .total_wagered
        .checked_add(amount)
        .ok_or(PlaceError::Overflow)?;
    let reserved_payouts = table
        .reserved_payouts
        .checked_add(max_payout)
        .ok_or(PlaceError::Overflow)?;
    position.add(slot, amount).ok_or(PlaceError::Overflow)?;

    position.total_wagered = total_wagered;
    if kind == BetKind::Place {
        position.place_working = true;
    }
    table.reserved_payouts = reserved_payouts;

    debug!(
        ?kind,
        target,
        amount,
        reserved = max_payout,
        available = bankroll::available_bankroll(table),
        "bet placed"
    );
    Ok(slot)
}

/// Map a bet kind and optional target onto its position slot.
fn slot_for(kind: BetKind, target: Option<u8>) -> Result<Slot, PlaceError> {
    let invalid = || PlaceError::InvalidTarget { kind, target };
    let point = |target: Option<u8>| {
        target
            .and_then(|value| Point::try_from(value).ok())
            .ok_or_else(invalid)
    };
    Ok(match kind {
        BetKind::PassLine => Slot::PassLine,
        BetKind::DontPass => Slot::DontPass,
        BetKind::PassOdds => Slot::PassOdds,
        BetKind::DontPassOdds => Slot::DontPassOdds,
        BetKind::Come => Slot::Come(point(target)?),
        BetKind::DontCome => Slot::DontCome(point(target)?),
        BetKind::ComeOdds => Slot::ComeOdds(point(target)?),
        BetKind::DontComeOdds => Slot::DontComeOdds(point(target)?),
        BetKind::Place => Slot::Place(point(target)?),
        BetKind::Hardway => Slot::Hardway(
            target
                .and_then(|value| Hardway::try_from(value).ok())
                .ok_or_else(invalid)?,
        ),
        BetKind::Field => Slot::Field,
        BetKind::AnySeven => Slot::AnySeven,
        BetKind::AnyCraps => Slot::AnyCraps,
        BetKind::YoEleven => Slot::YoEleven,
        BetKind::Aces => Slot::Aces,
        BetKind::Twelve => Slot::Twelve,
    })
}

/// Phase and base-bet gating.
fn check_phase(
    table: &TableState,
    position: &Position,
    kind: BetKind,
    slot: Slot,
) -> Result<(), PlaceError> {
    match kind {
        BetKind::PassLine | BetKind::DontPass => {
            if !table.is_come_out() {
                return Err(PlaceError::WrongPhase { kind });
            }
        }
        BetKind::PassOdds => {
            if table.is_come_out() {
                return Err(PlaceError::WrongPhase { kind });
            }
            if position.amount(Slot::PassLine) == 0 {
                return Err(PlaceError::MissingBaseBet { kind });
            }
        }
        BetKind::DontPassOdds => {
            if table.is_come_out() {
                return Err(PlaceError::WrongPhase { kind });
            }
            if position.amount(Slot::DontPass) == 0 {
                return Err(PlaceError::MissingBaseBet { kind });
            }
        }
        BetKind::ComeOdds => {
            if let Slot::ComeOdds(point) = slot {
                if position.amount(Slot::Come(point)) == 0 {
                    return Err(PlaceError::MissingBaseBet { kind });
                }
            }
        }
        BetKind::DontComeOdds => {
            if let Slot::DontComeOdds(point) = slot {
                if position.amount(Slot::DontCome(point)) == 0 {
                    return Err(PlaceError::MissingBaseBet { kind });
                }
            }
        }
        _ => {}
    }
    Ok(())
}
