//! Pure per-roll resolution.
//!
//! [`resolve_roll`] walks a position's occupied slots against one dice roll and
//! produces an unapplied delta: amounts to credit and retain, reserve to
//! release, the mask of slots that resolved and the table phase transition the
//! roll implies. Nothing is mutated here; the caller commits the delta after
//! the solvency check passes.

use sevenout_types::{DiceRoll, PayoutRatio, Point, Position, Slot, TableState};

use crate::error::SettleError;
use crate::policy::PayoutPolicy;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    /// Stake returned, no winnings (don't pass on a come-out 12).
    Push,
}

/// How one slot resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BetOutcome {
    pub slot: Slot,
    pub wagered: u64,
    /// Credited back to the player: stake plus winnings on a win, the stake
    /// alone on a push, zero on a loss.
    pub paid: u64,
    pub outcome: Outcome,
}

/// Table phase change implied by a roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseTransition {
    None,
    PointEstablished(Point),
    /// Point hit: back to come-out, same epoch.
    PointMade,
    /// Epoch ends; surviving wagers are refunded.
    SevenOut,
}

/// The unapplied result of resolving one position against one roll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RollResolution {
    /// Total owed to the player (stakes returned plus winnings).
    pub credited: u64,
    /// Total in losing stakes kept by the house.
    pub retained: u64,
    /// Total stake across every resolved slot (wins, pushes and losses); the
    /// house collects this off the table when the delta commits.
    pub resolved_stakes: u64,
    /// Worst-case reservation to release for resolved slots.
    pub released_reserve: u64,
    /// Mask of slots that resolved and must be cleared.
    pub cleared: u64,
    pub outcomes: Vec<BetOutcome>,
    pub transition: PhaseTransition,
}

/// The phase transition a roll implies, independent of any position.
pub fn roll_transition(table: &TableState, roll: DiceRoll) -> PhaseTransition {
    match table.point {
        None => match Point::from_sum(roll) {
            Some(point) => PhaseTransition::PointEstablished(point),
            None => PhaseTransition::None,
        },
        Some(point) => {
            if roll.sum() == point.as_u8() {
                PhaseTransition::PointMade
            } else if roll.sum() == 7 {
                PhaseTransition::SevenOut
            } else {
                PhaseTransition::None
            }
        }
    }
}

enum Verdict {
    Win(PayoutRatio),
    Loss,
    Push,
    /// Unresolved this roll; the wager stays on the table.
    Stand,
}

/// Resolve every occupied slot of `position` against `roll`.
///
/// Errors only on arithmetic overflow; the inputs are untouched either way.
pub fn resolve_roll<P: PayoutPolicy>(
    table: &TableState,
    position: &Position,
    roll: DiceRoll,
    policy: &P,
) -> Result<RollResolution, SettleError> {
    let sum = roll.sum();
    let mut resolution = RollResolution {
        credited: 0,
        retained: 0,
        resolved_stakes: 0,
        released_reserve: 0,
        cleared: 0,
        outcomes: Vec::new(),
        transition: roll_transition(table, roll),
    };

    for (slot, wagered) in position.active_slots() {
        let verdict = match slot {
            Slot::PassLine => match table.point {
                None => {
                    if roll.is_natural() {
                        Verdict::Win(policy.line())
                    } else if roll.is_craps() {
                        Verdict::Loss
                    } else {
                        Verdict::Stand
                    }
                }
                Some(point) => {
                    if sum == point.as_u8() {
                        Verdict::Win(policy.line())
                    } else if sum == 7 {
                        Verdict::Loss
                    } else {
                        Verdict::Stand
                    }
                }
            },
            Slot::DontPass => match table.point {
                None => match sum {
                    7 | 11 => Verdict::Loss,
                    2 | 3 => Verdict::Win(policy.line()),
                    // Bar twelve: the house keeps its edge by pushing.
                    12 => Verdict::Push,
                    _ => Verdict::Stand,
                },
                Some(point) => {
                    if sum == 7 {
                        Verdict::Win(policy.line())
                    } else if sum == point.as_u8() {
                        Verdict::Loss
                    } else {
                        Verdict::Stand
                    }
                }
            },
            Slot::PassOdds => match table.point {
                Some(point) if sum == point.as_u8() => Verdict::Win(policy.pass_odds(point)),
                Some(_) if sum == 7 => Verdict::Loss,
                _ => Verdict::Stand,
            },
            Slot::DontPassOdds => match table.point {
                Some(point) if sum == 7 => Verdict::Win(policy.lay_odds(point)),
                Some(point) if sum == point.as_u8() => Verdict::Loss,
                _ => Verdict::Stand,
            },
            Slot::Come(point) => {
                if sum == point.as_u8() {
                    Verdict::Win(policy.line())
                } else if sum == 7 {
                    Verdict::Loss
                } else {
                    Verdict::Stand
                }
            }
            Slot::ComeOdds(point) => {
                if sum == point.as_u8() {
                    Verdict::Win(policy.pass_odds(point))
                } else if sum == 7 {
                    Verdict::Loss
                } else {
                    Verdict::Stand
                }
            }
            Slot::DontCome(point) => {
                if sum == 7 {
                    Verdict::Win(policy.line())
                } else if sum == point.as_u8() {
                    Verdict::Loss
                } else {
                    Verdict::Stand
                }
            }
            Slot::DontComeOdds(point) => {
                if sum == 7 {
                    Verdict::Win(policy.lay_odds(point))
                } else if sum == point.as_u8() {
                    Verdict::Loss
                } else {
                    Verdict::Stand
                }
            }
            Slot::Place(point) => {
                if !position.place_working {
                    Verdict::Stand
                } else if sum == point.as_u8() {
                    Verdict::Win(policy.place(point))
                } else if sum == 7 {
                    Verdict::Loss
                } else {
                    Verdict::Stand
                }
            }
            Slot::Hardway(hardway) => {
                if sum == hardway.as_u8() && roll.is_hard() {
                    Verdict::Win(policy.hardway(hardway))
                } else if sum == 7 || sum == hardway.as_u8() {
                    // Seven or the easy way.
                    Verdict::Loss
                } else {
                    Verdict::Stand
                }
            }
            Slot::Field => {
                if roll.is_field_winner() {
                    Verdict::Win(policy.single_roll(slot.kind(), roll))
                } else {
                    Verdict::Loss
                }
            }
            Slot::AnySeven => single_roll_verdict(sum == 7, slot, roll, policy),
            Slot::AnyCraps => single_roll_verdict(roll.is_craps(), slot, roll, policy),
            Slot::YoEleven => single_roll_verdict(sum == 11, slot, roll, policy),
            Slot::Aces => single_roll_verdict(sum == 2, slot, roll, policy),
            Slot::Twelve => single_roll_verdict(sum == 12, slot, roll, policy),
        };

        let (paid, outcome) = match verdict {
            Verdict::Stand => continue,
            Verdict::Win(ratio) => {
                let winnings = ratio.winnings(wagered).ok_or(SettleError::Overflow)?;
                let paid = wagered.checked_add(winnings).ok_or(SettleError::Overflow)?;
                (paid, Outcome::Win)
            }
            Verdict::Push => (wagered, Outcome::Push),
            Verdict::Loss => {
                resolution.retained = resolution
                    .retained
                    .checked_add(wagered)
                    .ok_or(SettleError::Overflow)?;
                (0, Outcome::Loss)
            }
        };

        resolution.credited = resolution
            .credited
            .checked_add(paid)
            .ok_or(SettleError::Overflow)?;
        resolution.resolved_stakes = resolution
            .resolved_stakes
            .checked_add(wagered)
            .ok_or(SettleError::Overflow)?;
        resolution.released_reserve = resolution
            .released_reserve
            .saturating_add(reservation(policy, slot, wagered, table.point));
        resolution.cleared |= 1 << slot.bit();
        resolution.outcomes.push(BetOutcome {
            slot,
            wagered,
            paid,
            outcome,
        });
    }

    Ok(resolution)
}

fn single_roll_verdict<P: PayoutPolicy>(
    won: bool,
    slot: Slot,
    roll: DiceRoll,
    policy: &P,
) -> Verdict {
    if won {
        Verdict::Win(policy.single_roll(slot.kind(), roll))
    } else {
        Verdict::Loss
    }
}

/// Worst-case amount reserved for `slot` at placement time (stake plus
/// winnings at the reservation ratio). Saturating: release may round down
/// against stale context, never panic.
pub(crate) fn reservation<P: PayoutPolicy>(
    policy: &P,
    slot: Slot,
    wagered: u64,
    point: Option<Point>,
) -> u64 {
    let ratio = policy.reserve(slot, point);
    wagered.saturating_add(ratio.winnings(wagered).unwrap_or(0))
}
