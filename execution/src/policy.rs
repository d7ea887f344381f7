//! Payout policy seam.
//!
//! The resolution engine asks the policy for ratios instead of hardcoding them,
//! so a table can swap payout schedules without touching resolution logic. Only
//! fixed-odds payouts are supported; every ratio must be known at placement time
//! so the worst case can be reserved against the bankroll.

use sevenout_types::{
    field_ratio, hardway_ratio, lay_odds, place_ratio, true_odds, BetKind, DiceRoll, Hardway,
    PayoutRatio, Point, Slot, ACES, ANY_CRAPS, ANY_SEVEN, EVEN_MONEY, FIELD_2_12, TWELVE,
    YO_ELEVEN,
};

pub trait PayoutPolicy {
    /// Ratio for line bets (pass, don't pass, come, don't come).
    fn line(&self) -> PayoutRatio;

    /// Ratio for a winning single-roll proposition on `roll`.
    fn single_roll(&self, kind: BetKind, roll: DiceRoll) -> PayoutRatio;

    /// Ratio for a winning place bet on `point`.
    fn place(&self, point: Point) -> PayoutRatio;

    /// True-odds ratio paid to pass/come odds on `point`.
    fn pass_odds(&self, point: Point) -> PayoutRatio;

    /// Lay-odds ratio paid to don't-pass/don't-come odds against `point`.
    fn lay_odds(&self, point: Point) -> PayoutRatio;

    /// Ratio for a winning hardway.
    fn hardway(&self, hardway: Hardway) -> PayoutRatio;

    /// Worst-case ratio reserved while `slot` is unresolved. `point` is the
    /// table's established point if one is known; without it the widest odds
    /// ratio is assumed.
    fn reserve(&self, slot: Slot, point: Option<Point>) -> PayoutRatio;
}

/// The standard fixed-odds schedule.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedOdds;

impl PayoutPolicy for FixedOdds {
    fn line(&self) -> PayoutRatio {
        EVEN_MONEY
    }

    fn single_roll(&self, kind: BetKind, roll: DiceRoll) -> PayoutRatio {
        match kind {
            BetKind::Field => field_ratio(roll),
            BetKind::AnySeven => ANY_SEVEN,
            BetKind::AnyCraps => ANY_CRAPS,
            BetKind::YoEleven => YO_ELEVEN,
            BetKind::Aces => ACES,
            BetKind::Twelve => TWELVE,
            _ => EVEN_MONEY,
        }
    }

    fn place(&self, point: Point) -> PayoutRatio {
        place_ratio(point)
    }

    fn pass_odds(&self, point: Point) -> PayoutRatio {
        true_odds(point)
    }

    fn lay_odds(&self, point: Point) -> PayoutRatio {
        lay_odds(point)
    }

    fn hardway(&self, hardway: Hardway) -> PayoutRatio {
        hardway_ratio(hardway)
    }

    fn reserve(&self, slot: Slot, point: Option<Point>) -> PayoutRatio {
        match slot {
            Slot::PassLine | Slot::DontPass | Slot::Come(_) | Slot::DontCome(_) => EVEN_MONEY,
            // Don't-side odds pay less than true odds, but the reservation uses
            // true odds so the release on either outcome is covered.
            Slot::PassOdds | Slot::DontPassOdds => match point {
                Some(point) => true_odds(point),
                None => PayoutRatio::new(2, 1),
            },
            Slot::ComeOdds(point) | Slot::DontComeOdds(point) => true_odds(point),
            Slot::Place(point) => place_ratio(point),
            Slot::Hardway(hardway) => hardway_ratio(hardway),
            Slot::Field => FIELD_2_12,
            Slot::AnySeven => ANY_SEVEN,
            Slot::AnyCraps => ANY_CRAPS,
            Slot::YoEleven => YO_ELEVEN,
            Slot::Aces => ACES,
            Slot::Twelve => TWELVE,
        }
    }
}
