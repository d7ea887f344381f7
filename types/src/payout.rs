//! Exact rational payout ratios.
//!
//! Every ratio is an integer (numerator, denominator) pair; winnings are
//! `floor(wager * num / den)` computed through a u128 intermediate so the
//! multiplication itself can never overflow before the final width check.
//! Floating point is never used: results must be bit-reproducible.

use serde::{Deserialize, Serialize};

use super::{DiceRoll, Hardway, Point};

/// An exact payout ratio (winnings per unit wagered, not including the stake).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutRatio {
    pub num: u64,
    pub den: u64,
}

impl PayoutRatio {
    pub const fn new(num: u64, den: u64) -> Self {
        assert!(den > 0);
        Self { num, den }
    }

    /// The lay-odds inverse of this ratio.
    pub const fn inverse(&self) -> Self {
        Self::new(self.den, self.num)
    }

    /// Winnings for a wager, excluding the returned stake.
    ///
    /// Returns `None` if the floored result does not fit in the ledger width.
    pub fn winnings(&self, wager: u64) -> Option<u64> {
        let wide = (wager as u128 * self.num as u128) / self.den as u128;
        u64::try_from(wide).ok()
    }
}

/// Pass Line / Don't Pass / Come / Don't Come (1:1).
pub const EVEN_MONEY: PayoutRatio = PayoutRatio::new(1, 1);

/// Field on 3, 4, 9, 10 or 11 (1:1).
pub const FIELD: PayoutRatio = PayoutRatio::new(1, 1);

/// Field on 2 or 12 (2:1).
pub const FIELD_2_12: PayoutRatio = PayoutRatio::new(2, 1);

/// Any Seven (4:1).
pub const ANY_SEVEN: PayoutRatio = PayoutRatio::new(4, 1);

/// Any Craps (7:1).
pub const ANY_CRAPS: PayoutRatio = PayoutRatio::new(7, 1);

/// Yo Eleven (15:1).
pub const YO_ELEVEN: PayoutRatio = PayoutRatio::new(15, 1);

/// Aces (30:1).
pub const ACES: PayoutRatio = PayoutRatio::new(30, 1);

/// Twelve (30:1).
pub const TWELVE: PayoutRatio = PayoutRatio::new(30, 1);

/// Place bet ratio for a point: 9:5 on 4/10, 7:5 on 5/9, 7:6 on 6/8.
pub const fn place_ratio(point: Point) -> PayoutRatio {
    match point {
        Point::Four | Point::Ten => PayoutRatio::new(9, 5),
        Point::Five | Point::Nine => PayoutRatio::new(7, 5),
        Point::Six | Point::Eight => PayoutRatio::new(7, 6),
    }
}

/// True odds for pass/come odds bets: 2:1 on 4/10, 3:2 on 5/9, 6:5 on 6/8.
/// Zero house edge.
pub const fn true_odds(point: Point) -> PayoutRatio {
    match point {
        Point::Four | Point::Ten => PayoutRatio::new(2, 1),
        Point::Five | Point::Nine => PayoutRatio::new(3, 2),
        Point::Six | Point::Eight => PayoutRatio::new(6, 5),
    }
}

/// Lay odds for don't-pass/don't-come odds bets: the inverse of true odds.
pub const fn lay_odds(point: Point) -> PayoutRatio {
    true_odds(point).inverse()
}

/// Hardway ratio: 7:1 on hard 4/10, 9:1 on hard 6/8.
pub const fn hardway_ratio(hardway: Hardway) -> PayoutRatio {
    match hardway {
        Hardway::Four | Hardway::Ten => PayoutRatio::new(7, 1),
        Hardway::Six | Hardway::Eight => PayoutRatio::new(9, 1),
    }
}

/// Field ratio for a winning roll.
pub fn field_ratio(roll: DiceRoll) -> PayoutRatio {
    if matches!(roll.sum(), 2 | 12) {
        FIELD_2_12
    } else {
        FIELD
    }
}
