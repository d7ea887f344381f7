use bytes::{Buf, BufMut};
use commonware_codec::{EncodeSize, Error, FixedSize, Read, ReadExt, Write};
use thiserror::Error as ThisError;

use super::{BetKind, Hardway, Point, NUM_BET_SLOTS};

#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum PositionInvariantError {
    #[error("slot {bit} amount/mask mismatch (amount={amount}, bit_set={bit_set})")]
    SlotMaskMismatch { bit: u8, amount: u64, bit_set: bool },
    #[error("active mask has bits beyond the slot range (mask={mask:#x})")]
    UnknownSlotBits { mask: u64 },
}

/// A single wager slot in a position.
///
/// Every slot maps to a fixed bit in the position's active mask, so the
/// resolution engine can walk only occupied slots instead of all categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    PassLine,
    DontPass,
    PassOdds,
    DontPassOdds,
    Come(Point),
    ComeOdds(Point),
    DontCome(Point),
    DontComeOdds(Point),
    Place(Point),
    Hardway(Hardway),
    Field,
    AnySeven,
    AnyCraps,
    YoEleven,
    Aces,
    Twelve,
}

impl Slot {
    /// Bit index (0..NUM_BET_SLOTS) in the active mask.
    pub fn bit(&self) -> u8 {
        match self {
            Self::PassLine => 0,
            Self::DontPass => 1,
            Self::PassOdds => 2,
            Self::DontPassOdds => 3,
            Self::Come(p) => 4 + p.index() as u8,
            Self::ComeOdds(p) => 10 + p.index() as u8,
            Self::DontCome(p) => 16 + p.index() as u8,
            Self::DontComeOdds(p) => 22 + p.index() as u8,
            Self::Place(p) => 28 + p.index() as u8,
            Self::Hardway(h) => 34 + h.index() as u8,
            Self::Field => 38,
            Self::AnySeven => 39,
            Self::AnyCraps => 40,
            Self::YoEleven => 41,
            Self::Aces => 42,
            Self::Twelve => 43,
        }
    }

    pub fn from_bit(bit: u8) -> Option<Self> {
        Some(match bit {
            0 => Self::PassLine,
            1 => Self::DontPass,
            2 => Self::PassOdds,
            3 => Self::DontPassOdds,
            4..=9 => Self::Come(Point::from_index((bit - 4) as usize)?),
            10..=15 => Self::ComeOdds(Point::from_index((bit - 10) as usize)?),
            16..=21 => Self::DontCome(Point::from_index((bit - 16) as usize)?),
            22..=27 => Self::DontComeOdds(Point::from_index((bit - 22) as usize)?),
            28..=33 => Self::Place(Point::from_index((bit - 28) as usize)?),
            34..=37 => Self::Hardway(Hardway::from_index((bit - 34) as usize)?),
            38 => Self::Field,
            39 => Self::AnySeven,
            40 => Self::AnyCraps,
            41 => Self::YoEleven,
            42 => Self::Aces,
            43 => Self::Twelve,
            _ => return None,
        })
    }

    pub fn kind(&self) -> BetKind {
        match self {
            Self::PassLine => BetKind::PassLine,
            Self::DontPass => BetKind::DontPass,
            Self::PassOdds => BetKind::PassOdds,
            Self::DontPassOdds => BetKind::DontPassOdds,
            Self::Come(_) => BetKind::Come,
            Self::ComeOdds(_) => BetKind::ComeOdds,
            Self::DontCome(_) => BetKind::DontCome,
            Self::DontComeOdds(_) => BetKind::DontComeOdds,
            Self::Place(_) => BetKind::Place,
            Self::Hardway(_) => BetKind::Hardway,
            Self::Field => BetKind::Field,
            Self::AnySeven => BetKind::AnySeven,
            Self::AnyCraps => BetKind::AnyCraps,
            Self::YoEleven => BetKind::YoEleven,
            Self::Aces => BetKind::Aces,
            Self::Twelve => BetKind::Twelve,
        }
    }

    /// The point or hardway number this slot rides on, if any.
    pub fn target(&self) -> Option<u8> {
        match self {
            Self::Come(p)
            | Self::ComeOdds(p)
            | Self::DontCome(p)
            | Self::DontComeOdds(p)
            | Self::Place(p) => Some(p.as_u8()),
            Self::Hardway(h) => Some(h.as_u8()),
            _ => None,
        }
    }
}

/// A player's wagers for one epoch, plus lifetime settlement counters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    /// The epoch these wagers were placed against.
    pub epoch_id: u64,
    /// Bit set iff the corresponding slot amount is non-zero.
    active_mask: u64,
    /// Wager amounts, indexed by slot bit.
    amounts: [u64; NUM_BET_SLOTS],
    /// Whether place bets are working (off means they persist unresolved).
    pub place_working: bool,
    /// Settled winnings awaiting claim.
    pub pending_winnings: u64,
    /// Lifetime wagered, monotone.
    pub total_wagered: u64,
    /// Lifetime won, monotone.
    pub total_won: u64,
    /// Lifetime lost, monotone.
    pub total_lost: u64,
    /// Last round settled against this position (idempotency guard).
    pub last_settled_round: u64,
}

impl Position {
    pub fn new(epoch_id: u64) -> Self {
        Self {
            epoch_id,
            active_mask: 0,
            amounts: [0; NUM_BET_SLOTS],
            place_working: true,
            pending_winnings: 0,
            total_wagered: 0,
            total_won: 0,
            total_lost: 0,
            last_settled_round: 0,
        }
    }

    pub fn amount(&self, slot: Slot) -> u64 {
        self.amounts[slot.bit() as usize]
    }

    pub fn active_mask(&self) -> u64 {
        self.active_mask
    }

    pub fn has_active_bets(&self) -> bool {
        self.active_mask != 0
    }

    /// Add to a slot, keeping the mask in sync. Returns the new slot total, or
    /// `None` on overflow (slot untouched).
    pub fn add(&mut self, slot: Slot, amount: u64) -> Option<u64> {
        let idx = slot.bit() as usize;
        let total = self.amounts[idx].checked_add(amount)?;
        self.amounts[idx] = total;
        if total > 0 {
            self.active_mask |= 1 << slot.bit();
        }
        Some(total)
    }

    /// Clear a slot and return the amount that was riding on it.
    pub fn take(&mut self, slot: Slot) -> u64 {
        let idx = slot.bit() as usize;
        let amount = self.amounts[idx];
        self.amounts[idx] = 0;
        self.active_mask &= !(1 << slot.bit());
        amount
    }

    /// Clear every slot in `mask` at once.
    pub fn clear_mask(&mut self, mask: u64) {
        let mut remaining = mask & self.active_mask;
        while remaining != 0 {
            let bit = remaining.trailing_zeros() as u8;
            self.amounts[bit as usize] = 0;
            remaining &= remaining - 1;
        }
        self.active_mask &= !mask;
    }

    /// Occupied slots and their amounts, in bit order.
    pub fn active_slots(&self) -> impl Iterator<Item = (Slot, u64)> + '_ {
        let mut mask = self.active_mask;
        std::iter::from_fn(move || {
            if mask == 0 {
                return None;
            }
            let bit = mask.trailing_zeros() as u8;
            mask &= mask - 1;
            let slot = Slot::from_bit(bit)?;
            Some((slot, self.amounts[bit as usize]))
        })
    }

    /// Sum of all active wagers. Widened so 44 u64 slots cannot overflow the sum.
    pub fn total_active(&self) -> u128 {
        self.active_slots().map(|(_, amount)| amount as u128).sum()
    }

    /// Clear all wagers and adopt a new epoch. Counters and pending winnings are
    /// untouched; any refund must have been credited before calling this.
    pub fn reset_for_epoch(&mut self, epoch_id: u64) {
        self.epoch_id = epoch_id;
        self.amounts = [0; NUM_BET_SLOTS];
        self.active_mask = 0;
        self.place_working = true;
    }

    pub fn validate_invariants(&self) -> Result<(), PositionInvariantError> {
        if self.active_mask >> NUM_BET_SLOTS != 0 {
            return Err(PositionInvariantError::UnknownSlotBits {
                mask: self.active_mask,
            });
        }
        for bit in 0..NUM_BET_SLOTS as u8 {
            let amount = self.amounts[bit as usize];
            let bit_set = self.active_mask & (1 << bit) != 0;
            if (amount > 0) != bit_set {
                return Err(PositionInvariantError::SlotMaskMismatch {
                    bit,
                    amount,
                    bit_set,
                });
            }
        }
        Ok(())
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Write for Position {
    fn write(&self, writer: &mut impl BufMut) {
        self.epoch_id.write(writer);
        self.active_mask.write(writer);
        // Only occupied slots are encoded; the mask tells the reader which.
        let mut mask = self.active_mask;
        while mask != 0 {
            let bit = mask.trailing_zeros() as usize;
            mask &= mask - 1;
            self.amounts[bit].write(writer);
        }
        self.place_working.write(writer);
        self.pending_winnings.write(writer);
        self.total_wagered.write(writer);
        self.total_won.write(writer);
        self.total_lost.write(writer);
        self.last_settled_round.write(writer);
    }
}

impl Read for Position {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let epoch_id = u64::read(reader)?;
        let active_mask = u64::read(reader)?;
        if active_mask >> NUM_BET_SLOTS != 0 {
            return Err(Error::Invalid("Position", "unknown slot bits"));
        }
        let mut amounts = [0u64; NUM_BET_SLOTS];
        let mut mask = active_mask;
        while mask != 0 {
            let bit = mask.trailing_zeros() as usize;
            mask &= mask - 1;
            let amount = u64::read(reader)?;
            if amount == 0 {
                return Err(Error::Invalid("Position", "zero amount in active slot"));
            }
            amounts[bit] = amount;
        }
        Ok(Self {
            epoch_id,
            active_mask,
            amounts,
            place_working: bool::read(reader)?,
            pending_winnings: u64::read(reader)?,
            total_wagered: u64::read(reader)?,
            total_won: u64::read(reader)?,
            total_lost: u64::read(reader)?,
            last_settled_round: u64::read(reader)?,
        })
    }
}

impl EncodeSize for Position {
    fn encode_size(&self) -> usize {
        self.epoch_id.encode_size()
            + self.active_mask.encode_size()
            + self.active_mask.count_ones() as usize * u64::SIZE
            + self.place_working.encode_size()
            + self.pending_winnings.encode_size()
            + self.total_wagered.encode_size()
            + self.total_won.encode_size()
            + self.total_lost.encode_size()
            + self.last_settled_round.encode_size()
    }
}
