use bytes::{Buf, BufMut};
use commonware_codec::{EncodeSize, Error, FixedSize, Read, ReadExt, Write};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum RollError {
    #[error("die value out of range (got={got}, expected 1-6)")]
    DieOutOfRange { got: u8 },
}

/// A verified dice outcome supplied by the external RNG oracle.
///
/// Both dice are guaranteed to be in 1..=6 by construction; the settlement engine
/// never re-validates them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    die1: u8,
    die2: u8,
}

impl DiceRoll {
    pub fn new(die1: u8, die2: u8) -> Result<Self, RollError> {
        for die in [die1, die2] {
            if !(1..=6).contains(&die) {
                return Err(RollError::DieOutOfRange { got: die });
            }
        }
        Ok(Self { die1, die2 })
    }

    pub fn die1(&self) -> u8 {
        self.die1
    }

    pub fn die2(&self) -> u8 {
        self.die2
    }

    pub fn sum(&self) -> u8 {
        self.die1 + self.die2
    }

    /// Both dice show the same face (e.g. 3-3).
    pub fn is_hard(&self) -> bool {
        self.die1 == self.die2
    }

    /// Craps: 2, 3 or 12.
    pub fn is_craps(&self) -> bool {
        matches!(self.sum(), 2 | 3 | 12)
    }

    /// Natural: 7 or 11.
    pub fn is_natural(&self) -> bool {
        matches!(self.sum(), 7 | 11)
    }

    /// Point number: 4, 5, 6, 8, 9 or 10.
    pub fn is_point_number(&self) -> bool {
        matches!(self.sum(), 4 | 5 | 6 | 8 | 9 | 10)
    }

    /// Field winner: 2, 3, 4, 9, 10, 11 or 12.
    pub fn is_field_winner(&self) -> bool {
        matches!(self.sum(), 2 | 3 | 4 | 9 | 10 | 11 | 12)
    }
}

impl Write for DiceRoll {
    fn write(&self, writer: &mut impl BufMut) {
        self.die1.write(writer);
        self.die2.write(writer);
    }
}

impl Read for DiceRoll {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let die1 = u8::read(reader)?;
        let die2 = u8::read(reader)?;
        DiceRoll::new(die1, die2).map_err(|_| Error::Invalid("DiceRoll", "die out of range"))
    }
}

impl EncodeSize for DiceRoll {
    fn encode_size(&self) -> usize {
        u8::SIZE * 2
    }
}
