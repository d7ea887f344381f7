use bytes::{Buf, BufMut};
use commonware_codec::{EncodeSize, Error, FixedSize, Read, ReadExt, Write};
use serde::{Deserialize, Serialize};

use super::DiceRoll;

/// An established point number.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Point {
    Four = 4,
    Five = 5,
    Six = 6,
    Eight = 8,
    Nine = 9,
    Ten = 10,
}

impl Point {
    /// All point numbers in slot order.
    pub const ALL: [Self; 6] = [
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Eight,
        Self::Nine,
        Self::Ten,
    ];

    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    /// Array index (0-5) for point-indexed bet slots.
    pub fn index(&self) -> usize {
        match self {
            Self::Four => 0,
            Self::Five => 1,
            Self::Six => 2,
            Self::Eight => 3,
            Self::Nine => 4,
            Self::Ten => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn from_sum(roll: DiceRoll) -> Option<Self> {
        Self::try_from(roll.sum()).ok()
    }
}

impl TryFrom<u8> for Point {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            6 => Ok(Self::Six),
            8 => Ok(Self::Eight),
            9 => Ok(Self::Nine),
            10 => Ok(Self::Ten),
            _ => Err(()),
        }
    }
}

impl Write for Point {
    fn write(&self, writer: &mut impl BufMut) {
        (*self as u8).write(writer);
    }
}

impl Read for Point {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let value = u8::read(reader)?;
        Point::try_from(value).map_err(|_| Error::InvalidEnum(value))
    }
}

impl EncodeSize for Point {
    fn encode_size(&self) -> usize {
        u8::SIZE
    }
}

/// A hardway target (doubles only: 2-2, 3-3, 4-4, 5-5).
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hardway {
    Four = 4,
    Six = 6,
    Eight = 8,
    Ten = 10,
}

impl Hardway {
    pub const ALL: [Self; 4] = [Self::Four, Self::Six, Self::Eight, Self::Ten];

    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    /// Array index (0-3) for the hardway bet slots.
    pub fn index(&self) -> usize {
        match self {
            Self::Four => 0,
            Self::Six => 1,
            Self::Eight => 2,
            Self::Ten => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl TryFrom<u8> for Hardway {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(Self::Four),
            6 => Ok(Self::Six),
            8 => Ok(Self::Eight),
            10 => Ok(Self::Ten),
            _ => Err(()),
        }
    }
}

/// Wager categories, with discriminants matching the placement wire codes.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BetKind {
    PassLine = 0,
    DontPass = 1,
    PassOdds = 2,
    DontPassOdds = 3,
    Come = 4,
    DontCome = 5,
    ComeOdds = 6,
    DontComeOdds = 7,
    Place = 8,
    Hardway = 9,
    Field = 10,
    AnySeven = 11,
    AnyCraps = 12,
    YoEleven = 13,
    Aces = 14,
    Twelve = 15,
}

impl BetKind {
    /// Whether placement requires a point/hardway target.
    pub fn requires_target(&self) -> bool {
        matches!(
            self,
            Self::Come
                | Self::DontCome
                | Self::ComeOdds
                | Self::DontComeOdds
                | Self::Place
                | Self::Hardway
        )
    }

    /// Single-roll bets resolve on every roll regardless of phase.
    pub fn is_single_roll(&self) -> bool {
        matches!(
            self,
            Self::Field | Self::AnySeven | Self::AnyCraps | Self::YoEleven | Self::Aces | Self::Twelve
        )
    }
}

impl TryFrom<u8> for BetKind {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::PassLine),
            1 => Ok(Self::DontPass),
            2 => Ok(Self::PassOdds),
            3 => Ok(Self::DontPassOdds),
            4 => Ok(Self::Come),
            5 => Ok(Self::DontCome),
            6 => Ok(Self::ComeOdds),
            7 => Ok(Self::DontComeOdds),
            8 => Ok(Self::Place),
            9 => Ok(Self::Hardway),
            10 => Ok(Self::Field),
            11 => Ok(Self::AnySeven),
            12 => Ok(Self::AnyCraps),
            13 => Ok(Self::YoEleven),
            14 => Ok(Self::Aces),
            15 => Ok(Self::Twelve),
            _ => Err(()),
        }
    }
}

impl Write for BetKind {
    fn write(&self, writer: &mut impl BufMut) {
        (*self as u8).write(writer);
    }
}

impl Read for BetKind {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let value = u8::read(reader)?;
        BetKind::try_from(value).map_err(|_| Error::InvalidEnum(value))
    }
}

impl EncodeSize for BetKind {
    fn encode_size(&self) -> usize {
        u8::SIZE
    }
}
