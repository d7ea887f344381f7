use bytes::{Buf, BufMut};
use commonware_codec::{EncodeSize, Error, Read, ReadExt, Write};

use super::Point;

/// Shared per-table state: phase, epoch and house bankroll.
///
/// An epoch runs from one come-out until a seven-out; making the point clears it
/// but continues the same epoch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableState {
    /// The current epoch number.
    pub epoch_id: u64,
    /// The established point, or `None` during come-out.
    pub point: Option<Point>,
    /// The round id when this epoch started.
    pub epoch_start_round: u64,
    /// Funds available to back fixed-odds payouts.
    pub house_bankroll: u64,
    /// Worst-case payouts reserved for bets still on the table.
    pub reserved_payouts: u64,
    /// Lifetime paid out in winnings.
    pub total_payouts: u64,
    /// Lifetime collected from losing wagers.
    pub total_collected: u64,
}

impl TableState {
    pub fn new() -> Self {
        Self {
            epoch_id: 1,
            point: None,
            epoch_start_round: 0,
            house_bankroll: 0,
            reserved_payouts: 0,
            total_payouts: 0,
            total_collected: 0,
        }
    }

    pub fn is_come_out(&self) -> bool {
        self.point.is_none()
    }

    pub fn set_point(&mut self, point: Point) {
        self.point = Some(point);
    }

    /// Point made: back to come-out, same epoch, same shooter.
    pub fn clear_point(&mut self) {
        self.point = None;
    }

    /// Seven-out: next epoch begins in come-out.
    pub fn start_new_epoch(&mut self, round_id: u64) {
        self.epoch_id += 1;
        self.epoch_start_round = round_id;
        self.point = None;
    }
}

impl Default for TableState {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for TableState {
    fn write(&self, writer: &mut impl BufMut) {
        self.epoch_id.write(writer);
        self.point.write(writer);
        self.epoch_start_round.write(writer);
        self.house_bankroll.write(writer);
        self.reserved_payouts.write(writer);
        self.total_payouts.write(writer);
        self.total_collected.write(writer);
    }
}

impl Read for TableState {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        Ok(Self {
            epoch_id: u64::read(reader)?,
            point: Option::<Point>::read(reader)?,
            epoch_start_round: u64::read(reader)?,
            house_bankroll: u64::read(reader)?,
            reserved_payouts: u64::read(reader)?,
            total_payouts: u64::read(reader)?,
            total_collected: u64::read(reader)?,
        })
    }
}

impl EncodeSize for TableState {
    fn encode_size(&self) -> usize {
        self.epoch_id.encode_size()
            + self.point.encode_size()
            + self.epoch_start_round.encode_size()
            + self.house_bankroll.encode_size()
            + self.reserved_payouts.encode_size()
            + self.total_payouts.encode_size()
            + self.total_collected.encode_size()
    }
}
