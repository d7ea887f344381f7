use super::*;
use commonware_codec::{Encode, ReadExt};
use proptest::prelude::*;

#[test]
fn test_bet_kind_roundtrip() {
    for code in 0u8..16 {
        let kind = BetKind::try_from(code).unwrap();
        let encoded = kind.encode();
        let decoded = BetKind::read(&mut &encoded[..]).unwrap();
        assert_eq!(kind, decoded);
    }
    assert!(BetKind::try_from(16).is_err());
}

#[test]
fn test_point_rejects_non_point_sums() {
    for value in [0u8, 1, 2, 3, 7, 11, 12, 13] {
        assert!(Point::try_from(value).is_err());
    }
    for value in [4u8, 5, 6, 8, 9, 10] {
        assert_eq!(Point::try_from(value).unwrap().as_u8(), value);
    }
}

#[test]
fn test_dice_roll_validation() {
    assert!(DiceRoll::new(0, 3).is_err());
    assert!(DiceRoll::new(3, 7).is_err());
    let roll = DiceRoll::new(3, 4).unwrap();
    assert_eq!(roll.sum(), 7);
    assert!(!roll.is_hard());
    assert!(DiceRoll::new(3, 3).unwrap().is_hard());
}

#[test]
fn test_roll_classification() {
    assert!(DiceRoll::new(1, 1).unwrap().is_craps());
    assert!(DiceRoll::new(1, 2).unwrap().is_craps());
    assert!(DiceRoll::new(6, 6).unwrap().is_craps());
    assert!(DiceRoll::new(3, 4).unwrap().is_natural());
    assert!(DiceRoll::new(5, 6).unwrap().is_natural());
    assert!(DiceRoll::new(2, 2).unwrap().is_point_number());
    assert!(DiceRoll::new(1, 1).unwrap().is_field_winner());
    assert!(!DiceRoll::new(3, 4).unwrap().is_field_winner());
    assert!(!DiceRoll::new(2, 3).unwrap().is_field_winner());
}

#[test]
fn test_payout_floor_semantics() {
    // 1:1
    assert_eq!(EVEN_MONEY.winnings(100), Some(100));
    // Place 4/10 at 9:5
    assert_eq!(place_ratio(Point::Four).winnings(50), Some(90));
    // Place 6/8 at 7:6 floors
    assert_eq!(place_ratio(Point::Six).winnings(60), Some(70));
    assert_eq!(place_ratio(Point::Eight).winnings(10), Some(11));
    // True odds 3:2 floors
    assert_eq!(true_odds(Point::Five).winnings(5), Some(7));
    // Lay odds are the exact inverse
    assert_eq!(lay_odds(Point::Four).winnings(100), Some(50));
    assert_eq!(lay_odds(Point::Six).winnings(12), Some(10));
    // Hardways
    assert_eq!(hardway_ratio(Hardway::Four).winnings(10), Some(70));
    assert_eq!(hardway_ratio(Hardway::Eight).winnings(10), Some(90));
    // Single-roll props
    assert_eq!(ANY_CRAPS.winnings(10), Some(70));
    assert_eq!(ACES.winnings(3), Some(90));
}

#[test]
fn test_payout_wide_intermediate() {
    // u64::MAX * 2 would overflow a u64 product, but the wide intermediate keeps
    // the multiply exact; only the final narrowing fails.
    assert_eq!(FIELD_2_12.winnings(u64::MAX), None);
    // And a ratio below 1 on a huge wager still narrows fine.
    assert_eq!(lay_odds(Point::Four).winnings(u64::MAX), Some(u64::MAX / 2));
}

#[test]
fn test_slot_bits_are_unique_and_reversible() {
    let mut seen = 0u64;
    for bit in 0..NUM_BET_SLOTS as u8 {
        let slot = Slot::from_bit(bit).unwrap();
        assert_eq!(slot.bit(), bit);
        assert_eq!(seen & (1 << bit), 0);
        seen |= 1 << bit;
    }
    assert!(Slot::from_bit(NUM_BET_SLOTS as u8).is_none());
}

#[test]
fn test_position_mask_tracks_amounts() {
    let mut position = Position::new(1);
    assert!(!position.has_active_bets());

    position.add(Slot::PassLine, 100).unwrap();
    position.add(Slot::Place(Point::Six), 60).unwrap();
    position.add(Slot::Hardway(Hardway::Eight), 5).unwrap();
    position.validate_invariants().expect("valid invariants");

    let active: Vec<_> = position.active_slots().collect();
    assert_eq!(active.len(), 3);
    assert_eq!(position.total_active(), 165);

    assert_eq!(position.take(Slot::Place(Point::Six)), 60);
    position.validate_invariants().expect("valid invariants");
    assert_eq!(position.total_active(), 105);

    position.reset_for_epoch(2);
    assert!(!position.has_active_bets());
    assert_eq!(position.epoch_id, 2);
}

#[test]
fn test_position_roundtrip() {
    let mut position = Position::new(7);
    position.add(Slot::DontPass, 25).unwrap();
    position.add(Slot::ComeOdds(Point::Nine), 30).unwrap();
    position.add(Slot::Field, 10).unwrap();
    position.pending_winnings = 55;
    position.total_wagered = 65;
    position.total_won = 120;
    position.total_lost = 40;
    position.last_settled_round = 12;

    let encoded = position.encode();
    let decoded = Position::read(&mut &encoded[..]).unwrap();
    assert_eq!(position, decoded);
    decoded.validate_invariants().expect("valid invariants");
}

#[test]
fn test_table_state_roundtrip() {
    let mut table = TableState::new();
    table.house_bankroll = 1_000_000;
    table.set_point(Point::Eight);
    table.reserved_payouts = 500;
    table.total_payouts = 10;
    table.total_collected = 20;

    let encoded = table.encode();
    let decoded = TableState::read(&mut &encoded[..]).unwrap();
    assert_eq!(table, decoded);
}

#[test]
fn test_table_epoch_lifecycle() {
    let mut table = TableState::new();
    assert!(table.is_come_out());
    table.set_point(Point::Five);
    assert!(!table.is_come_out());

    // Making the point keeps the epoch alive.
    table.clear_point();
    assert!(table.is_come_out());
    assert_eq!(table.epoch_id, 1);

    table.set_point(Point::Nine);
    table.start_new_epoch(42);
    assert!(table.is_come_out());
    assert_eq!(table.epoch_id, 2);
    assert_eq!(table.epoch_start_round, 42);
}

proptest! {
    #[test]
    fn prop_payout_matches_floor(wager in 0u64..=u64::MAX / 64, num in 1u64..=30, den in 1u64..=6) {
        let ratio = PayoutRatio::new(num, den);
        let expected = ((wager as u128 * num as u128) / den as u128) as u64;
        prop_assert_eq!(ratio.winnings(wager), Some(expected));
    }

    #[test]
    fn prop_position_mutations_preserve_invariants(
        ops in proptest::collection::vec((0u8..NUM_BET_SLOTS as u8, 0u64..1_000_000, any::<bool>()), 0..64),
    ) {
        let mut position = Position::new(1);
        for (bit, amount, clear) in ops {
            let slot = Slot::from_bit(bit).unwrap();
            if clear {
                position.take(slot);
            } else {
                let _ = position.add(slot, amount);
            }
            prop_assert!(position.validate_invariants().is_ok());
        }
    }

    #[test]
    fn prop_position_roundtrip(
        bets in proptest::collection::vec((0u8..NUM_BET_SLOTS as u8, 1u64..1_000_000), 0..16),
        pending in any::<u64>(),
    ) {
        let mut position = Position::new(3);
        for (bit, amount) in bets {
            position.add(Slot::from_bit(bit).unwrap(), amount).unwrap();
        }
        position.pending_winnings = pending;
        let encoded = position.encode();
        let decoded = Position::read(&mut &encoded[..]).unwrap();
        prop_assert_eq!(position, decoded);
    }
}
