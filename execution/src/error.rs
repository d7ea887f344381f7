use sevenout_types::BetKind;
use thiserror::Error;

/// Rejections raised while placing a wager. Placement never partially applies:
/// a rejected bet leaves both the position and the table untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaceError {
    #[error("bet amount must be between 1 and {max}")]
    InvalidAmount { max: u64 },
    #[error("{kind:?} cannot be placed in the current phase")]
    WrongPhase { kind: BetKind },
    #[error("{kind:?} requires an active base bet")]
    MissingBaseBet { kind: BetKind },
    #[error("invalid target {target:?} for {kind:?}")]
    InvalidTarget { kind: BetKind, target: Option<u8> },
    #[error("worst-case payout exceeds unreserved bankroll (needed={needed}, available={available})")]
    InsufficientBankroll { needed: u64, available: u64 },
    #[error("arithmetic overflow")]
    Overflow,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettleError {
    #[error("arithmetic overflow during settlement")]
    Overflow,
    #[error("house bankroll cannot cover net payout (needed={needed}, available={available})")]
    InsufficientHouseFunds { needed: u64, available: u64 },
    #[error("round {round} already settled (last settled round {last_settled})")]
    AlreadySettled { round: u64, last_settled: u64 },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClaimError {
    #[error("no pending winnings to claim")]
    NothingPending,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FundError {
    #[error("funding amount must be non-zero")]
    ZeroAmount,
    #[error("arithmetic overflow")]
    Overflow,
}
