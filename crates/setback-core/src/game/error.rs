use crate::game::phase::Phase;
use crate::model::seat::Seat;
use thiserror::Error;

/// Rejection reasons for the public session operations. Every rejection is
/// a guaranteed no-op: the session is untouched when any of these is
/// returned, so callers may retry freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("operation requires the {expected} phase but the session is {actual}")]
    WrongPhase { expected: Phase, actual: Phase },
    #[error("it is seat {expected}'s turn to act")]
    OutOfTurn { expected: Seat },
    #[error("player is not seated in this session")]
    UnknownPlayer,
    #[error("player has already joined this session")]
    DuplicateJoin,
    #[error("bid amount {0} is outside the legal range 2..=6")]
    InvalidBidAmount(u8),
    #[error("bid of {amount} is below the current winning bid of {current}")]
    BelowCurrentBid { amount: u8, current: u8 },
    #[error("hand has no card at index {0}")]
    InvalidCardIndex(usize),
}
