use core::fmt;
use serde::{Deserialize, Serialize};

/// A single auction entry: a pass, or a commitment to win at least that
/// many category points this hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bid {
    Pass,
    Two,
    Three,
    Four,
    Five,
    Six,
}

impl Bid {
    pub const MIN_AMOUNT: u8 = 2;
    pub const MAX_AMOUNT: u8 = 6;

    /// The only way to construct a numeric bid; amounts outside 2..=6 do
    /// not exist as values.
    pub const fn from_amount(amount: u8) -> Option<Self> {
        match amount {
            2 => Some(Bid::Two),
            3 => Some(Bid::Three),
            4 => Some(Bid::Four),
            5 => Some(Bid::Five),
            6 => Some(Bid::Six),
            _ => None,
        }
    }

    /// The committed amount, or `None` for a pass.
    pub const fn amount(self) -> Option<u8> {
        match self {
            Bid::Pass => None,
            Bid::Two => Some(2),
            Bid::Three => Some(3),
            Bid::Four => Some(4),
            Bid::Five => Some(5),
            Bid::Six => Some(6),
        }
    }

    pub const fn is_pass(self) -> bool {
        matches!(self, Bid::Pass)
    }
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.amount() {
            Some(amount) => write!(f, "{amount}"),
            None => f.write_str("Pass"),
        }
    }
}
