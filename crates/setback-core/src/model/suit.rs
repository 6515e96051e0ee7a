use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    Clubs = 0,
    Spades = 1,
    Diamonds = 2,
    Hearts = 3,
    Joker = 4,
}

impl Suit {
    /// The four ordinary suits, in deck-building order. Excludes `Joker`.
    pub const NATURAL: [Suit; 4] = [Suit::Clubs, Suit::Spades, Suit::Diamonds, Suit::Hearts];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Suit::Clubs),
            1 => Some(Suit::Spades),
            2 => Some(Suit::Diamonds),
            3 => Some(Suit::Hearts),
            4 => Some(Suit::Joker),
            _ => None,
        }
    }

    pub const fn is_joker(self) -> bool {
        matches!(self, Suit::Joker)
    }

    /// The other suit of the same color class: clubs pair with spades,
    /// diamonds with hearts. The joker has no partner.
    pub const fn partner(self) -> Option<Suit> {
        match self {
            Suit::Clubs => Some(Suit::Spades),
            Suit::Spades => Some(Suit::Clubs),
            Suit::Diamonds => Some(Suit::Hearts),
            Suit::Hearts => Some(Suit::Diamonds),
            Suit::Joker => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Suit::Clubs => "C",
            Suit::Spades => "S",
            Suit::Diamonds => "D",
            Suit::Hearts => "H",
            Suit::Joker => "*",
        };
        f.write_str(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::Suit;

    #[test]
    fn partner_pairs_by_color_class() {
        assert_eq!(Suit::Clubs.partner(), Some(Suit::Spades));
        assert_eq!(Suit::Spades.partner(), Some(Suit::Clubs));
        assert_eq!(Suit::Diamonds.partner(), Some(Suit::Hearts));
        assert_eq!(Suit::Hearts.partner(), Some(Suit::Diamonds));
        assert_eq!(Suit::Joker.partner(), None);
    }

    #[test]
    fn from_index_maps_valid_values() {
        assert_eq!(Suit::from_index(1), Some(Suit::Spades));
        assert_eq!(Suit::from_index(4), Some(Suit::Joker));
        assert_eq!(Suit::from_index(5), None);
    }

    #[test]
    fn natural_suits_exclude_the_joker() {
        assert_eq!(Suit::NATURAL.len(), 4);
        assert!(!Suit::NATURAL.iter().any(|suit| suit.is_joker()));
    }
}
