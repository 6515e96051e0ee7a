use crate::model::suit::Suit;
use crate::model::value::Value;
use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub value: Value,
}

impl Card {
    pub const fn new(suit: Suit, value: Value) -> Self {
        Self { suit, value }
    }

    pub const fn joker() -> Self {
        Self::new(Suit::Joker, Value::Joker)
    }

    pub const fn is_joker(self) -> bool {
        self.suit.is_joker()
    }

    /// The suit this card competes as when `trump` is fixed: the joker
    /// counts as trump, every other card keeps its printed suit.
    pub const fn effective_suit(self, trump: Suit) -> Suit {
        if self.is_joker() { trump } else { self.suit }
    }

    /// Ranks `self` against `other` within one trick. A trump-effective
    /// card beats any non-trump card, a lead-suit card beats any other
    /// off-suit card, and within the same suit class the higher value
    /// wins. `lead` is the raw suit of the trick's first card.
    pub fn beats(self, other: Card, trump: Suit, lead: Suit) -> bool {
        let own = self.effective_suit(trump);
        let theirs = other.effective_suit(trump);
        if own == trump && theirs != trump {
            return true;
        }
        if own != trump && theirs == trump {
            return false;
        }
        if own == lead && theirs != lead {
            return true;
        }
        if own != lead && theirs == lead {
            return false;
        }
        self.value > other.value
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_joker() {
            f.write_str("Joker")
        } else {
            write!(f, "{}{}", self.value, self.suit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Card, Suit, Value};

    #[test]
    fn trump_beats_any_off_suit_regardless_of_value() {
        let trump = Suit::Hearts;
        let lead = Suit::Clubs;
        let low_heart = Card::new(Suit::Hearts, Value::Two);
        for suit in [Suit::Clubs, Suit::Spades, Suit::Diamonds] {
            let ace = Card::new(suit, Value::Ace);
            assert!(low_heart.beats(ace, trump, lead), "2H should beat A{suit}");
            assert!(!ace.beats(low_heart, trump, lead));
        }
    }

    #[test]
    fn lead_suit_beats_off_suit() {
        let trump = Suit::Hearts;
        let lead = Suit::Clubs;
        let low_club = Card::new(Suit::Clubs, Value::Three);
        let high_spade = Card::new(Suit::Spades, Value::Ace);
        assert!(low_club.beats(high_spade, trump, lead));
        assert!(!high_spade.beats(low_club, trump, lead));
    }

    #[test]
    fn same_suit_compares_by_value() {
        let trump = Suit::Hearts;
        let lead = Suit::Clubs;
        let king = Card::new(Suit::Clubs, Value::King);
        let nine = Card::new(Suit::Clubs, Value::Nine);
        assert!(king.beats(nine, trump, lead));
        assert!(!nine.beats(king, trump, lead));
    }

    #[test]
    fn joker_competes_as_trump() {
        let trump = Suit::Spades;
        let lead = Suit::Diamonds;
        let joker = Card::joker();
        let lead_ace = Card::new(Suit::Diamonds, Value::Ace);
        let trump_jack = Card::new(Suit::Spades, Value::Jack);
        let trump_ten = Card::new(Suit::Spades, Value::Ten);
        assert!(joker.beats(lead_ace, trump, lead));
        // Within trump the joker sits between ten and jack.
        assert!(trump_jack.beats(joker, trump, lead));
        assert!(joker.beats(trump_ten, trump, lead));
    }

    #[test]
    fn display_shows_value_then_suit() {
        assert_eq!(Card::new(Suit::Spades, Value::Queen).to_string(), "QS");
        assert_eq!(Card::joker().to_string(), "Joker");
    }
}
