use crate::model::card::Card;
use crate::model::seat::Seat;
use crate::model::suit::Suit;
use serde::{Deserialize, Serialize};

pub const TRICK_SIZE: usize = 4;

/// One round of up to four plays, one per seat, recorded in play order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trick {
    plays: Vec<Play>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    pub seat: Seat,
    pub card: Card,
}

impl Trick {
    pub fn new() -> Self {
        Self {
            plays: Vec::with_capacity(TRICK_SIZE),
        }
    }

    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == TRICK_SIZE
    }

    /// The raw suit of the first card played. A led joker leads the joker
    /// suit; no trump substitution applies here.
    pub fn lead_suit(&self) -> Option<Suit> {
        self.plays.first().map(|play| play.card.suit)
    }

    /// Records a play. Turn order is the session's concern; the trick only
    /// refuses a fifth card.
    pub fn push(&mut self, seat: Seat, card: Card) {
        debug_assert!(!self.is_complete(), "trick already has four plays");
        self.plays.push(Play { seat, card });
    }

    /// The seat whose card beats all others under `trump`. Ties keep the
    /// earlier play.
    pub fn winner(&self, trump: Suit) -> Option<Seat> {
        let lead = self.lead_suit()?;
        let mut best = self.plays.first()?;
        for play in &self.plays[1..] {
            if play.card.beats(best.card, trump, lead) {
                best = play;
            }
        }
        Some(best.seat)
    }
}

#[cfg(test)]
mod tests {
    use super::Trick;
    use crate::model::card::Card;
    use crate::model::seat::Seat;
    use crate::model::suit::Suit;
    use crate::model::value::Value;

    #[test]
    fn low_trump_wins_over_high_off_suit() {
        let mut trick = Trick::new();
        trick.push(Seat::A, Card::new(Suit::Diamonds, Value::Nine));
        trick.push(Seat::B, Card::new(Suit::Spades, Value::Two));
        trick.push(Seat::C, Card::new(Suit::Diamonds, Value::King));
        trick.push(Seat::D, Card::new(Suit::Clubs, Value::Ace));

        assert_eq!(trick.winner(Suit::Spades), Some(Seat::B));
    }

    #[test]
    fn highest_lead_suit_card_wins_without_trump() {
        let mut trick = Trick::new();
        trick.push(Seat::B, Card::new(Suit::Clubs, Value::Ten));
        trick.push(Seat::C, Card::new(Suit::Clubs, Value::Queen));
        trick.push(Seat::D, Card::new(Suit::Clubs, Value::Four));
        trick.push(Seat::A, Card::new(Suit::Spades, Value::Ace));

        assert_eq!(trick.winner(Suit::Hearts), Some(Seat::C));
    }

    #[test]
    fn joker_takes_the_trick_as_trump() {
        let mut trick = Trick::new();
        trick.push(Seat::A, Card::new(Suit::Diamonds, Value::Ace));
        trick.push(Seat::B, Card::joker());
        trick.push(Seat::C, Card::new(Suit::Diamonds, Value::King));
        trick.push(Seat::D, Card::new(Suit::Hearts, Value::Ace));

        assert_eq!(trick.winner(Suit::Clubs), Some(Seat::B));
    }

    #[test]
    fn lead_suit_is_the_raw_first_suit() {
        let mut trick = Trick::new();
        assert_eq!(trick.lead_suit(), None);
        trick.push(Seat::D, Card::joker());
        assert_eq!(trick.lead_suit(), Some(Suit::Joker));
    }

    #[test]
    fn incomplete_trick_still_names_a_leader_so_far() {
        let mut trick = Trick::new();
        trick.push(Seat::A, Card::new(Suit::Clubs, Value::Two));
        assert_eq!(trick.winner(Suit::Hearts), Some(Seat::A));
        assert!(!trick.is_complete());
    }
}
