use core::fmt;
use serde::{Deserialize, Serialize};

/// Card values in trick-taking order. The single joker card carries the
/// `Joker` sentinel, which ranks above `Ten` and below `Jack`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Value {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Joker,
    Jack,
    Queen,
    King,
    Ace,
}

impl Value {
    /// The thirteen ordinary values, in deck-building order. Excludes `Joker`.
    pub const NATURAL: [Value; 13] = [
        Value::Two,
        Value::Three,
        Value::Four,
        Value::Five,
        Value::Six,
        Value::Seven,
        Value::Eight,
        Value::Nine,
        Value::Ten,
        Value::Jack,
        Value::Queen,
        Value::King,
        Value::Ace,
    ];

    /// Counting points toward the game-points category.
    pub const fn game_points(self) -> u32 {
        match self {
            Value::Jack => 1,
            Value::Queen => 2,
            Value::King => 3,
            Value::Ace => 4,
            Value::Ten => 10,
            _ => 0,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Value::Two => "2",
            Value::Three => "3",
            Value::Four => "4",
            Value::Five => "5",
            Value::Six => "6",
            Value::Seven => "7",
            Value::Eight => "8",
            Value::Nine => "9",
            Value::Ten => "10",
            Value::Joker => "Jo",
            Value::Jack => "J",
            Value::Queen => "Q",
            Value::King => "K",
            Value::Ace => "A",
        };
        f.write_str(text)
    }
}
