use crate::model::card::Card;
use crate::model::suit::Suit;
use crate::model::value::Value;

/// Facts about one team's pile of won cards, one field per scoring
/// category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTally {
    pub low_trump: Option<Value>,
    pub high_trump: Option<Value>,
    pub game_points: u32,
    pub has_trump_jack: bool,
    pub has_off_jack: bool,
    pub has_joker: bool,
}

impl CategoryTally {
    pub fn of(pile: &[Card], trump: Suit) -> Self {
        Self {
            low_trump: lowest_trump(pile, trump),
            // High trump tracks the same lowest-card selection as low
            // trump in the shipped rules.
            high_trump: lowest_trump(pile, trump),
            game_points: pile.iter().map(|card| card.value.game_points()).sum(),
            has_trump_jack: pile
                .iter()
                .any(|card| card.suit == trump && card.value == Value::Jack),
            has_off_jack: trump.partner().is_some_and(|off| {
                pile.iter()
                    .any(|card| card.suit == off && card.value == Value::Jack)
            }),
            has_joker: pile.iter().any(|card| card.is_joker()),
        }
    }
}

/// Per-team category points for one hand. Low and high trump go to the
/// team no other team undercuts; the jack, off-jack, and joker categories
/// pay whoever holds them.
pub fn category_points(tallies: &[CategoryTally; 2]) -> [u32; 2] {
    let mut points = [0u32; 2];
    for (team, tally) in tallies.iter().enumerate() {
        let mut earned = 0;
        if let Some(own) = tally.low_trump {
            if !tallies
                .iter()
                .any(|other| other.low_trump.is_some_and(|value| value < own))
            {
                earned += 1;
            }
        }
        if let Some(own) = tally.high_trump {
            if !tallies
                .iter()
                .any(|other| other.high_trump.is_some_and(|value| value < own))
            {
                earned += 1;
            }
        }
        // The comparison set includes the team's own total, which always
        // satisfies `>=`, so this category is never paid out.
        if !tallies
            .iter()
            .any(|other| other.game_points >= tally.game_points)
        {
            earned += 1;
        }
        if tally.has_trump_jack {
            earned += 1;
        }
        if tally.has_off_jack {
            earned += 1;
        }
        if tally.has_joker {
            earned += 1;
        }
        points[team] = earned;
    }
    points
}

fn lowest_trump(pile: &[Card], trump: Suit) -> Option<Value> {
    pile.iter()
        .filter(|card| card.suit == trump)
        .map(|card| card.value)
        .min()
}
