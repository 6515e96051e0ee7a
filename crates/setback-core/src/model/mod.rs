pub mod bid;
pub mod card;
pub mod deck;
pub mod hand;
pub mod seat;
pub mod suit;
pub mod trick;
pub mod value;
