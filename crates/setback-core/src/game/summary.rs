use crate::game::phase::Phase;
use crate::game::session::{PlayerId, SEAT_COUNT, Session};
use crate::model::bid::Bid;
use crate::model::seat::Seat;
use crate::model::trick::Trick;
use serde::{Deserialize, Serialize};
use std::array;

/// Read-only projection of a session for external viewers: full bid and
/// trick history, but only the SIZE of each hidden hand, never its cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub phase: Phase,
    pub players: Vec<PlayerId>,
    pub dealer: Seat,
    pub turn: Seat,
    pub scores: [i32; 2],
    pub hand_sizes: [usize; SEAT_COUNT],
    pub passed: [bool; SEAT_COUNT],
    pub bids: Vec<(Seat, Bid)>,
    pub tricks: Vec<Trick>,
}

impl SessionSummary {
    pub fn capture(session: &Session) -> Self {
        Self {
            phase: session.phase(),
            players: session.players().to_vec(),
            dealer: session.dealer(),
            turn: session.turn(),
            scores: *session.scores(),
            hand_sizes: array::from_fn(|index| session.hand(Seat::LOOP[index]).len()),
            passed: *session.passed_flags(),
            bids: session.bids().to_vec(),
            tricks: session.tricks().to_vec(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
