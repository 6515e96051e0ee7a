use crate::game::error::SessionError;
use crate::game::phase::Phase;
use crate::game::scoring::{self, CategoryTally};
use crate::game::summary::SessionSummary;
use crate::model::bid::Bid;
use crate::model::card::Card;
use crate::model::deck::Deck;
use crate::model::hand::Hand;
use crate::model::seat::{Seat, Team};
use crate::model::suit::Suit;
use crate::model::trick::Trick;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::array;
use tracing::{debug, warn};

pub type PlayerId = String;

pub const SEAT_COUNT: usize = 4;
pub const HAND_SIZE: usize = 6;
pub const WINNING_SCORE: i32 = 21;

/// One game of Setback: the aggregate holding the phase machine, seats,
/// hands, auction, tricks, and team scores. Every public operation
/// validates before it mutates; a returned error means nothing changed.
#[derive(Debug, Clone)]
pub struct Session {
    phase: Phase,
    players: Vec<PlayerId>,
    dealer: Seat,
    turn: Seat,
    passed: [bool; SEAT_COUNT],
    hands: [Hand; SEAT_COUNT],
    scores: [i32; 2],
    bids: Vec<(Seat, Bid)>,
    tricks: Vec<Trick>,
    rng: StdRng,
    seed: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            phase: Phase::Joining,
            players: Vec::new(),
            dealer: Seat::A,
            turn: Seat::A,
            passed: [false; SEAT_COUNT],
            hands: array::from_fn(|_| Hand::new()),
            scores: [0; 2],
            bids: Vec::new(),
            tricks: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }

    pub fn dealer(&self) -> Seat {
        self.dealer
    }

    pub fn turn(&self) -> Seat {
        self.turn
    }

    pub fn passed_flags(&self) -> &[bool; SEAT_COUNT] {
        &self.passed
    }

    pub fn hand(&self, seat: Seat) -> &Hand {
        &self.hands[seat.index()]
    }

    pub fn score(&self, team: Team) -> i32 {
        self.scores[team.index()]
    }

    pub fn scores(&self) -> &[i32; 2] {
        &self.scores
    }

    pub fn bids(&self) -> &[(Seat, Bid)] {
        &self.bids
    }

    pub fn tricks(&self) -> &[Trick] {
        &self.tricks
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn seat_of(&self, player: &str) -> Option<Seat> {
        self.players
            .iter()
            .position(|id| id == player)
            .and_then(Seat::from_index)
    }

    /// The trump suit for the current hand: the raw suit of the first card
    /// led in the hand's first trick. `None` until that card is played.
    pub fn trump(&self) -> Option<Suit> {
        self.tricks.first().and_then(Trick::lead_suit)
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary::capture(self)
    }

    /// Seats players in join order. The fourth join deals immediately and
    /// opens the auction.
    pub fn join(&mut self, player: &str) -> Result<(), SessionError> {
        self.require_phase(Phase::Joining)?;
        if self.players.iter().any(|id| id == player) {
            warn!(player, "rejected join: already seated");
            return Err(SessionError::DuplicateJoin);
        }

        self.players.push(player.to_string());
        debug!(player, seats_filled = self.players.len(), "player joined");

        if self.players.len() == SEAT_COUNT {
            self.phase = Phase::Dealing;
            self.deal();
        }
        Ok(())
    }

    /// Records an auction entry for the current seat. The auction closes
    /// the instant a six is bid or all seats but one have passed.
    pub fn bid(&mut self, player: &str, bid: Bid) -> Result<(), SessionError> {
        self.require_phase(Phase::Bidding)?;
        let seat = self.require_turn(player)?;

        if let Some(amount) = bid.amount() {
            if !self.bids.is_empty() {
                let (_, current) = self.winning_bid();
                if amount < current {
                    warn!(player, amount, current, "rejected bid below the winning bid");
                    return Err(SessionError::BelowCurrentBid { amount, current });
                }
            }
        }

        self.bids.push((seat, bid));
        if bid.is_pass() {
            self.passed[seat.index()] = true;
        }
        debug!(player, %seat, %bid, "bid recorded");

        let active = self.passed.iter().filter(|passed| !**passed).count();
        if bid == Bid::Six || active <= 1 {
            self.phase = Phase::Tricking;
            let (owner, amount) = self.winning_bid();
            debug!(%owner, amount, "auction closed");
        }
        self.advance_turn_skipping_passed();
        Ok(())
    }

    /// Auction entry from a raw amount, for hosts that carry bids as
    /// integers. Passes go through [`Session::bid`] with [`Bid::Pass`].
    pub fn bid_amount(&mut self, player: &str, amount: u8) -> Result<(), SessionError> {
        let Some(bid) = Bid::from_amount(amount) else {
            warn!(player, amount, "rejected bid outside the legal range");
            return Err(SessionError::InvalidBidAmount(amount));
        };
        self.bid(player, bid)
    }

    /// Plays the card at `index` of the caller's hand into the open trick.
    /// The fourth card resolves the trick; the hand's last card triggers
    /// scoring.
    pub fn play_card(&mut self, player: &str, index: usize) -> Result<(), SessionError> {
        self.require_phase(Phase::Tricking)?;
        let seat = self.require_turn(player)?;

        let Some(card) = self.hands[seat.index()].remove_at(index) else {
            warn!(player, index, "rejected play of a non-existent card");
            return Err(SessionError::InvalidCardIndex(index));
        };

        if self.tricks.is_empty() {
            self.tricks.push(Trick::new());
        }
        let trick = self.tricks.last_mut().expect("an open trick exists");
        trick.push(seat, card);
        let complete = trick.is_complete();
        debug!(player, %seat, %card, "card played");

        if complete {
            let trump = self.trump().expect("trump is fixed once a card is played");
            let winner = self
                .tricks
                .last()
                .and_then(|trick| trick.winner(trump))
                .expect("complete trick has a winner");
            debug!(%winner, "trick complete");
            self.turn = winner;
            if self.hands[winner.index()].is_empty() {
                self.phase = Phase::Scoring;
                self.score_hand();
            } else {
                self.tricks.push(Trick::new());
            }
        }
        // The seat to act next is the one after the trick winner, not the
        // winner itself; mid-trick this is simply the next seat around.
        self.turn = self.turn.next();
        Ok(())
    }

    /// The auction's winner so far: starts at (dealer, 2), then folds over
    /// the bid log excluding its first entry, later entries taking ties.
    pub fn winning_bid(&self) -> (Seat, u8) {
        let mut owner = self.dealer;
        let mut amount = Bid::MIN_AMOUNT;
        for (seat, bid) in self.bids.iter().skip(1) {
            if let Some(entry) = bid.amount() {
                if entry >= amount {
                    amount = entry;
                    owner = *seat;
                }
            }
        }
        (owner, amount)
    }

    fn require_phase(&self, expected: Phase) -> Result<(), SessionError> {
        if self.phase == expected {
            Ok(())
        } else {
            warn!(phase = %self.phase, %expected, "rejected operation in wrong phase");
            Err(SessionError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    fn require_turn(&self, player: &str) -> Result<Seat, SessionError> {
        let Some(seat) = self.seat_of(player) else {
            warn!(player, "rejected action by an unseated player");
            return Err(SessionError::UnknownPlayer);
        };
        if seat != self.turn {
            warn!(player, %seat, expected = %self.turn, "rejected out-of-turn action");
            return Err(SessionError::OutOfTurn {
                expected: self.turn,
            });
        }
        Ok(seat)
    }

    fn advance_turn_skipping_passed(&mut self) {
        loop {
            self.turn = self.turn.next();
            if !self.passed[self.turn.index()] {
                break;
            }
        }
    }

    fn deal(&mut self) {
        if self.phase != Phase::Dealing {
            warn!(phase = %self.phase, "deal requested outside the dealing phase");
            return;
        }

        let deck = Deck::shuffled(&mut self.rng);
        for seat in Seat::LOOP {
            let start = seat.index() * HAND_SIZE;
            let cards = deck.cards()[start..start + HAND_SIZE].to_vec();
            self.hands[seat.index()] = Hand::with_cards(cards);
        }
        // Cards beyond the four slices are set aside for the hand.
        self.phase = Phase::Bidding;
        debug!(dealer = %self.dealer, "dealt a new hand");
    }

    fn score_hand(&mut self) {
        if self.phase != Phase::Scoring {
            warn!(phase = %self.phase, "scoring requested outside the scoring phase");
            return;
        }
        let Some(trump) = self.trump() else {
            return;
        };

        let mut piles: [Vec<Card>; 2] = [Vec::new(), Vec::new()];
        for trick in &self.tricks {
            let Some(winner) = trick.winner(trump) else {
                continue;
            };
            piles[winner.team().index()].extend(trick.plays().iter().map(|play| play.card));
        }

        let (bid_seat, bid_amount) = self.winning_bid();
        let bid_team = bid_seat.team();
        let tallies = [
            CategoryTally::of(&piles[0], trump),
            CategoryTally::of(&piles[1], trump),
        ];
        let points = scoring::category_points(&tallies);

        for team in Team::BOTH {
            let earned = points[team.index()];
            if team == bid_team && earned < u32::from(bid_amount) {
                self.scores[team.index()] -= i32::from(bid_amount);
                debug!(%team, bid = bid_amount, earned, "bidding team set");
            } else {
                self.scores[team.index()] += earned as i32;
            }
        }
        debug!(scores = ?self.scores, "hand scored");

        if self.scores.iter().any(|score| *score >= WINNING_SCORE) {
            self.phase = Phase::Finished;
            debug!("match finished");
        } else {
            self.passed = [false; SEAT_COUNT];
            self.bids.clear();
            self.tricks.clear();
            self.phase = Phase::Dealing;
            self.deal();
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
