pub const COMMUNITY: usize = 5;
pub const HOLE: usize = 2;
/// reveal cadence across the four voting cycles.
const CADENCE: [usize; 4] = [0, 3, 4, 5];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("voting is not open")]
    VotingClosed,
    #[error("voting is still open")]
    VotingOpen,
    #[error("raise amount must be positive, got {0}")]
    InvalidRaise(Chips),
    #[error("{0} seats cannot play a round")]
    NotEnoughSeats(usize),
    #[error("deck of {0} cards cannot cover the deal")]
    ShortDeck(usize),
    #[error("hole cards have not been dealt")]
    NotDealt,
    #[error("no seat is eligible for the pot")]
    NoContenders,
}

/// The betting state machine for one table.
///
/// A round deals five community cards face down plus two hole cards
/// per seat, then runs four voting cycles; each cycle ends by turning
/// up community cards on the 0 -> 3 -> 4 -> 5 cadence. Out-of-order
/// operations are errors, never panics, so a driver losing track of
/// the protocol finds out immediately.
#[derive(Debug)]
pub struct Table {
    seats: Vec<Seat>,
    stock: Deck,
    community: Vec<Card>,
    revealed: usize,
    pot: Chips,
    minimum_bet: Chips,
    voter: usize,
    vote_end: usize,
    first_voter: Option<usize>,
    voting: bool,
    rng: SmallRng,
}

impl Table {
    pub fn new(stacks: &[Chips], seed: u64) -> Self {
        Self::with_deck(stacks, Deck::standard(), seed)
    }

    /// deck composition is configuration; anything From<Vec<Card>>
    /// works as stock.
    pub fn with_deck(stacks: &[Chips], stock: Deck, seed: u64) -> Self {
        Self {
            seats: stacks
                .iter()
                .enumerate()
                .map(|(id, &balance)| Seat::new(id, balance))
                .collect(),
            stock,
            community: Vec::with_capacity(COMMUNITY),
            revealed: 0,
            pot: 0,
            minimum_bet: 0,
            voter: 0,
            vote_end: 0,
            first_voter: None,
            voting: false,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn minimum_bet(&self) -> Chips {
        self.minimum_bet
    }
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn is_voting(&self) -> bool {
        self.voting
    }
    /// the seat whose turn it is.
    pub fn voter(&self) -> &Seat {
        &self.seats[self.voter]
    }
    /// face-up community cards.
    pub fn community(&self) -> &[Card] {
        &self.community[..self.revealed]
    }
    pub fn is_fully_revealed(&self) -> bool {
        self.revealed == COMMUNITY
    }

    /// Drops bankrupt seats, rebuilds the deal from a fresh shuffle of
    /// the stock, and resets the pot. Community cards are drawn before
    /// hole cards, in seat order.
    pub fn start_round(&mut self) -> Result<(), TableError> {
        if self.voting {
            return Err(TableError::VotingOpen);
        }
        self.seats.retain(|s| s.balance() > 0);
        if self.seats.len() < 2 {
            return Err(TableError::NotEnoughSeats(self.seats.len()));
        }
        if self.stock.len() < COMMUNITY + HOLE * self.seats.len() {
            return Err(TableError::ShortDeck(self.stock.len()));
        }
        self.pot = 0;
        self.minimum_bet = 0;
        self.revealed = 0;
        let mut deck = self.stock.clone();
        self.community.clear();
        for _ in 0..COMMUNITY {
            self.community
                .push(deck.draw(&mut self.rng).expect("deal is covered"));
        }
        for seat in self.seats.iter_mut() {
            seat.reset();
            let hole = [
                deck.draw(&mut self.rng).expect("deal is covered"),
                deck.draw(&mut self.rng).expect("deal is covered"),
            ];
            seat.deal(hole);
        }
        log::debug!("new round dealt to {} seats", self.seats.len());
        Ok(())
    }

    /// Opens a cycle. The very first cycle of a match seats a random
    /// first voter; later cycles advance it cyclically. A first voter
    /// who cannot act is skipped immediately by the bounded scan.
    pub fn start_voting_cycle(&mut self) -> Result<(), TableError> {
        if self.voting {
            return Err(TableError::VotingOpen);
        }
        let n = self.seats.len();
        let first = match self.first_voter {
            None => self.rng.random_range(0..n),
            Some(index) => (index + 1) % n,
        };
        self.first_voter = Some(first);
        self.voter = first;
        self.vote_end = first;
        self.minimum_bet = 0;
        self.voting = true;
        if !self.seats[first].is_acting() {
            self.assign_next_voter()?;
        }
        log::debug!("voting opens at seat {}", self.voter().id());
        Ok(())
    }

    pub fn fold(&mut self) -> Result<(), TableError> {
        if !self.voting {
            return Err(TableError::VotingClosed);
        }
        self.seats[self.voter].fold();
        log::debug!("seat {} folds", self.voter().id());
        Ok(())
    }

    /// Matching a zero minimum bet is checking around; nothing moves.
    pub fn call(&mut self) -> Result<(), TableError> {
        if !self.voting {
            return Err(TableError::VotingClosed);
        }
        if self.minimum_bet == 0 {
            return Ok(());
        }
        let paid = self.seats[self.voter].match_bet(self.minimum_bet);
        self.pot += paid;
        log::debug!("seat {} calls for {}, pot {}", self.voter().id(), paid, self.pot);
        Ok(())
    }

    /// Lifts the minimum bet and reopens the cycle: every other seat
    /// must answer the raise before voting can close.
    pub fn raise(&mut self, amount: Chips) -> Result<(), TableError> {
        if !self.voting {
            return Err(TableError::VotingClosed);
        }
        if amount <= 0 {
            return Err(TableError::InvalidRaise(amount));
        }
        self.minimum_bet += amount;
        let paid = self.seats[self.voter].match_bet(self.minimum_bet);
        self.pot += paid;
        self.vote_end = self.voter;
        log::debug!(
            "seat {} raises to {}, pot {}",
            self.voter().id(),
            self.minimum_bet,
            self.pot
        );
        Ok(())
    }

    /// Advances to the next seat that can still act, scanning at most
    /// one full rotation. Wrapping around to the cycle end closes the
    /// vote instead of handing a dead seat the turn.
    pub fn assign_next_voter(&mut self) -> Result<(), TableError> {
        if !self.voting {
            return Err(TableError::VotingClosed);
        }
        let n = self.seats.len();
        let mut next = self.voter;
        for _ in 0..n {
            next = (next + 1) % n;
            if next == self.vote_end || self.seats[next].is_acting() {
                self.voter = next;
                return Ok(());
            }
        }
        self.voter = self.vote_end;
        Ok(())
    }

    /// the turn has come back around to where the cycle ends.
    pub fn is_voting_ended(&self) -> bool {
        self.voter == self.vote_end
    }

    /// at most one seat can still make a decision, so voting is moot.
    pub fn can_skip_vote(&self) -> bool {
        self.seats.iter().filter(|s| s.is_acting()).count() <= 1
    }

    /// Closes the cycle, clears cycle wagers, and turns up community
    /// cards per the cadence.
    pub fn end_voting_cycle(&mut self) -> Result<(), TableError> {
        if !self.voting {
            return Err(TableError::VotingClosed);
        }
        self.voting = false;
        self.minimum_bet = 0;
        for seat in self.seats.iter_mut() {
            seat.clear_bet();
        }
        self.reveal();
        log::debug!("cycle closed, {} cards up, pot {}", self.revealed, self.pot);
        Ok(())
    }

    /// Advances the reveal cadence without opening a vote; used when
    /// can_skip_vote holds.
    pub fn skip_voting_cycle(&mut self) -> Result<(), TableError> {
        if self.voting {
            return Err(TableError::VotingOpen);
        }
        self.reveal();
        log::debug!("cycle skipped, {} cards up", self.revealed);
        Ok(())
    }

    fn reveal(&mut self) {
        self.revealed = CADENCE
            .into_iter()
            .find(|&n| n > self.revealed)
            .unwrap_or(COMMUNITY);
    }

    /// Awards the whole pot to the strongest unfolded seat, judged on
    /// hole plus face-up community cards. Exact ties go to the
    /// earliest seat; pots are never split, a known limitation.
    pub fn decide_winner(&mut self) -> Result<usize, TableError> {
        if self.voting {
            return Err(TableError::VotingOpen);
        }
        let mut winner: Option<(usize, Combination)> = None;
        for (index, seat) in self.seats.iter().enumerate() {
            if seat.is_folded() {
                continue;
            }
            let hole = seat.hole().ok_or(TableError::NotDealt)?;
            let mut cards = hole.to_vec();
            cards.extend_from_slice(self.community());
            let combination = evaluate(&cards).expect("2 to 7 well-formed cards");
            match winner {
                Some((_, best)) if best >= combination => {}
                _ => winner = Some((index, combination)),
            }
        }
        let (index, combination) = winner.ok_or(TableError::NoContenders)?;
        let id = self.seats[index].id();
        log::info!("seat {} wins {} with {}", id, self.pot, combination);
        self.seats[index].award(self.pot);
        self.pot = 0;
        Ok(id)
    }
}

impl Display for Table {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "pot {}   minimum {}   board {}",
            format!("{}", self.pot).bold(),
            self.minimum_bet,
            self.community()
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<String>>()
                .join(" ")
        )?;
        for seat in self.seats.iter() {
            writeln!(f, "{}", seat)?;
        }
        Ok(())
    }
}

use crate::Chips;
use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::evaluation::combination::Combination;
use crate::evaluation::evaluator::evaluate;
use crate::table::seat::Seat;
use colored::Colorize;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use thiserror::Error;
