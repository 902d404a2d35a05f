/// One chair at the table. The id is stable across rounds even as
/// bankrupt seats are dropped, so policies can be keyed by it.
#[derive(Debug, Clone)]
pub struct Seat {
    id: usize,
    balance: Chips,
    bet: Chips,
    folded: bool,
    hole: Option<[Card; 2]>,
}

impl Seat {
    pub fn new(id: usize, balance: Chips) -> Self {
        Self {
            id,
            balance,
            bet: 0,
            folded: false,
            hole: None,
        }
    }

    pub const fn id(&self) -> usize {
        self.id
    }
    pub const fn balance(&self) -> Chips {
        self.balance
    }
    pub const fn bet(&self) -> Chips {
        self.bet
    }
    pub const fn hole(&self) -> Option<[Card; 2]> {
        self.hole
    }
    pub const fn is_folded(&self) -> bool {
        self.folded
    }
    pub const fn is_all_in(&self) -> bool {
        self.balance == 0
    }
    /// still able to make a decision this cycle.
    pub const fn is_acting(&self) -> bool {
        !self.folded && !self.is_all_in()
    }

    pub(crate) fn deal(&mut self, hole: [Card; 2]) {
        self.hole = Some(hole);
    }
    pub(crate) fn fold(&mut self) {
        self.folded = true;
    }
    /// Pays chips toward a total cycle wager of `target`, returning
    /// what was actually moved. A short payment empties the balance,
    /// which is an implicit all-in; there are no side pots.
    pub(crate) fn match_bet(&mut self, target: Chips) -> Chips {
        let due = (target - self.bet).clamp(0, self.balance);
        self.balance -= due;
        self.bet += due;
        due
    }
    pub(crate) fn clear_bet(&mut self) {
        self.bet = 0;
    }
    pub(crate) fn award(&mut self, pot: Chips) {
        self.balance += pot;
    }
    /// fresh round, same chips.
    pub(crate) fn reset(&mut self) {
        self.bet = 0;
        self.folded = false;
        self.hole = None;
    }
}

impl Display for Seat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let line = format!("seat {:>2}   {:>6} chips   bet {:>5}", self.id, self.balance, self.bet);
        match self.folded {
            true => write!(f, "{}", line.dimmed()),
            false => write!(f, "{}", line),
        }
    }
}

use crate::Chips;
use crate::cards::card::Card;
use colored::Colorize;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_bet_tops_up_to_target() {
        let mut seat = Seat::new(0, 100);
        assert_eq!(seat.match_bet(30), 30);
        assert_eq!(seat.match_bet(50), 20);
        assert_eq!(seat.balance(), 50);
        assert_eq!(seat.bet(), 50);
    }

    #[test]
    fn short_match_is_all_in() {
        let mut seat = Seat::new(0, 25);
        assert_eq!(seat.match_bet(40), 25);
        assert!(seat.is_all_in());
        assert!(!seat.is_acting());
    }

    #[test]
    fn overpaid_target_moves_nothing() {
        let mut seat = Seat::new(0, 100);
        seat.match_bet(30);
        assert_eq!(seat.match_bet(10), 0);
        assert_eq!(seat.bet(), 30);
    }
}
