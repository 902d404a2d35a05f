/// the four voting cycles of a round.
pub const STAGES: usize = 4;

/// Everything a policy may look at when asked to act. Snapshots of
/// the voter's own seat plus the public table state; other seats'
/// hole cards stay hidden by construction.
#[derive(Debug, Clone, Copy)]
pub struct Ballot<'a> {
    pub hole: [Card; 2],
    pub community: &'a [Card],
    pub balance: Chips,
    pub bet: Chips,
    pub minimum_bet: Chips,
    pub pot: Chips,
}

impl Ballot<'_> {
    /// chips still owed to stay in the hand.
    pub fn to_call(&self) -> Chips {
        (self.minimum_bet - self.bet).max(0)
    }
}

/// A decision maker behind a seat. Returning None abandons the
/// decision and folds the seat, so a policy that times out, errors
/// internally, or walks away degrades the same way.
pub trait Policy {
    fn decide(&mut self, ballot: &Ballot) -> Option<Action>;
}

/// fixed action queue; runs dry into folds. test and replay fodder.
pub struct Scripted(VecDeque<Action>);

impl Scripted {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self(actions.into_iter().collect())
    }
}

impl Policy for Scripted {
    fn decide(&mut self, _: &Ballot) -> Option<Action> {
        self.0.pop_front()
    }
}

/// Drives one full round: deal, four voting cycles on the reveal
/// cadence, showdown. Policies are indexed by stable seat id, one per
/// founding seat. Returns the winning seat id.
pub fn play_round(
    table: &mut Table,
    policies: &mut [Box<dyn Policy>],
) -> Result<usize, TableError> {
    table.start_round()?;
    for _ in 0..STAGES {
        if table.can_skip_vote() {
            table.skip_voting_cycle()?;
            continue;
        }
        table.start_voting_cycle()?;
        loop {
            let id = table.voter().id();
            let ballot = Ballot {
                hole: table.voter().hole().ok_or(TableError::NotDealt)?,
                community: table.community(),
                balance: table.voter().balance(),
                bet: table.voter().bet(),
                minimum_bet: table.minimum_bet(),
                pot: table.pot(),
            };
            let decision = policies[id].decide(&ballot);
            log::debug!(
                "seat {} decides {}",
                id,
                decision.map_or("abandon".to_string(), |a| a.to_string())
            );
            match decision {
                None | Some(Action::Fold) => table.fold()?,
                Some(Action::Call) => table.call()?,
                Some(Action::Raise(amount)) => table.raise(amount)?,
            }
            table.assign_next_voter()?;
            if table.is_voting_ended() {
                break;
            }
        }
        table.end_voting_cycle()?;
    }
    table.decide_winner()
}

use super::action::Action;
use super::state::Table;
use super::state::TableError;
use crate::Chips;
use crate::cards::card::Card;
use std::collections::VecDeque;

#[cfg(test)]
mod tests {
    use super::*;

    fn chips_in_play(table: &Table) -> Chips {
        table.seats().iter().map(|s| s.balance()).sum::<Chips>() + table.pot()
    }

    /// endless repetition of one action.
    struct Always(Action);
    impl Policy for Always {
        fn decide(&mut self, _: &Ballot) -> Option<Action> {
            Some(self.0)
        }
    }

    #[test]
    fn a_round_of_checks_reaches_showdown() {
        let mut table = Table::new(&[100, 100, 100], 11);
        let mut policies: Vec<Box<dyn Policy>> = (0..3)
            .map(|_| Box::new(Always(Action::Call)) as Box<dyn Policy>)
            .collect();
        let winner = play_round(&mut table, &mut policies).unwrap();
        assert!(table.is_fully_revealed());
        assert_eq!(table.pot(), 0);
        assert_eq!(chips_in_play(&table), 300);
        assert!(table.seats().iter().any(|s| s.id() == winner));
    }

    #[test]
    fn abandoned_decisions_fold() {
        let mut table = Table::new(&[100, 100], 11);
        let mut policies: Vec<Box<dyn Policy>> = vec![
            Box::new(Scripted::new([])),
            Box::new(Always(Action::Call)),
        ];
        let winner = play_round(&mut table, &mut policies).unwrap();
        // the scripted seat runs dry immediately and folds
        assert_eq!(winner, 1);
    }

    #[test]
    fn raises_are_answered_and_conserved() {
        let mut table = Table::new(&[100, 100, 100], 13);
        let mut policies: Vec<Box<dyn Policy>> = vec![
            Box::new(Scripted::new([
                Action::Raise(10),
                Action::Call,
                Action::Call,
                Action::Call,
            ])),
            Box::new(Always(Action::Call)),
            Box::new(Always(Action::Call)),
        ];
        let winner = play_round(&mut table, &mut policies).unwrap();
        assert_eq!(chips_in_play(&table), 300);
        assert!(table.seats().iter().any(|s| s.id() == winner));
        // everyone paid the raise
        let richest = table.seats().iter().map(|s| s.balance()).max().unwrap();
        assert!(richest >= 110);
    }

    #[test]
    fn mass_folds_fast_forward_the_board() {
        let mut table = Table::new(&[100, 100, 100], 17);
        let mut policies: Vec<Box<dyn Policy>> = vec![
            Box::new(Always(Action::Fold)),
            Box::new(Always(Action::Fold)),
            Box::new(Always(Action::Call)),
        ];
        let winner = play_round(&mut table, &mut policies).unwrap();
        assert_eq!(winner, 2);
        assert!(table.is_fully_revealed());
        assert_eq!(chips_in_play(&table), 300);
    }

    #[test]
    fn scripted_queue_plays_in_order() {
        let mut script = Scripted::new([Action::Call, Action::Raise(5)]);
        let ballot = Ballot {
            hole: [
                Card::try_from("As").unwrap(),
                Card::try_from("Kd").unwrap(),
            ],
            community: &[],
            balance: 100,
            bet: 0,
            minimum_bet: 0,
            pot: 0,
        };
        assert_eq!(script.decide(&ballot), Some(Action::Call));
        assert_eq!(script.decide(&ballot), Some(Action::Raise(5)));
        assert_eq!(script.decide(&ballot), None);
    }

    #[test]
    fn to_call_never_goes_negative() {
        let ballot = Ballot {
            hole: [
                Card::try_from("As").unwrap(),
                Card::try_from("Kd").unwrap(),
            ],
            community: &[],
            balance: 100,
            bet: 30,
            minimum_bet: 20,
            pot: 50,
        };
        assert_eq!(ballot.to_call(), 0);
    }
}
