/// What a seat may do on its turn. A Raise carries the increment to
/// the table's minimum bet, not the total wager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Fold,
    Call,
    Raise(Chips),
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Action::Fold => write!(f, "{}", "fold".red()),
            Action::Call => write!(f, "{}", "call".green()),
            Action::Raise(amount) => write!(f, "{} {}", "raise".yellow(), amount),
        }
    }
}

use crate::Chips;
use colored::Colorize;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
