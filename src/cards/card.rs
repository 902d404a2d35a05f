/// Card represented as a rank and a suit.
///
/// Ordering is rank-major with suit as a structural tie-break so that
/// Ord and Eq stay lawful; strength comparisons never read the suit.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
    pub const fn rank(&self) -> Rank {
        self.rank
    }
    pub const fn suit(&self) -> Suit {
        self.suit
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// "As" "Td" "9c"
impl TryFrom<&str> for Card {
    type Error = CardError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.len() {
            2 => Ok(Self {
                rank: Rank::try_from(&s[0..1])?,
                suit: Suit::try_from(&s[1..2])?,
            }),
            _ => Err(CardError::UnknownCard(s.to_string())),
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("rank byte out of range [2, 14]: {0}")]
    RankOutOfRange(u8),
    #[error("unknown rank symbol {0:?}")]
    UnknownRank(String),
    #[error("unknown suit symbol {0:?}")]
    UnknownSuit(String),
    #[error("unknown card {0:?}")]
    UnknownCard(String),
}

use super::rank::Rank;
use super::suit::Suit;
use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use thiserror::Error;
