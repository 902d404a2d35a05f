/// Suit represented as a 2-bit index.
///
/// Suits carry no strength of their own; they only matter for flush
/// detection and for keeping the deck enumeration deterministic.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    C = 0,
    D = 1,
    H = 2,
    S = 3,
}

impl Suit {
    pub const fn all() -> [Suit; 4] {
        [Suit::C, Suit::D, Suit::H, Suit::S]
    }
}

/// u8 isomorphism
/// 0 -> C
/// 1 -> D
/// 2 -> H
/// 3 -> S
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::C,
            1 => Suit::D,
            2 => Suit::H,
            3 => Suit::S,
            _ => panic!("invalid suit index"),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

impl TryFrom<&str> for Suit {
    type Error = CardError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "c" => Ok(Suit::C),
            "d" => Ok(Suit::D),
            "h" => Ok(Suit::H),
            "s" => Ok(Suit::S),
            _ => Err(CardError::UnknownSuit(s.to_string())),
        }
    }
}

impl Display for Suit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::C => 'c',
                Suit::D => 'd',
                Suit::H => 'h',
                Suit::S => 's',
            }
        )
    }
}

use super::card::CardError;
use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
