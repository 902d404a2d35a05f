/// Rank with its face value as discriminant. Ace is always high (14);
/// it only plays low inside the wheel straight, which the evaluator
/// handles without a separate rank.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub const LOWEST: u8 = 2;
    pub const HIGHEST: u8 = 14;

    pub const fn all() -> [Rank; 13] {
        [
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
            Rank::Ace,
        ]
    }

    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            2 => Ok(Rank::Two),
            3 => Ok(Rank::Three),
            4 => Ok(Rank::Four),
            5 => Ok(Rank::Five),
            6 => Ok(Rank::Six),
            7 => Ok(Rank::Seven),
            8 => Ok(Rank::Eight),
            9 => Ok(Rank::Nine),
            10 => Ok(Rank::Ten),
            11 => Ok(Rank::Jack),
            12 => Ok(Rank::Queen),
            13 => Ok(Rank::King),
            14 => Ok(Rank::Ace),
            _ => Err(CardError::RankOutOfRange(n)),
        }
    }
}

impl TryFrom<&str> for Rank {
    type Error = CardError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "2" => Ok(Rank::Two),
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "T" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            "A" => Ok(Rank::Ace),
            _ => Err(CardError::UnknownRank(s.to_string())),
        }
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Two => "2",
                Rank::Three => "3",
                Rank::Four => "4",
                Rank::Five => "5",
                Rank::Six => "6",
                Rank::Seven => "7",
                Rank::Eight => "8",
                Rank::Nine => "9",
                Rank::Ten => "T",
                Rank::Jack => "J",
                Rank::Queen => "Q",
                Rank::King => "K",
                Rank::Ace => "A",
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        assert!(
            Rank::all()
                .iter()
                .all(|&r| r == Rank::try_from(r.value()).unwrap())
        );
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(Rank::try_from(0u8), Err(CardError::RankOutOfRange(0)));
        assert_eq!(Rank::try_from(1u8), Err(CardError::RankOutOfRange(1)));
        assert_eq!(Rank::try_from(15u8), Err(CardError::RankOutOfRange(15)));
    }

    #[test]
    fn ace_is_high() {
        assert!(Rank::Ace > Rank::King);
        assert_eq!(Rank::Ace.value(), 14);
    }
}
