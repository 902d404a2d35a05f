/// Hand category with its fixed strength index as discriminant. The
/// index doubles as the leading digit of a packed combination, so the
/// discriminants are load-bearing.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Category {
    HighCard = 1,
    OnePair = 2,
    TwoPairs = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
}

impl Category {
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Category::HighCard => "High Card",
                Category::OnePair => "One Pair",
                Category::TwoPairs => "Two Pairs",
                Category::ThreeOfAKind => "Three of a Kind",
                Category::Straight => "Straight",
                Category::Flush => "Flush",
                Category::FullHouse => "Full House",
                Category::FourOfAKind => "Four of a Kind",
                Category::StraightFlush => "Straight Flush",
            }
        )
    }
}

use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
