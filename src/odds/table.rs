/// Community rank triple, sorted descending. Suit is deliberately
/// ignored: collapsing the 64 suit assignments of a triple into one
/// bucket is the approximation the whole table is built on, and
/// persisted tables depend on it.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Triple([Rank; 3]);

impl Triple {
    pub(crate) fn values(&self) -> [u8; 3] {
        self.0.map(Rank::value)
    }
}

impl From<[Card; 3]> for Triple {
    fn from(cards: [Card; 3]) -> Self {
        let mut ranks = cards.map(|c| c.rank());
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        Self(ranks)
    }
}

impl Display for Triple {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.0[0], self.0[1], self.0[2])
    }
}

/// Hole rank pair, sorted descending. Suitless for the same reason.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Pair([Rank; 2]);

impl Pair {
    pub(crate) fn values(&self) -> [u8; 2] {
        self.0.map(Rank::value)
    }
}

impl From<[Card; 2]> for Pair {
    fn from(cards: [Card; 2]) -> Self {
        let mut ranks = cards.map(|c| c.rank());
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        Self(ranks)
    }
}

impl Display for Pair {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0[0], self.0[1])
    }
}

impl TryFrom<[u8; 3]> for Triple {
    type Error = OddsError;
    fn try_from(bytes: [u8; 3]) -> Result<Self, Self::Error> {
        if !bytes.windows(2).all(|w| w[0] >= w[1]) {
            return Err(OddsError::Corrupt(format!("unsorted triple key {bytes:?}")));
        }
        let rank = |b: u8| Rank::try_from(b).map_err(|e| OddsError::Corrupt(e.to_string()));
        Ok(Self([rank(bytes[0])?, rank(bytes[1])?, rank(bytes[2])?]))
    }
}

impl TryFrom<[u8; 2]> for Pair {
    type Error = OddsError;
    fn try_from(bytes: [u8; 2]) -> Result<Self, Self::Error> {
        if bytes[0] < bytes[1] {
            return Err(OddsError::Corrupt(format!("unsorted pair key {bytes:?}")));
        }
        let rank = |b: u8| Rank::try_from(b).map_err(|e| OddsError::Corrupt(e.to_string()));
        Ok(Self([rank(bytes[0])?, rank(bytes[1])?]))
    }
}

/// Precomputed odds over every five-card hand of a deck.
///
/// An immutable value: build it once (or load the persisted blob) and
/// share it. Queries on a table built from one deck but asked about
/// cards of another surface as errors, not junk numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OddsTable {
    pub(crate) triples: BTreeMap<Triple, BTreeMap<Strength, u8>>,
    pub(crate) pairs: BTreeMap<Pair, u16>,
    pub(crate) highest: u16,
}

#[derive(Debug, Error)]
pub enum OddsError {
    #[error("no bucket for community ranks {0}")]
    MissingTriple(Triple),
    #[error("no rank for hole pair {0}")]
    MissingPair(Pair),
    #[error("corrupt odds data: {0}")]
    Corrupt(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl OddsTable {
    /// Dense preflop rank of a hole pair, 0..=highest_pair_rank.
    pub fn pair_rank(&self, hole: [Card; 2]) -> Result<u16, OddsError> {
        let key = Pair::from(hole);
        self.pairs.get(&key).copied().ok_or(OddsError::MissingPair(key))
    }

    pub fn highest_pair_rank(&self) -> u16 {
        self.highest
    }

    /// Probability that a completed five-card hand beats `strength`,
    /// pooled over every rank triple among the revealed community
    /// cards. None means no information: fewer than three cards
    /// showing, or empty buckets.
    pub fn chance_of_stronger(
        &self,
        revealed: &[Card],
        strength: Strength,
    ) -> Result<Option<f64>, OddsError> {
        if revealed.len() < 3 {
            return Ok(None);
        }
        let mut overall = 0u64;
        let mut higher = 0u64;
        let mut cursor = [0usize; 3];
        let mut subsets = Subsets::new(&mut cursor, revealed.len());
        while let Some(ix) = subsets.next() {
            let key = Triple::from([revealed[ix[0]], revealed[ix[1]], revealed[ix[2]]]);
            let bucket = self.triples.get(&key).ok_or(OddsError::MissingTriple(key))?;
            for (&s, &count) in bucket.iter() {
                overall += count as u64;
                if s > strength {
                    higher += count as u64;
                }
            }
        }
        match overall {
            0 => Ok(None),
            _ => Ok(Some(higher as f64 / overall as f64)),
        }
    }
}

use crate::cards::card::Card;
use crate::cards::rank::Rank;
use crate::combos::Subsets;
use crate::evaluation::combination::Strength;
use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use thiserror::Error;

#[cfg(test)]
mod tests {
    use super::*;

    fn card(s: &str) -> Card {
        Card::try_from(s).unwrap()
    }

    #[test]
    fn triple_sorts_descending() {
        let t = Triple::from([card("2c"), card("Kd"), card("7h")]);
        assert_eq!(t.values(), [13, 7, 2]);
        assert_eq!(t.to_string(), "K72");
    }

    #[test]
    fn triple_ignores_suit() {
        let a = Triple::from([card("Kc"), card("7c"), card("2c")]);
        let b = Triple::from([card("Kd"), card("7h"), card("2s")]);
        assert_eq!(a, b);
    }

    #[test]
    fn triple_key_validation() {
        assert!(Triple::try_from([13, 7, 2]).is_ok());
        assert!(Triple::try_from([2, 7, 13]).is_err());
        assert!(Triple::try_from([15, 7, 2]).is_err());
        assert!(Pair::try_from([14, 0]).is_err());
    }

    #[test]
    fn pair_of_equal_ranks() {
        let p = Pair::from([card("As"), card("Ad")]);
        assert_eq!(p.values(), [14, 14]);
    }
}
