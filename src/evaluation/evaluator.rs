/// Ranks a set of 2..=7 cards into its best five-card Combination.
pub fn evaluate(cards: &[Card]) -> Result<Combination, EvaluationError> {
    Evaluator::try_from(cards).map(|e| e.conclude())
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("expected between 2 and 7 cards, got {0}")]
    CardCount(usize),
}

/// Rank and suit histograms over a descending-sorted copy of the
/// cards. Category checks run in strict descending strength order, so
/// the first hit is the best hand.
struct Evaluator {
    cards: Vec<Card>,
    rank_counts: [u8; 15],
    suit_counts: [u8; 4],
}

impl TryFrom<&[Card]> for Evaluator {
    type Error = EvaluationError;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        if !(2..=7).contains(&cards.len()) {
            return Err(EvaluationError::CardCount(cards.len()));
        }
        let mut sorted = cards.to_vec();
        sorted.sort_by(|a, b| b.rank().cmp(&a.rank()));
        let mut rank_counts = [0u8; 15];
        let mut suit_counts = [0u8; 4];
        for card in sorted.iter() {
            rank_counts[card.rank().value() as usize] += 1;
            suit_counts[u8::from(card.suit()) as usize] += 1;
        }
        Ok(Self {
            cards: sorted,
            rank_counts,
            suit_counts,
        })
    }
}

impl Evaluator {
    fn conclude(&self) -> Combination {
        None.or_else(|| self.straight_flush())
            .or_else(|| self.four_of_a_kind())
            .or_else(|| self.full_house())
            .or_else(|| self.flush())
            .or_else(|| self.straight())
            .or_else(|| self.three_of_a_kind())
            .or_else(|| self.two_pairs())
            .or_else(|| self.one_pair())
            .unwrap_or_else(|| self.high_card())
    }

    fn straight_flush(&self) -> Option<Combination> {
        let suit = self.flush_suit()?;
        let mut present = [false; 15];
        for card in self.cards.iter().filter(|c| c.suit() == suit) {
            present[card.rank().value() as usize] = true;
        }
        let high = Self::straight_high(present)?;
        let mut slots = [Category::StraightFlush.index(), 0, 0, 0, 0, 0];
        match high {
            // the wheel runs out of ranks below the deuce; its last
            // slot stays empty
            5 => slots[1..5].copy_from_slice(&[5, 4, 3, 2]),
            _ => (0..5).for_each(|i| slots[1 + i] = high - i as u8),
        }
        Some(Combination::pack(Category::StraightFlush, slots))
    }

    fn four_of_a_kind(&self) -> Option<Combination> {
        let quad = self.rank_with_count(4)?;
        let [kicker] = self.kickers(&[quad]);
        let slots = [Category::FourOfAKind.index(), quad, kicker, 0, 0, 0];
        Some(Combination::pack(Category::FourOfAKind, slots))
    }

    fn full_house(&self) -> Option<Combination> {
        let trips = self.rank_with_count(3)?;
        let pair = (Rank::LOWEST..=Rank::HIGHEST)
            .rev()
            .filter(|&v| v != trips)
            .find(|&v| self.rank_counts[v as usize] >= 2)?;
        let slots = [Category::FullHouse.index(), trips, pair, 0, 0, 0];
        Some(Combination::pack(Category::FullHouse, slots))
    }

    fn flush(&self) -> Option<Combination> {
        let suit = self.flush_suit()?;
        let mut slots = [Category::Flush.index(), 0, 0, 0, 0, 0];
        for (slot, card) in slots[1..]
            .iter_mut()
            .zip(self.cards.iter().filter(|c| c.suit() == suit))
        {
            *slot = card.rank().value();
        }
        Some(Combination::pack(Category::Flush, slots))
    }

    fn straight(&self) -> Option<Combination> {
        let mut present = [false; 15];
        for (value, &count) in self.rank_counts.iter().enumerate() {
            present[value] = count > 0;
        }
        let high = Self::straight_high(present)?;
        let slots = [Category::Straight.index(), high, 0, 0, 0, 0];
        Some(Combination::pack(Category::Straight, slots))
    }

    fn three_of_a_kind(&self) -> Option<Combination> {
        let trips = self.rank_with_count(3)?;
        let [k1, k2] = self.kickers(&[trips]);
        let slots = [Category::ThreeOfAKind.index(), trips, k1, k2, 0, 0];
        Some(Combination::pack(Category::ThreeOfAKind, slots))
    }

    fn two_pairs(&self) -> Option<Combination> {
        let hi = self.rank_with_count(2)?;
        let lo = (Rank::LOWEST..=Rank::HIGHEST)
            .rev()
            .filter(|&v| v != hi)
            .find(|&v| self.rank_counts[v as usize] >= 2)?;
        let [kicker] = self.kickers(&[hi, lo]);
        let slots = [Category::TwoPairs.index(), hi, lo, kicker, 0, 0];
        Some(Combination::pack(Category::TwoPairs, slots))
    }

    fn one_pair(&self) -> Option<Combination> {
        let pair = self.rank_with_count(2)?;
        let [k1, k2, k3] = self.kickers(&[pair]);
        let slots = [Category::OnePair.index(), pair, k1, k2, k3, 0];
        Some(Combination::pack(Category::OnePair, slots))
    }

    fn high_card(&self) -> Combination {
        let [k1, k2, k3, k4, k5] = self.kickers(&[]);
        let slots = [Category::HighCard.index(), k1, k2, k3, k4, k5];
        Combination::pack(Category::HighCard, slots)
    }

    fn flush_suit(&self) -> Option<Suit> {
        Suit::all()
            .into_iter()
            .find(|&s| self.suit_counts[u8::from(s) as usize] >= 5)
    }

    /// highest rank value held at least `count` times.
    fn rank_with_count(&self, count: u8) -> Option<u8> {
        (Rank::LOWEST..=Rank::HIGHEST)
            .rev()
            .find(|&v| self.rank_counts[v as usize] >= count)
    }

    /// best ranks outside the skipped values, descending; slots past
    /// the card supply stay zero.
    fn kickers<const N: usize>(&self, skip: &[u8]) -> [u8; N] {
        let mut out = [0u8; N];
        let mut values = self
            .cards
            .iter()
            .map(|c| c.rank().value())
            .filter(|v| !skip.contains(v));
        for slot in out.iter_mut() {
            match values.next() {
                Some(v) => *slot = v,
                None => break,
            }
        }
        out
    }

    /// High end of a five-long run over the present-value set, topmost
    /// run first. The Ace doubles as a one so the wheel qualifies; a
    /// six-long run to the six still reads as six high.
    fn straight_high(mut present: [bool; 15]) -> Option<u8> {
        present[1] = present[14];
        (5..=14u8)
            .rev()
            .find(|&high| (high - 4..=high).all(|v| present[v as usize]))
    }
}

use super::category::Category;
use super::combination::Combination;
use crate::cards::card::Card;
use crate::cards::rank::Rank;
use crate::cards::suit::Suit;
use thiserror::Error;
