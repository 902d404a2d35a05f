/// Remaining cards of a deal. Draws are uniform without replacement,
/// driven by a caller-seeded rng so deals can be replayed.
///
/// The standard deck is the deterministic 52-member suit x rank cross
/// product; variant compositions are configuration, built From any
/// card vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Deck {
    pub fn standard() -> Self {
        Self(
            Rank::all()
                .into_iter()
                .flat_map(|rank| Suit::all().into_iter().map(move |suit| Card::new(rank, suit)))
                .collect(),
        )
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn draw(&mut self, rng: &mut impl Rng) -> Option<Card> {
        match self.0.len() {
            0 => None,
            n => Some(self.0.swap_remove(rng.random_range(0..n))),
        }
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;
use rand::Rng;

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::collections::BTreeSet;

    #[test]
    fn standard_is_52_distinct() {
        let deck = Deck::standard();
        assert_eq!(deck.len(), 52);
        assert_eq!(deck.cards().iter().collect::<BTreeSet<_>>().len(), 52);
    }

    #[test]
    fn draw_exhausts_without_replacement() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut deck = Deck::standard();
        let mut seen = BTreeSet::new();
        while let Some(card) = deck.draw(&mut rng) {
            assert!(seen.insert(card));
        }
        assert_eq!(seen.len(), 52);
        assert!(deck.draw(&mut rng).is_none());
    }

    #[test]
    fn seeded_draws_replay() {
        let a = {
            let mut rng = SmallRng::seed_from_u64(42);
            let mut deck = Deck::standard();
            (0..5).map(|_| deck.draw(&mut rng).unwrap()).collect::<Vec<_>>()
        };
        let b = {
            let mut rng = SmallRng::seed_from_u64(42);
            let mut deck = Deck::standard();
            (0..5).map(|_| deck.draw(&mut rng).unwrap()).collect::<Vec<_>>()
        };
        assert_eq!(a, b);
    }
}
