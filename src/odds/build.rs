impl OddsTable {
    /// Exhausts every five-card subset of the deck and aggregates it
    /// into the triple and pair maps. Work shards over the lowest card
    /// index and merges additively, so the result is identical for any
    /// thread count.
    pub fn build(deck: &[Card]) -> Self {
        let heads = deck.len().saturating_sub(4);
        log::info!("{:<32}{:<16}", "building odds table", format!("{} cards", deck.len()));
        log::info!(
            "{:<32}{:<16}",
            "exhausting hands",
            format!("{}", Subsets::count(deck.len(), 5))
        );
        let progress = Mutex::new(Progress::new(heads, 24));
        let shard = (0..heads)
            .into_par_iter()
            .map(|head| {
                let shard = Shard::explore(deck, head);
                progress.lock().expect("progress lock").tick();
                shard
            })
            .reduce(Shard::default, Shard::merge);
        shard.seal()
    }
}

/// Partial aggregation over the hands led by one slice of head cards.
/// Triple multiplicities saturate at one byte so the in-memory table
/// matches its serialized form exactly; saturating addition commutes
/// with any merge order. Pair buckets keep full counts since only
/// their dense ordinals survive.
#[derive(Default)]
struct Shard {
    triples: BTreeMap<Triple, BTreeMap<Strength, u8>>,
    pairs: BTreeMap<Pair, BTreeMap<Strength, u32>>,
    strengths: BTreeSet<Strength>,
}

impl Shard {
    /// every five-card subset whose lowest index is `head`.
    fn explore(deck: &[Card], head: usize) -> Self {
        let mut shard = Shard::default();
        let tail = &deck[head + 1..];
        let mut hand = [deck[head]; 5];
        let mut cursor = [0usize; 4];
        let mut subsets = Subsets::new(&mut cursor, tail.len());
        while let Some(ix) = subsets.next() {
            for (slot, &i) in hand[1..].iter_mut().zip(ix.iter()) {
                *slot = tail[i];
            }
            let strength = evaluate(&hand)
                .expect("five well-formed cards")
                .strength();
            shard.absorb(&hand, strength);
        }
        shard
    }

    fn absorb(&mut self, hand: &[Card; 5], strength: Strength) {
        self.strengths.insert(strength);
        let mut cursor = [0usize; 3];
        let mut triples = Subsets::new(&mut cursor, 5);
        while let Some(ix) = triples.next() {
            let key = Triple::from([hand[ix[0]], hand[ix[1]], hand[ix[2]]]);
            let slot = self.triples.entry(key).or_default().entry(strength).or_insert(0);
            *slot = slot.saturating_add(1);
        }
        let mut cursor = [0usize; 2];
        let mut pairs = Subsets::new(&mut cursor, 5);
        while let Some(ix) = pairs.next() {
            let key = Pair::from([hand[ix[0]], hand[ix[1]]]);
            *self.pairs.entry(key).or_default().entry(strength).or_insert(0) += 1;
        }
    }

    fn merge(mut self, other: Self) -> Self {
        for (key, bucket) in other.triples {
            let mine = self.triples.entry(key).or_default();
            for (strength, count) in bucket {
                let slot = mine.entry(strength).or_insert(0);
                *slot = slot.saturating_add(count);
            }
        }
        for (key, bucket) in other.pairs {
            let mine = self.pairs.entry(key).or_default();
            for (strength, count) in bucket {
                *mine.entry(strength).or_insert(0) += count;
            }
        }
        self.strengths.extend(other.strengths);
        self
    }

    /// Collapses raw pair scores into dense ordinals. A pair's raw
    /// score weights each strength it can see by that strength's index
    /// in the global sorted strength list; equal scores share an
    /// ordinal.
    fn seal(self) -> OddsTable {
        let strengths = self.strengths.into_iter().collect::<Vec<Strength>>();
        let score = |bucket: &BTreeMap<Strength, u32>| {
            bucket
                .iter()
                .map(|(strength, &count)| {
                    let index = strengths
                        .binary_search(strength)
                        .expect("strength recorded during build");
                    index as u64 * count as u64
                })
                .sum::<u64>()
        };
        let ladder = self
            .pairs
            .values()
            .map(score)
            .collect::<BTreeSet<u64>>()
            .into_iter()
            .collect::<Vec<u64>>();
        let pairs = self
            .pairs
            .iter()
            .map(|(&key, bucket)| {
                let rank = ladder
                    .binary_search(&score(bucket))
                    .expect("score recorded during build");
                (key, rank as u16)
            })
            .collect::<BTreeMap<Pair, u16>>();
        let highest = pairs.values().copied().max().unwrap_or(0);
        log::info!("{:<32}{:<16}", "sealed odds table", format!("{} triples", self.triples.len()));
        OddsTable {
            triples: self.triples,
            pairs,
            highest,
        }
    }
}

use super::progress::Progress;
use super::table::OddsTable;
use super::table::Pair;
use super::table::Triple;
use crate::cards::card::Card;
use crate::combos::Subsets;
use crate::evaluation::combination::Strength;
use crate::evaluation::evaluator::evaluate;
use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelIterator;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::sync::Mutex;
