criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        evaluating_seven_cards,
        exhausting_five_card_subsets,
        querying_stronger_chance,
        ranking_hole_pairs,
}

fn evaluating_seven_cards(c: &mut criterion::Criterion) {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut deck = Deck::standard();
    let cards = (0..7)
        .map(|_| deck.draw(&mut rng).unwrap())
        .collect::<Vec<Card>>();
    c.bench_function("evaluate a 7-card hand", |b| {
        b.iter(|| evaluate(&cards).unwrap())
    });
}

fn exhausting_five_card_subsets(c: &mut criterion::Criterion) {
    c.bench_function("exhaust C(52, 5) index subsets", |b| {
        b.iter(|| {
            let mut cursor = [0usize; 5];
            let mut subsets = Subsets::new(&mut cursor, 52);
            let mut n = 0u64;
            while subsets.next().is_some() {
                n += 1;
            }
            n
        })
    });
}

fn mini_table() -> OddsTable {
    let deck = [Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]
        .into_iter()
        .flat_map(|rank| Suit::all().into_iter().map(move |suit| Card::new(rank, suit)))
        .collect::<Vec<Card>>();
    OddsTable::build(&deck)
}

fn querying_stronger_chance(c: &mut criterion::Criterion) {
    let table = mini_table();
    let revealed = ["Ah", "Kh", "Qh", "Jd", "Ac"]
        .map(|s| Card::try_from(s).unwrap());
    c.bench_function("chance_of_stronger over a full board", |b| {
        b.iter(|| table.chance_of_stronger(&revealed, 4_000_000).unwrap())
    });
}

fn ranking_hole_pairs(c: &mut criterion::Criterion) {
    let table = mini_table();
    let hole = [
        Card::try_from("As").unwrap(),
        Card::try_from("Kd").unwrap(),
    ];
    c.bench_function("rank a hole pair", |b| {
        b.iter(|| table.pair_rank(hole).unwrap())
    });
}

use croupier::cards::card::Card;
use croupier::cards::deck::Deck;
use croupier::cards::rank::Rank;
use croupier::cards::suit::Suit;
use croupier::combos::Subsets;
use croupier::evaluation::evaluator::evaluate;
use croupier::odds::table::OddsTable;
use rand::SeedableRng;
use rand::rngs::SmallRng;
