#[macro_use]
extern crate criterion;
extern crate poker_equity;
extern crate rand;

use criterion::Criterion;
use poker_equity::core::{Card, Deck};
use poker_equity::table::TableBuilder;
use rand::rng;

fn rank_tables(c: &mut Criterion) {
    let table = TableBuilder::new().build();
    let mut deck = Deck::new();
    deck.shuffle(&mut rng());

    let five: Vec<Card> = deck[..5].to_vec();
    c.bench_function("Rank one 5 card hand", |b| {
        b.iter(|| table.rank(&five).unwrap())
    });

    let seven: Vec<Card> = deck[..7].to_vec();
    c.bench_function("Rank one 7 card hand", |b| {
        b.iter(|| table.rank(&seven).unwrap())
    });

    let board = [deck[0], deck[1], deck[2], deck[3], deck[4]];
    let hole = [deck[5], deck[6]];
    c.bench_function("Rank hole cards on a folded board", |b| {
        let state = table.board_state(&board);
        b.iter(|| table.rank_hole(state, &hole))
    });
}

fn build_small_table(c: &mut Criterion) {
    let deck = Deck::new();
    let cards: Vec<Card> = deck[..20].to_vec();
    c.bench_function("Build a 20 card table", |b| {
        b.iter(|| TableBuilder::with_cards(cards.iter().copied()).build())
    });
}

criterion_group!(benches, rank_tables, build_small_table);
criterion_main!(benches);
