#[macro_use]
extern crate criterion;
extern crate poker_equity;

use poker_equity::core::{Deck, parse_cards};
use rand::rng;

fn shuffle_deck(c: &mut criterion::Criterion) {
    let mut rng = rng();
    let mut deck = Deck::new();

    c.bench_function("shuffle a full Deck", |b| {
        b.iter(|| deck.shuffle(&mut rng));
    });
}

fn deck_without(c: &mut criterion::Criterion) {
    let seen = parse_cards("AhAdKs7d2c").unwrap();

    c.bench_function("Deck without five seen cards", |b| {
        b.iter(|| Deck::without(&seen).len());
    });
}

criterion_group!(benches, shuffle_deck, deck_without);
criterion_main!(benches);
