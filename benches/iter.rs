#[macro_use]
extern crate criterion;
extern crate poker_equity;

use criterion::Criterion;
use poker_equity::core::{CardIter, Deck};

fn iter_in_deck(c: &mut Criterion) {
    let d = Deck::new();
    c.bench_function("iter all 5 card hands in a deck", |b| {
        b.iter(|| (&d).into_iter().count())
    });
}

fn iter_into_buffer(c: &mut Criterion) {
    let d = Deck::new();
    c.bench_function("iter all 2 card hands into a buffer", |b| {
        b.iter(|| {
            let mut buffer = [d[0]; 2];
            let mut iter = CardIter::new(&d[..], 2);
            let mut count = 0;
            while iter.next_into(&mut buffer) {
                count += 1;
            }
            count
        })
    });
}

fn iter_hand(c: &mut Criterion) {
    let d = Deck::new();
    let hand = &d[..7];
    c.bench_function("iter 5 of 7 cards", |b| {
        b.iter(|| CardIter::new(hand, 5).count())
    });
}

criterion_group!(benches, iter_in_deck, iter_into_buffer, iter_hand);
criterion_main!(benches);
