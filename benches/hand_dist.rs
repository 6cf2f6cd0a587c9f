#[macro_use]
extern crate criterion;
extern crate poker_equity;

use criterion::Criterion;
use poker_equity::core::parse_cards;
use poker_equity::holdem::HandDist;

fn expand_all(c: &mut Criterion) {
    let all = HandDist::all();
    c.bench_function("Expand all 169 hand classes", |b| {
        b.iter(|| all.iter().map(|d| d.expand().len()).sum::<usize>())
    });
}

fn parse_tokens(c: &mut Criterion) {
    c.bench_function("Parse AKs", |b| {
        b.iter(|| HandDist::new_from_str("AKs").unwrap())
    });
}

fn hole_probability(c: &mut Criterion) {
    let visible = parse_cards("AhKd7c2s9h").unwrap();
    let dist = HandDist::new_from_str("AKo").unwrap();
    c.bench_function("P(AKo) given five visible cards", |b| {
        b.iter(|| dist.probability(&visible).unwrap())
    });
}

criterion_group!(benches, expand_all, parse_tokens, hole_probability);
criterion_main!(benches);
