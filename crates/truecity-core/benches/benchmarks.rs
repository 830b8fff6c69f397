use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use truecity_core::model::{Entry, Level};
use truecity_core::options::prepare_options;
use truecity_core::Messages;

fn city_entries(n: usize) -> Vec<Entry> {
    const STEMS: [&str; 6] = ["San José", "Ávila", "Zürich", "Łódź", "Medellín", "UNKNOWN"];
    (0..n)
        .map(|i| Entry::new(i.to_string(), format!("{} {}", STEMS[i % STEMS.len()], n - i)))
        .collect()
}

fn bench_prepare(c: &mut Criterion) {
    let messages = Messages::default();
    let entries = city_entries(5_000);

    c.bench_function("prepare_options/cities_5k", |b| {
        b.iter(|| prepare_options(Level::City, black_box(entries.clone()), &messages))
    });
    c.bench_function("prepare_options/regions_5k", |b| {
        b.iter(|| prepare_options(Level::Region, black_box(entries.clone()), &messages))
    });
}

criterion_group!(benches, bench_prepare);
criterion_main!(benches);
