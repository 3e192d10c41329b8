use criterion::{Criterion, black_box, criterion_group, criterion_main};
use natal_facts::{FactSheet, FactStore, InMemoryFactStore};

fn load_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");
    group.bench_function("canonical_sheet", |b| b.iter(FactSheet::canonical));
    group.bench_function("canonical_store", |b| b.iter(InMemoryFactStore::canonical));
    group.finish();
}

fn lookup_bench(c: &mut Criterion) {
    let store = InMemoryFactStore::canonical();

    let mut group = c.benchmark_group("lookup");
    group.bench_function("ruled", |b| {
        b.iter(|| store.lookup(black_box("Sun"), black_box("Leo"), black_box(10)))
    });
    group.bench_function("peregrine", |b| {
        b.iter(|| store.lookup(black_box("Venus"), black_box("Gemini"), black_box(3)))
    });
    group.bench_function("not_found", |b| {
        b.iter(|| store.lookup(black_box("Pluto"), black_box("Leo"), black_box(10)))
    });
    group.finish();
}

criterion_group!(benches, load_bench, lookup_bench);
criterion_main!(benches);
