use criterion::{Criterion, black_box, criterion_group, criterion_main};
use natal_facts::{InMemoryFactStore, Relation, Sect, SignGender};
use natal_resolver::{ChartPlacement, Language, Resolver, classify, evaluate_hayz};

fn rules_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("rules");
    group.bench_function("classify", |b| {
        b.iter(|| classify(black_box(Some(&Relation::DetrimentIn))))
    });
    group.bench_function("evaluate_hayz", |b| {
        b.iter(|| {
            evaluate_hayz(
                black_box(Some(Sect::Nocturnal)),
                black_box(Some(SignGender::Feminine)),
                black_box(false),
            )
        })
    });
    group.finish();
}

fn interpret_bench(c: &mut Criterion) {
    let resolver = Resolver::new(InMemoryFactStore::canonical());
    let korean = Resolver::new(InMemoryFactStore::canonical()).with_language(Language::Korean);
    let found = ChartPlacement::new("Sun", "Leo", 10, true);
    let missing = ChartPlacement::new("Pluto", "Leo", 10, true);

    let mut group = c.benchmark_group("interpret");
    group.bench_function("found_en", |b| b.iter(|| resolver.interpret(black_box(&found))));
    group.bench_function("found_ko", |b| b.iter(|| korean.interpret(black_box(&found))));
    group.bench_function("not_found", |b| {
        b.iter(|| resolver.interpret(black_box(&missing)))
    });
    group.finish();
}

criterion_group!(benches, rules_bench, interpret_bench);
criterion_main!(benches);
