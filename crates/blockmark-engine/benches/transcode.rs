use blockmark_engine::{SequentialIds, parse, parse_with_ids, serialize};
use criterion::{Criterion, criterion_group, criterion_main};

fn generate_article(sections: usize) -> String {
    let base = "## Section\n\nParagraph with some content.\nA second line.\n\n![Boats](https://example.com/boats.jpg)\n*Boats — Photo by Jane*\n\n> \"A quote worth keeping.\"\n> — Someone\n\n- Bullet point\n- Another item\n\n1. First\n1. Second\n\n---\n\n";
    base.repeat(sections)
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.sample_size(10);

    let content = generate_article(100);
    group.bench_function("uuid_ids", |b| {
        b.iter(|| std::hint::black_box(parse(std::hint::black_box(&content))));
    });
    group.bench_function("sequential_ids", |b| {
        b.iter(|| {
            let ids = SequentialIds::new();
            std::hint::black_box(parse_with_ids(std::hint::black_box(&content), &ids))
        });
    });

    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");
    group.sample_size(10);

    let doc = parse(&generate_article(100));
    group.bench_function("article", |b| {
        b.iter(|| std::hint::black_box(serialize(std::hint::black_box(&doc))));
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_serialize);
criterion_main!(benches);
