use criterion::{Criterion, criterion_group, criterion_main};
use pagecheck_engine::parse_document;
mod common;

fn bench_parse_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let page = common::generate_page(100);
    group.bench_function("parse_document", |b| {
        b.iter(|| {
            let doc = parse_document(std::hint::black_box(&page)).unwrap();
            std::hint::black_box(doc);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_parse_document);
criterion_main!(benches);
