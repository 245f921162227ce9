use criterion::{Criterion, criterion_group, criterion_main};
use tales_reader_engine::Parser;
mod common;

fn bench_parse_issue(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let parser = Parser::default();
    let content = common::generate_issue(12, 40);
    group.bench_function("full_issue", |b| {
        b.iter(|| {
            let issue = parser.parse_issue(std::hint::black_box(&content));
            std::hint::black_box(issue);
        });
    });

    group.bench_function("sections_only", |b| {
        b.iter(|| {
            let doc = parser.parse(std::hint::black_box(&content));
            std::hint::black_box(doc);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_parse_issue);
criterion_main!(benches);
