// benches/infobox.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use osrs_wiki::scrape;

const ARTICLE: &str = include_str!("../tests/fixtures/dragon_dagger.html");
const DISAMBIG: &str = include_str!("../tests/fixtures/varrock_disambig.html");

fn bench_extract(c: &mut Criterion) {
    c.bench_function("extract_article", |b| {
        b.iter(|| {
            let page = scrape::extract("u".into(), black_box(ARTICLE));
            black_box(page.summary.is_some())
        })
    });

    c.bench_function("extract_disambig", |b| {
        b.iter(|| {
            let page = scrape::extract("u".into(), black_box(DISAMBIG));
            black_box(page.is_disambiguation())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
