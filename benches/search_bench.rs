//! Search benchmarks
//!
//! Benchmarks for text, reference and loading paths over a synthetic corpus.

use criterion::{criterion_group, criterion_main, Criterion};
use lectio::config::SearchConfig;
use lectio::corpus::canon::{NEW_TESTAMENT, OLD_TESTAMENT};
use lectio::corpus::CorpusStore;
use lectio::search::Searcher;

const CHAPTERS: usize = 20;
const VERSES: usize = 25;

/// A corpus with every canonical book, about 33k verses
fn synthetic_corpus() -> CorpusStore {
    let words = ["grace", "light", "water", "shepherd", "mountain", "bread", "truth"];
    let mut verses = Vec::new();
    for (b, book) in OLD_TESTAMENT.iter().chain(NEW_TESTAMENT.iter()).enumerate() {
        for chapter in 1..=CHAPTERS {
            for verse in 1..=VERSES {
                let word = words[(b + chapter + verse) % words.len()];
                let text = format!(
                    "And it came to pass that the {} was upon the land in those days, verse {}.",
                    word, verse
                );
                verses.push((book.to_string(), chapter.to_string(), verse.to_string(), text));
            }
        }
    }
    CorpusStore::from_verses(verses)
}

fn benchmark_text_search(c: &mut Criterion) {
    let store = synthetic_corpus();
    let searcher = Searcher::new(&store);
    let config = SearchConfig::new();

    const TEST_QUERIES: &[&str] = &["shepherd", "LIGHT", "those days", "nowhere", "bread"];

    c.bench_function("text_search_throughput", |b| {
        let mut query_idx = 0;
        b.iter(|| {
            let query = TEST_QUERIES[query_idx % TEST_QUERIES.len()];
            let _ = searcher.search(query, &config);
            query_idx += 1;
        });
    });
}

fn benchmark_reference_search(c: &mut Criterion) {
    let store = synthetic_corpus();
    let searcher = Searcher::new(&store);
    let config = SearchConfig::new();

    const TEST_QUERIES: &[&str] = &["john 3:16", "genesis 1", "revelation 20:12", "psalms 7"];

    c.bench_function("reference_search_throughput", |b| {
        let mut query_idx = 0;
        b.iter(|| {
            let query = TEST_QUERIES[query_idx % TEST_QUERIES.len()];
            let _ = searcher.search(query, &config);
            query_idx += 1;
        });
    });
}

fn benchmark_load(c: &mut Criterion) {
    let bytes = match serde_json::to_vec(&synthetic_corpus()) {
        Ok(bytes) => bytes,
        Err(_) => {
            println!("Skipping load benchmark: could not serialize corpus");
            return;
        }
    };

    c.bench_function("nested_corpus_load", |b| {
        b.iter(|| CorpusStore::load(&bytes));
    });
}

criterion_group!(
    benches,
    benchmark_text_search,
    benchmark_reference_search,
    benchmark_load
);
criterion_main!(benches);
