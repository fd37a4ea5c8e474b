//! Benchmarks for suggestion refresh and navigation
//!
//! Run with: cargo bench -p typeahead-widgets

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use typeahead_core::event::{Event, KeyCode};
use typeahead_widgets::{Candidate, Corpus, SearchBar, SuggestionProvider};

const WORDS: &[&str] = &[
    "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel", "india", "juliet",
    "kilo", "lima", "mike", "november", "oscar", "papa",
];

fn make_corpus(n: usize) -> Corpus {
    (0..n)
        .map(|i| {
            let a = WORDS[i % WORDS.len()];
            let b = WORDS[(i / WORDS.len()) % WORDS.len()];
            Candidate::new(format!("{a} {b} {i}"), format!("sku-{i:06}"))
        })
        .collect()
}

// ============================================================================
// Corpus lookup
// ============================================================================

fn bench_corpus_suggest(c: &mut Criterion) {
    let mut group = c.benchmark_group("corpus/suggest");

    for n in [100, 1_000, 10_000] {
        let corpus = make_corpus(n);
        let capped = corpus.clone().with_max_results(10);

        group.bench_with_input(BenchmarkId::new("prefix", n), &corpus, |b, corpus| {
            b.iter(|| black_box(corpus.suggest(black_box("ch"))))
        });

        group.bench_with_input(BenchmarkId::new("substring", n), &corpus, |b, corpus| {
            b.iter(|| black_box(corpus.suggest(black_box("ove"))))
        });

        group.bench_with_input(BenchmarkId::new("capped", n), &capped, |b, corpus| {
            b.iter(|| black_box(corpus.suggest(black_box("a"))))
        });
    }

    group.finish();
}

// ============================================================================
// Keystroke handling
// ============================================================================

fn bench_typing(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_bar/typing");
    let keys: Vec<Event> = "delta kilo"
        .chars()
        .map(|c| Event::key(KeyCode::Char(c)))
        .collect();

    for n in [1_000, 10_000] {
        let corpus = make_corpus(n);

        group.bench_with_input(BenchmarkId::new("type_query", n), &corpus, |b, corpus| {
            b.iter(|| {
                let mut bar = SearchBar::new(corpus.clone(), corpus.clone());
                for key in &keys {
                    black_box(bar.handle_event(key));
                }
                black_box(bar.candidates().len())
            })
        });
    }

    group.finish();
}

fn bench_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_bar/navigate");
    let corpus = make_corpus(10_000);
    let down = Event::key(KeyCode::Down);
    let up = Event::key(KeyCode::Up);

    let mut bar = SearchBar::new(corpus.clone(), corpus);
    bar.on_text_changed("e");

    group.bench_function("down_up_cycle", |b| {
        b.iter(|| {
            black_box(bar.handle_event(&down));
            black_box(bar.handle_event(&up));
        })
    });

    group.bench_function("visible_window", |b| {
        b.iter(|| black_box(bar.visible_candidates().count()))
    });

    group.finish();
}

criterion_group!(benches, bench_corpus_suggest, bench_typing, bench_navigation);
criterion_main!(benches);
