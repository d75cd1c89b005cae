// Criterion benchmarks for the markspell scanner and pipeline.
//
// Uses the bundled word list at ../../data/dictionary.txt relative to the
// crate root.
//
// Run:
//   cargo bench -p markspell

use std::num::NonZeroUsize;
use std::path::PathBuf;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use markspell::scanner::{scan, scan_sequential};
use markspell::{Pipeline, SpellCheckConfig, tokenize};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

const PARAGRAPH: &str = "The quick wrold of spelling is a hard problme for evrey writer, \
    and a good dictionary can help. Sme wrods are mispelled and some are not. ";

fn build_pipeline() -> Pipeline {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/dictionary.txt");
    Pipeline::from_word_list(&path, &SpellCheckConfig::default()).expect("bundled word list")
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Sequential vs parallel scan over growing token streams.
fn bench_scan(c: &mut Criterion) {
    let pipeline = build_pipeline();
    let chunk_size = NonZeroUsize::new(pipeline.scanner().chunk_size()).expect("validated chunk size");
    let mut group = c.benchmark_group("scan");

    for repeats in [10, 100, 1000] {
        let tokens = tokenize(&PARAGRAPH.repeat(repeats));
        group.throughput(Throughput::Elements(tokens.len() as u64));

        group.bench_with_input(BenchmarkId::new("sequential", tokens.len()), &tokens, |b, tokens| {
            b.iter(|| scan_sequential(tokens, pipeline.vocabulary(), pipeline.engine()));
        });
        group.bench_with_input(BenchmarkId::new("parallel", tokens.len()), &tokens, |b, tokens| {
            b.iter(|| scan(tokens, pipeline.vocabulary(), pipeline.engine(), chunk_size));
        });
    }

    group.finish();
}

/// Full convert -> scan -> annotate run on a medium document.
fn bench_process(c: &mut Criterion) {
    let pipeline = build_pipeline();
    let document = format!("# Notes\n\n{}\n\n- one itme\n- two items\n", PARAGRAPH.repeat(50));

    c.bench_function("process_medium_document", |b| {
        b.iter(|| std::hint::black_box(pipeline.process(document.as_bytes()).expect("process")));
    });
}

/// Suggestion lookup for a handful of misspellings.
fn bench_suggest(c: &mut Criterion) {
    let pipeline = build_pipeline();
    let words = ["wrold", "problme", "evrey", "mispelled", "helo", "itme"];

    c.bench_function("suggest_6_words", |b| {
        b.iter(|| {
            for word in &words {
                std::hint::black_box(pipeline.engine().suggestions(word));
            }
        });
    });
}

criterion_group!(benches, bench_scan, bench_process, bench_suggest);
criterion_main!(benches);
