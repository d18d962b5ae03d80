// Criterion benchmarks for wordkit-puzzles.
//
// Uses the word list named by WORDKIT_WORDS when set, otherwise the small
// test fixture. Run:
//   cargo bench -p wordkit-puzzles
//   WORDKIT_WORDS=/path/to/words_sorted.txt cargo bench -p wordkit-puzzles

use std::hint::black_box;
use std::path::PathBuf;

use criterion::{Criterion, criterion_group, criterion_main};
use wordkit_core::{LoadOptions, SortPolicy, WordList};
use wordkit_puzzles::anagram::all_anagrams;
use wordkit_puzzles::chain::{ChainOptions, word_chain};
use wordkit_puzzles::classify::{rotodromes, semordnilap};
use wordkit_puzzles::elimination::EliminationTable;
use wordkit_puzzles::rotate::rotate_consonants;
use wordkit_puzzles::search::{SuffixIndex, with_prefix};
use wordkit_puzzles::window::longest_substring_with_k_distinct;

// ---------------------------------------------------------------------------
// Word list discovery
// ---------------------------------------------------------------------------

fn load_words() -> WordList {
    let path = std::env::var("WORDKIT_WORDS")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/words_small.txt")
        });
    let options = LoadOptions {
        sort: SortPolicy::Sort,
        lowercase: false,
    };
    WordList::load(&path, options).expect("failed to load word list")
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_search(c: &mut Criterion) {
    let words = load_words();
    let suffixes = SuffixIndex::new(&words);

    c.bench_function("with_prefix", |b| {
        b.iter(|| {
            for prefix in ["a", "li", "st", "propo"] {
                black_box(with_prefix(&words, black_box(prefix)));
            }
        });
    });

    c.bench_function("with_suffix", |b| {
        b.iter(|| black_box(suffixes.with_suffix(black_box("al"))));
    });
}

fn bench_classifiers(c: &mut Criterion) {
    let words = load_words();
    c.bench_function("semordnilap", |b| {
        b.iter(|| black_box(semordnilap(words.as_slice())));
    });
    c.bench_function("rotodromes", |b| {
        b.iter(|| black_box(rotodromes(words.as_slice())));
    });
}

fn bench_tables(c: &mut Criterion) {
    let words = load_words();
    c.bench_function("elimination_table", |b| {
        b.iter(|| black_box(EliminationTable::build(words.as_slice())));
    });
    c.bench_function("all_anagrams", |b| {
        b.iter(|| {
            black_box(all_anagrams(
                words.iter().filter(|w| w.bytes().all(|c| c.is_ascii_lowercase())),
            ))
        });
    });
}

fn bench_text(c: &mut Criterion) {
    let words = load_words();
    let text = "ceterumautemcenseocarthaginemessedelendam".repeat(50);
    let options = ChainOptions {
        overlap: 1,
        target_len: 5,
    };

    c.bench_function("longest_substring_k3", |b| {
        b.iter(|| black_box(longest_substring_with_k_distinct(black_box(&text), 3)));
    });
    c.bench_function("rotate_consonants", |b| {
        b.iter(|| black_box(rotate_consonants(black_box(&text), 7)));
    });
    c.bench_function("word_chain", |b| {
        b.iter(|| black_box(word_chain(&words, &["grama"], options)));
    });
}

criterion_group!(benches, bench_search, bench_classifiers, bench_tables, bench_text);
criterion_main!(benches);
