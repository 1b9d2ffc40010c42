use criterion::{BenchmarkId, black_box, criterion_group, criterion_main, Criterion};

use scrabbler::*;
use scrabbler::test::*;

pub fn alphagram_benchmark(c: &mut Criterion) {
    c.bench_function("alphagram_word_6_chars", |b| b.iter(|| {
        black_box("houses").alphagram()
    }));

    c.bench_function("alphagram_word_12_chars", |b| b.iter(|| {
        black_box("benchmarking").alphagram()
    }));

    c.bench_function("letters_sentence_44_chars", |b| b.iter(|| {
        black_box("the lazy dog jumped over the quick brown fox").letters()
    }));
}

pub fn enumerate_benchmark(c: &mut Criterion) {
    for letters in ["scrabble", "abcdefghijkl", "bookkeepers"].iter() {
        c.bench_with_input(BenchmarkId::new("enumerate_subsets", letters), letters, |b, letters| b.iter(|| {
            enumerate_subsets(letters, MAX_LETTERS)
        }));
    }
}

pub fn solve_benchmark(c: &mut Criterion) {
    let index = get_test_dictionary();
    c.bench_with_input(BenchmarkId::new("solve_line", "stressed"), &index, |b, index| b.iter(|| {
        solve_line(black_box("stressed"), index).map(|result| result.count)
    }));
}

criterion_group!(benches, alphagram_benchmark, enumerate_benchmark, solve_benchmark);
criterion_main!(benches);
