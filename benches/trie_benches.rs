use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use trie_speller::{Dictionary, SuggestionEngine};

fn random_words(count: usize, rng: &mut StdRng) -> Vec<String> {
    (0..count)
        .map(|_| {
            let len = rng.gen_range(2..12);
            (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
        })
        .collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let mut group = c.benchmark_group("insert");

    for &count in &[1_000usize, 10_000] {
        let words = random_words(count, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(count), &words, |b, words| {
            b.iter(|| Dictionary::from_words(black_box(words)).unwrap())
        });
    }

    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(11);
    let words = random_words(10_000, &mut rng);
    let probes = random_words(1_000, &mut rng);
    let dictionary = Dictionary::from_words(&words).unwrap();

    c.bench_function("contains_hits", |b| {
        b.iter(|| {
            for word in &words[..1_000] {
                black_box(dictionary.contains(black_box(word)));
            }
        })
    });

    c.bench_function("contains_misses", |b| {
        b.iter(|| {
            for word in &probes {
                black_box(dictionary.contains(black_box(word)));
            }
        })
    });
}

fn bench_suggest(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(13);
    let dictionary = Dictionary::from_words(random_words(10_000, &mut rng)).unwrap();
    let engine = SuggestionEngine::new(&dictionary);
    let mut group = c.benchmark_group("suggest");

    for &len in &[4usize, 10, 45] {
        let word = "q".repeat(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &word, |b, word| {
            b.iter(|| engine.suggest(black_box(word)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_contains, bench_suggest);
criterion_main!(benches);
