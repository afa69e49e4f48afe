use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use localematch::distance::levenshtein;
use localematch::{Matcher, MatcherOptions, Strength};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Generate `n` candidate words: "item_0", "item_1", ...
fn generate_items(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("item_{i}")).collect()
}

/// A sentence of roughly `len` bytes with accents, punctuation and double
/// spaces every few words.
fn generate_sentence(len: usize) -> String {
    let words = ["Caf\u{00e9},", "na\u{00ef}ve ", "r\u{00e9}sum\u{00e9}!", "plain", "text."];
    let mut out = String::with_capacity(len + 16);
    let mut i = 0;
    while out.len() < len {
        out.push_str(words[i % words.len()]);
        out.push_str(if i % 3 == 0 { "  " } else { " " });
        i += 1;
    }
    out
}

fn en() -> Matcher {
    Matcher::new("en_US.UTF-8").unwrap()
}

// ---------------------------------------------------------------------------
// 1. edit_distance micro-benchmark
// ---------------------------------------------------------------------------

fn bench_edit_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("edit_distance");
    let matcher = en();

    // Identical ASCII (collation fast path on every cell)
    group.bench_function("ascii_equal", |b| {
        b.iter(|| matcher.edit_distance(black_box("levenshtein"), black_box("levenshtein")));
    });

    // Case and punctuation differences only
    group.bench_function("ascii_folded", |b| {
        b.iter(|| matcher.edit_distance(black_box("Hello, World!"), black_box("hello world")));
    });

    // Accented text (full collation key path)
    group.bench_function("accented", |b| {
        b.iter(|| {
            matcher.edit_distance(
                black_box("r\u{00e9}sum\u{00e9} na\u{00ef}ve"),
                black_box("resume naive"),
            )
        });
    });

    // Invalid UTF-8 (byte fallback)
    group.bench_function("fallback", |b| {
        b.iter(|| matcher.edit_distance(black_box(b"caf\xe9 au lait"), black_box("cafe au lait")));
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// 2. Scaling with input length
// ---------------------------------------------------------------------------

fn bench_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("length");
    let matcher = en();

    for len in [16, 128, 1024] {
        let referent = generate_sentence(len);
        let sample = referent.to_uppercase();
        group.bench_with_input(
            BenchmarkId::from_parameter(len),
            &(referent, sample),
            |b, (referent, sample)| {
                b.iter(|| matcher.edit_distance(black_box(referent), black_box(sample)));
            },
        );
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// 3. Collation strength overhead
// ---------------------------------------------------------------------------

fn bench_strength(c: &mut Criterion) {
    let mut group = c.benchmark_group("strength");
    let referent = generate_sentence(256);
    let sample = generate_sentence(240);

    for strength in [Strength::Primary, Strength::Secondary, Strength::Tertiary] {
        let matcher = Matcher::with_options("en_US.UTF-8", MatcherOptions { strength }).unwrap();
        group.bench_function(format!("{strength:?}"), |b| {
            b.iter(|| matcher.edit_distance(black_box(&referent), black_box(&sample)));
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// 4. Raw engine
// ---------------------------------------------------------------------------

fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");
    let a = generate_sentence(1024).into_bytes();
    let b_bytes = generate_sentence(1000).into_bytes();

    group.bench_function("bytes_1k", |b| {
        b.iter(|| levenshtein(black_box(&a[..]), black_box(&b_bytes[..]), |x, y| x == y));
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// 5. Ranking a candidate list
// ---------------------------------------------------------------------------

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");
    let matcher = en();

    for size in [100, 10_000] {
        let items = generate_items(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            b.iter(|| matcher.rank(black_box("item_50"), black_box(items.as_slice()), 0.5));
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Criterion harness
// ---------------------------------------------------------------------------

criterion_group!(
    benches,
    bench_edit_distance,
    bench_length,
    bench_strength,
    bench_engine,
    bench_rank,
);
criterion_main!(benches);
