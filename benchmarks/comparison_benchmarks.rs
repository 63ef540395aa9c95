#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Comparison benchmarks: mescape vs a plain percent-encoding pass
use criterion::{Criterion, criterion_group, criterion_main};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_encode};
use std::hint::black_box;

/// Everything except cookie-safe bytes, i.e. what `escape_metadata` encodes
const NON_COOKIE_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'#')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b'-')
    .remove(b'.')
    .remove(b'/')
    .remove(b':')
    .remove(b'<')
    .remove(b'=')
    .remove(b'>')
    .remove(b'?')
    .remove(b'@')
    .remove(b'[')
    .remove(b']')
    .remove(b'^')
    .remove(b'_')
    .remove(b'`')
    .remove(b'{')
    .remove(b'|')
    .remove(b'}');

const INPUTS: &[(&str, &str)] = &[
    ("plain", "cluster-production_v1"),
    ("escaped", "user=alice; role=\"admin\"\tregion=us-east"),
    ("late_regex", "build.2024.10.15.release.candidate/final"),
    ("non_ascii", "caf\u{e9} na\u{ef}ve r\u{e9}sum\u{e9}"),
];

fn bench_escape_metadata_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("escape_metadata");

    for (name, input) in INPUTS {
        group.bench_function(format!("mescape_{name}"), |b| {
            b.iter(|| mescape::escape_metadata(black_box(input)));
        });

        group.bench_function(format!("percent_encoding_{name}"), |b| {
            b.iter(|| percent_encode(black_box(input).as_bytes(), NON_COOKIE_SAFE).to_string());
        });
    }

    group.finish();
}

fn bench_matchers_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("matchers");

    for (name, input) in INPUTS {
        group.bench_function(format!("header_{name}"), |b| {
            b.iter(|| mescape::header_matcher_for_metadata(black_box(input)));
        });

        group.bench_function(format!("cookie_{name}"), |b| {
            b.iter(|| mescape::cookie_matcher_for_metadata(black_box(input)));
        });

        group.bench_function(format!("query_{name}"), |b| {
            b.iter(|| mescape::query_matcher_for_metadata(black_box(input)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_escape_metadata_all, bench_matchers_all);

criterion_main!(benches);
