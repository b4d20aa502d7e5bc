#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Query benchmarks: raw point operations vs a full parse vs the url crate
use criterion::{Criterion, criterion_group, criterion_main};
use rawquery::{QueryParams, raw_query};
use std::hint::black_box;

// Rust url crate
use url::form_urlencoded;

/// A search-engine style query: a few short params and one long opaque one
const LONG_QUERY: &str = "q=a+pretty+long+query\
    &some-hash=EgZjaHJvbWUyBggAEEUYOTIGCAEQABhAMgYIAhAAGEAyBggDEAAYQDIGCAQQABhAMgYIBRAAGEAyBggGAYQDIGCAcQABhAMgYICBAAGEDSAQgxMjQxajBqMagCArACAQ\
    &first=11&sourceid=chrome&ie=UTF-8&oq=a+pretty+long+query&gs_lcrp=EgZjaHJvbWU\
    &client=ubuntu&channel=fs&num=20&start=40&brightness=90%25&lang=en";

/// Build a query with `count` distinct keys
fn wide_query(count: usize) -> String {
    let mut params = QueryParams::new();
    for i in 0..count {
        params.add(&format!("key{i}"), [format!("value {i}")]);
    }
    params.encode()
}

fn bench_get_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_single");

    group.bench_function("raw_query", |b| {
        b.iter(|| raw_query::get(black_box(LONG_QUERY), black_box("lang")).unwrap());
    });

    group.bench_function("query_params", |b| {
        b.iter(|| {
            let (params, _) = QueryParams::parse(black_box(LONG_QUERY));
            black_box(params.get("lang").map(str::len));
        });
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| {
            form_urlencoded::parse(black_box(LONG_QUERY).as_bytes())
                .find(|(key, _)| key == "lang")
                .map(|(_, value)| value.into_owned())
        });
    });

    group.finish();
}

fn bench_get_wide(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_wide");
    let query = wide_query(500);

    group.bench_function("raw_query_first", |b| {
        b.iter(|| raw_query::get(black_box(&query), black_box("key0")).unwrap());
    });

    group.bench_function("raw_query_last", |b| {
        b.iter(|| raw_query::get(black_box(&query), black_box("key499")).unwrap());
    });

    group.bench_function("raw_query_has_missing", |b| {
        b.iter(|| raw_query::has(black_box(&query), black_box("missing")));
    });

    group.bench_function("query_params", |b| {
        b.iter(|| {
            let (params, _) = QueryParams::parse(black_box(&query));
            black_box(params.has("key499"));
        });
    });

    group.finish();
}

fn bench_edit(c: &mut Criterion) {
    let mut group = c.benchmark_group("edit");

    group.bench_function("raw_query_set_delete", |b| {
        b.iter(|| {
            let mut query = black_box(LONG_QUERY).to_string();
            raw_query::set(&mut query, "start", "60");
            raw_query::delete(&mut query, "some-hash");
            query
        });
    });

    group.bench_function("query_params_set_delete", |b| {
        b.iter(|| {
            let (mut params, _) = QueryParams::parse(black_box(LONG_QUERY));
            params.set("start", "60");
            params.delete("some-hash");
            params.encode()
        });
    });

    group.bench_function("url_crate_set_delete", |b| {
        b.iter(|| {
            let pairs: Vec<_> = form_urlencoded::parse(black_box(LONG_QUERY).as_bytes())
                .filter(|(key, _)| key != "some-hash")
                .map(|(key, value)| {
                    if key == "start" {
                        (key, "60".into())
                    } else {
                        (key, value)
                    }
                })
                .collect();
            form_urlencoded::Serializer::new(String::new())
                .extend_pairs(pairs)
                .finish()
        });
    });

    group.finish();
}

fn bench_parse_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_encode");
    let query = wide_query(100);

    group.bench_function("query_params", |b| {
        b.iter(|| QueryParams::parse(black_box(&query)).0.encode());
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| {
            form_urlencoded::Serializer::new(String::new())
                .extend_pairs(form_urlencoded::parse(black_box(&query).as_bytes()))
                .finish()
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_get_single,
    bench_get_wide,
    bench_edit,
    bench_parse_encode
);

criterion_main!(benches);
