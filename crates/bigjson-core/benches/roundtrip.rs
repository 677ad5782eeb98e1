//! Parse and stringify throughput over a representative document:
//! a few hundred rows mixing safe integers, oversized ids, floats,
//! strings, and shallow nesting.

use std::hint::black_box;

use bigjson_core::{parse, stringify};
use criterion::{criterion_group, criterion_main, Criterion};

fn sample_document() -> String {
    let mut rows = Vec::with_capacity(200);
    for i in 0..200 {
        rows.push(format!(
            concat!(
                r#"{{"id":{i},"chain_id":123456789012345678901234567890{i},"#,
                r#""score":{i}.5,"name":"user-{i}","tags":["alpha","beta","gamma"],"#,
                r#""active":{active},"meta":{{"note":"row {i}","weight":0.25}}}}"#
            ),
            i = i,
            active = i % 2 == 0
        ));
    }
    format!(r#"{{"rows":[{}]}}"#, rows.join(","))
}

fn bench_parse(c: &mut Criterion) {
    let text = sample_document();
    c.bench_function("parse", |b| {
        b.iter(|| parse(black_box(&text)).expect("parse failed"))
    });
}

fn bench_stringify(c: &mut Criterion) {
    let doc = parse(&sample_document()).expect("parse failed");
    c.bench_function("stringify", |b| {
        b.iter(|| stringify(black_box(&doc)).expect("stringify failed"))
    });
}

criterion_group!(benches, bench_parse, bench_stringify);
criterion_main!(benches);
