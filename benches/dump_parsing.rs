//! Performance benchmarks for dump parsing
//!
//! These benchmarks measure:
//! - The classifier + accumulator fold over a synthetic dump
//! - The full parse-and-compose path a display panel exercises
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use repodump_core::{
    codec::parse_dump,
    compose::compose,
    properties::EntityKind,
};
use std::fmt::Write;

// Mix of scalar, typed, and repeating attributes across the four object
// buckets, with continuation lines for every repeating attribute.
fn synthetic_dump(attributes: usize, repeating_width: usize) -> String {
    let mut dump = String::from("---\nSYNTHETIC DUMP\n---\n");
    for i in 0..attributes {
        let prefix = match i % 4 {
            0 => "r_",
            1 => "i_",
            2 => "a_",
            _ => "",
        };
        if i % 8 == 0 {
            writeln!(dump, "{prefix}attr_{i}[0] : value_{i}_0").unwrap();
            for index in 1..repeating_width {
                writeln!(dump, "[{index}] : value_{i}_{index}").unwrap();
            }
        } else {
            writeln!(dump, "{prefix}attr_{i} [string] : value_{i}").unwrap();
        }
    }
    dump
}

fn bench_parse(c: &mut Criterion) {
    let dump = synthetic_dump(256, 8);
    c.bench_function("parse_dump_256_attrs", |b| {
        b.iter(|| parse_dump(EntityKind::Object, black_box(&dump)))
    });
}

fn bench_parse_and_compose(c: &mut Criterion) {
    let dump = synthetic_dump(256, 8);
    c.bench_function("parse_and_compose_256_attrs", |b| {
        b.iter(|| {
            let records = parse_dump(EntityKind::Object, black_box(&dump));
            compose(EntityKind::Object, &records)
        })
    });
}

criterion_group!(benches, bench_parse, bench_parse_and_compose);
criterion_main!(benches);
