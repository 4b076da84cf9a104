use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rowscope::*;

fn make_records(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            Value::Object(vec![
                ("id".to_string(), Value::Int(i as i64)),
                ("name".to_string(), Value::from(format!("user{}", i))),
                ("score".to_string(), Value::Float(i as f64 / 3.0)),
                ("active".to_string(), Value::Bool(i % 2 == 0)),
            ])
        })
        .collect()
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for expr in ["score >= 120", "name = user42", "no operator here at all"].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(expr), expr, |b, expr| {
            b.iter(|| parse(black_box(expr)));
        });
    }
    group.finish();
}

fn bench_structured_filter_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("structured_filter_scan");

    for size in [100, 1000, 10000].iter() {
        let mut store = RecordStore::new();
        store.load(make_records(*size));
        store.set_filter("score >= 100");

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| store.filtered_count());
        });
    }
    group.finish();
}

fn bench_substring_filter_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("substring_filter_scan");

    for size in [100, 1000, 10000].iter() {
        let mut store = RecordStore::new();
        store.load(make_records(*size));
        store.set_filter("user99");

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| store.filtered_count());
        });
    }
    group.finish();
}

fn bench_page_slice(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_slice");

    for size in [1000, 10000, 100000].iter() {
        let mut store = RecordStore::new();
        store.load(make_records(*size));
        store.set_page(size / DEFAULT_PAGE_SIZE / 2);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| store.page_view().records.len());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_parse,
    bench_structured_filter_scan,
    bench_substring_filter_scan,
    bench_page_slice
);
criterion_main!(benches);
