use criterion::{criterion_group, criterion_main, Criterion};
use parser::parse_expression;

pub fn criterion_benchmark(c: &mut Criterion) {
    let flat = (1..=500).map(|n| format!("{n}.5 * {n} % 7")).collect::<Vec<_>>().join(" + ");
    c.bench_function("long sum", |b| b.iter(|| parse_expression(&flat).unwrap()));

    let nested = format!("{}1{}", "(2 - ".repeat(200), ")".repeat(200));
    c.bench_function("deep nesting", |b| b.iter(|| parse_expression(&nested).unwrap()));

    c.bench_function("scan only", |b| b.iter(|| scanner::scan(&flat).unwrap()));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
