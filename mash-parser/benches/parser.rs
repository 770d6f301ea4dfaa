use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use mash_parser::parser::Parser;

fn program(source: &str) {
    let source = source.into();
    let _ast = Parser::new(&source).parse_program();
    assert!(source.has_no_errors());
}

fn long_expr(c: &mut Criterion) {
    let mut group = c.benchmark_group("long-expr");

    let mut source = r#""a""#.to_string();
    for _i in 0..1000 {
        source.push_str(r#" + "a""#);
    }
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("long-expr", |b| b.iter(|| program(&source)));
}

fn stress_precedence(c: &mut Criterion) {
    let mut group = c.benchmark_group("stress-precedence");

    let mut source = "a".to_string();
    for _i in 0..200 {
        source.push_str(" == b + f(c) + d");
    }
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("stress-precedence", |b| b.iter(|| program(&source)));
}

fn nested_functions(c: &mut Criterion) {
    let mut group = c.benchmark_group("nested-functions");

    let mut source = String::new();
    for i in 0..100 {
        source.push_str(&format!("var f = fun(x) {{ if (x == \"{}\") {{ ", i % 2));
    }
    source.push('x');
    for _i in 0..100 {
        source.push_str(" } else { f(x) } };");
    }
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("nested-functions", |b| b.iter(|| program(&source)));
}

criterion_group!(benches, long_expr, stress_precedence, nested_functions);
criterion_main!(benches);
