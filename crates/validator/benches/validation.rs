//! Benchmarks for validator evaluation.
//!
//! Measures:
//! - Accumulating evaluation of valid and invalid targets
//! - Fail-fast evaluation against accumulating evaluation
//! - Nested collection validation
//! - Argument combination

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use verdict_validator::prelude::*;

#[derive(Clone)]
struct Item {
    name: String,
    quantity: u32,
}

#[derive(Clone)]
struct Order {
    id: String,
    email: Option<String>,
    items: Vec<Item>,
}

fn item_validator() -> Validator<Item> {
    ValidatorBuilder::<Item>::new()
        .constraint("name", |i: &Item| i.name.as_str(), |c| c.not_blank().max_length(32))
        .constraint("quantity", |i: &Item| &i.quantity, |c| c.greater_than(0).less_than(1000))
        .build()
}

fn order_validator() -> Validator<Order> {
    ValidatorBuilder::<Order>::new()
        .constraint("id", |o: &Order| o.id.as_str(), |c| c.not_blank().min_length(4))
        .constraint_nullable("email", |o: &Order| o.email.as_deref(), |c| c.not_null().email())
        .for_each("items", |o: &Order| o.items.as_slice(), item_validator())
        .build()
}

fn order(items: usize, valid: bool) -> Order {
    Order {
        id: if valid { "ord-1".into() } else { " ".into() },
        email: valid.then(|| "buyer@example.com".to_string()),
        items: (0..items)
            .map(|i| Item {
                name: format!("item-{i}"),
                quantity: if valid { 1 } else { 0 },
            })
            .collect(),
    }
}

fn evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validator/evaluation");
    let validator = order_validator();

    for valid in [true, false] {
        let label = if valid { "valid" } else { "invalid" };
        let target = order(4, valid);
        group.bench_function(BenchmarkId::new("accumulate", label), |b| {
            b.iter(|| black_box(validator.violations(black_box(&target))));
        });
        group.bench_function(BenchmarkId::new("fail_fast", label), |b| {
            b.iter(|| black_box(validator.validate_fail_fast(black_box(target.clone()))));
        });
    }

    group.finish();
}

fn collection_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("validator/for_each");
    let validator = order_validator();

    for size in [1, 16, 256] {
        let target = order(size, false);
        group.bench_with_input(BenchmarkId::from_parameter(size), &target, |b, target| {
            b.iter(|| black_box(validator.violations(target)));
        });
    }

    group.finish();
}

fn combination(c: &mut Criterion) {
    let mut group = c.benchmark_group("arguments/combine");
    let positive = |name: &'static str| {
        ValidatorBuilder::<i32>::new()
            .constraint(name, |n: &i32| n, |c| c.greater_than(0))
            .build()
    };
    let sum = combine3(positive("x"), positive("y"), positive("z"), |x, y, z| x + y + z);

    group.bench_function("valid", |b| {
        b.iter(|| black_box(sum.validate(black_box(1), black_box(2), black_box(3))));
    });
    group.bench_function("invalid", |b| {
        b.iter(|| black_box(sum.validate(black_box(-1), black_box(2), black_box(-3))));
    });

    group.finish();
}

criterion_group!(benches, evaluation, collection_size, combination);
criterion_main!(benches);
