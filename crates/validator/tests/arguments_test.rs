//! Argument validators: combine, lazy, and_then, compose, indexed.

use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use verdict_validator::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Range {
    from: i32,
    to: i32,
}

fn positive(name: &'static str) -> Validator<i32> {
    ValidatorBuilder::<i32>::new()
        .constraint(name, |n: &i32| n, |c| c.greater_than(0))
        .build()
}

fn range_validator() -> DefaultArguments2Validator<i32, i32, Range> {
    type Args = Arguments2<i32, i32>;
    ValidatorBuilder::<Args>::new()
        .constraint("from", |a: &Args| &a.arg1, |c| c.greater_than_or_equal(0))
        .constraint("to", |a: &Args| &a.arg2, |c| c.less_than_or_equal(100))
        .build()
        .apply(|from, to| Range { from, to })
}

fn names<X>(result: &Validated<X>) -> Vec<&str> {
    result.errors().iter().map(ConstraintViolation::name).collect()
}

#[test]
fn combine_accumulates_in_argument_order() {
    let sum = combine3(positive("x"), positive("y"), positive("z"), |x, y, z| x + y + z);

    assert_eq!(sum.validate(1, 2, 3), Validated::Valid(6));
    assert_eq!(names(&sum.validate(0, 2, -3)), vec!["x", "z"]);
}

#[test]
fn combine_accepts_mixed_validator_kinds() {
    let range = range_validator();
    let label = ValidatorBuilder::<String>::new()
        .constraint("label", String::as_str, |c| c.not_blank())
        .build();

    let labelled = combine2(
        range.compose(|(from, to): (i32, i32)| (from, to)),
        label.applicative(),
        |range, label| format!("{label}: {}..{}", range.from, range.to),
    );

    assert_eq!(
        labelled.validate((1, 5), "span".to_string()),
        Validated::Valid("span: 1..5".to_string())
    );
    assert_eq!(names(&labelled.validate((-1, 500), " ".into())), vec!["from", "to", "label"]);
}

#[test]
fn lazy_defers_the_mapper_until_forced() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let lazy = range_validator()
        .and_then(move |range| {
            counter.fetch_add(1, Ordering::SeqCst);
            range
        })
        .lazy();

    let supplier = lazy.validate(1, 2).ok().unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    assert_eq!(supplier.get(), Range { from: 1, to: 2 });
    assert_eq!(supplier.get(), Range { from: 1, to: 2 });
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    let memoized = supplier.memoized();
    assert_eq!(memoized.get(), &Range { from: 1, to: 2 });
    assert_eq!(memoized.get(), &Range { from: 1, to: 2 });
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[test]
fn combined_validators_can_be_made_lazy() {
    let span = combine2(positive("from"), positive("to"), |from, to| Range { from, to }).lazy();

    let supplier = span.validate(1, 4).ok().unwrap();
    assert_eq!(supplier.get(), Range { from: 1, to: 4 });
    assert_eq!(supplier.memoized().get(), &Range { from: 1, to: 4 });

    assert_eq!(names(&span.validate(0, -4)), vec!["from", "to"]);
}

#[test]
fn composed_and_indexed_validators_can_be_made_lazy() {
    let lazy = positive("n").compose(|s: String| s.chars().count() as i32).indexed(2).lazy();

    assert_eq!(lazy.validate("abc".to_string()).ok().map(|supplier| supplier.get()), Some(3));
    assert_eq!(names(&lazy.validate(String::new())), vec!["[2].n"]);
}

#[test]
fn lazy_never_runs_the_mapper_on_failure() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let lazy = range_validator()
        .and_then(move |range| {
            counter.fetch_add(1, Ordering::SeqCst);
            range
        })
        .lazy();

    assert_eq!(names(&lazy.validate(-1, 2)), vec!["from"]);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn and_then_composes() {
    let width = range_validator().and_then(|r| r.to - r.from);
    let doubled = Arguments2Validator::and_then(width.clone(), |w: i32| w * 2);

    assert_eq!(width.validate(2, 10), Validated::Valid(8));
    assert_eq!(doubled.validate(2, 10), Validated::Valid(16));
    assert_eq!(names(&doubled.validate(2, 101)), vec!["to"]);
}

#[test]
fn indexed_prefixes_names() {
    let indexed = range_validator().indexed(3);
    let result = indexed.validate(-1, 101);
    assert_eq!(names(&result), vec!["[3].from", "[3].to"]);
    assert_eq!(result.errors()[0].args()[0].as_text(), Some("[3].from"));
    assert_eq!(
        result.errors()[0].message(),
        "\"[3].from\" must be greater than or equal to 0"
    );
}

#[test]
fn validated_returns_value_or_error() {
    assert_eq!(range_validator().validated(0, 1).unwrap(), Range { from: 0, to: 1 });
    let err = range_validator().validated(-5, 1).unwrap_err();
    assert_eq!(err.violations()[0].name(), "from");
}

#[test]
fn validate_with_uses_the_requested_group() {
    type Args = Arguments1<i32>;
    let update = ConstraintGroup::of("update");
    let id = ValidatorBuilder::<Args>::new()
        .on_group(update.clone(), |b| {
            b.constraint("id", |a: &Args| &a.arg1, |c| c.greater_than(0))
        })
        .build()
        .apply(|id| id);

    assert!(id.validate(0).is_valid());
    assert!(!id.validate_with(0, &Locale::ROOT, &update).is_valid());
}

#[test]
fn holders_convert_to_tuples() {
    let args = Arguments4::new(1, "two", 3.0, '4');
    assert_eq!(args.into_tuple(), (1, "two", 3.0, '4'));
    assert_eq!(Arguments1::new(7).into_tuple(), (7,));
}

#[test]
fn sixteen_arguments() {
    type Args16 = Arguments16<
        u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
    >;
    let all = ValidatorBuilder::<Args16>::new()
        .constraint("p16", |a: &Args16| &a.arg16, |c| c.less_than(10))
        .build()
        .apply(|a1, a2, a3, a4, a5, a6, a7, a8, a9, a10, a11, a12, a13, a14, a15, a16| {
            [a1, a2, a3, a4, a5, a6, a7, a8, a9, a10, a11, a12, a13, a14, a15, a16]
                .iter()
                .map(|&b| u32::from(b))
                .sum::<u32>()
        });

    assert_eq!(
        all.validate(1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1),
        Validated::Valid(16)
    );
    assert!(!all.validate(1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 10).is_valid());
}
