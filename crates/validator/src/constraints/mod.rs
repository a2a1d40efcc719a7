//! Built-in constraints.
//!
//! Every entry is an ordinary [`Constraint`] exposed as a method on
//! [`ConstraintsBuilder`](crate::foundation::ConstraintsBuilder). Absent
//! values pass every entry except [`not_null`] and [`is_null`].
//!
//! Violations report the name as `{0}`, the bound (if any) as `{1}` and the
//! offending value last.

mod clock;
mod collection;
mod comparable;
mod string;
mod temporal;

pub use clock::{Clock, FixedClock, SystemClock};

use crate::foundation::{Constraint, NullPolicy};

// ============================================================================
// MESSAGE KEYS
// ============================================================================

/// Key reported for a rejected null.
pub const NOT_NULL_KEY: &str = "object.notNull";
/// Default format reported for a rejected null.
pub const NOT_NULL_FORMAT: &str = "\"{0}\" must not be null";

pub const IS_NULL_KEY: &str = "object.isNull";
pub const NOT_EMPTY_KEY: &str = "charSequence.notEmpty";
pub const NOT_BLANK_KEY: &str = "charSequence.notBlank";
pub const PATTERN_KEY: &str = "charSequence.pattern";
pub const EMAIL_KEY: &str = "charSequence.email";
pub const SIZE_GREATER_THAN_OR_EQUAL_KEY: &str = "container.greaterThanOrEqual";
pub const SIZE_LESS_THAN_OR_EQUAL_KEY: &str = "container.lessThanOrEqual";
pub const GREATER_THAN_KEY: &str = "numeric.greaterThan";
pub const GREATER_THAN_OR_EQUAL_KEY: &str = "numeric.greaterThanOrEqual";
pub const LESS_THAN_KEY: &str = "numeric.lessThan";
pub const LESS_THAN_OR_EQUAL_KEY: &str = "numeric.lessThanOrEqual";
pub const PAST_KEY: &str = "temporal.past";
pub const PAST_OR_PRESENT_KEY: &str = "temporal.pastOrPresent";
pub const FUTURE_KEY: &str = "temporal.future";
pub const FUTURE_OR_PRESENT_KEY: &str = "temporal.futureOrPresent";
pub const BEFORE_KEY: &str = "temporal.before";
pub const AFTER_KEY: &str = "temporal.after";

const MIN_SIZE_FORMAT: &str =
    "The size of \"{0}\" must be greater than or equal to {1}. The given size is {2}";
const MAX_SIZE_FORMAT: &str =
    "The size of \"{0}\" must be less than or equal to {1}. The given size is {2}";

// ============================================================================
// NULL CONSTRAINTS
// ============================================================================

/// Rejects an absent value and stops the chain when it does.
#[must_use]
pub fn not_null<V: ?Sized + 'static>() -> Constraint<V> {
    Constraint::new(|_: &V| true, NOT_NULL_KEY, NOT_NULL_FORMAT)
        .with_null_policy(NullPolicy::RejectNull)
}

/// Requires the value to be absent.
#[must_use]
pub fn is_null<V: ?Sized + 'static>() -> Constraint<V> {
    Constraint::new(|_: &V| false, IS_NULL_KEY, "\"{0}\" must be null")
}

/// Size lower bound shared by strings and slices.
fn min_size<V: ?Sized + 'static>(
    min: usize,
    size: impl Fn(&V) -> usize + Send + Sync + 'static,
) -> Constraint<V> {
    let size = std::sync::Arc::new(size);
    let for_args = std::sync::Arc::clone(&size);
    Constraint::new(move |v: &V| size(v) >= min, SIZE_GREATER_THAN_OR_EQUAL_KEY, MIN_SIZE_FORMAT)
        .with_args(move |v: &V| vec![min.into(), for_args(v).into()])
}

/// Size upper bound shared by strings and slices.
fn max_size<V: ?Sized + 'static>(
    max: usize,
    size: impl Fn(&V) -> usize + Send + Sync + 'static,
) -> Constraint<V> {
    let size = std::sync::Arc::new(size);
    let for_args = std::sync::Arc::clone(&size);
    Constraint::new(move |v: &V| size(v) <= max, SIZE_LESS_THAN_OR_EQUAL_KEY, MAX_SIZE_FORMAT)
        .with_args(move |v: &V| vec![max.into(), for_args(v).into()])
}
