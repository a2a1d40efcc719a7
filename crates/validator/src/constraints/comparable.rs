//! Ordering constraints for numbers and other comparable values.

use super::{GREATER_THAN_KEY, GREATER_THAN_OR_EQUAL_KEY, LESS_THAN_KEY, LESS_THAN_OR_EQUAL_KEY};
use crate::foundation::{Constraint, ConstraintsBuilder};
use crate::message::MessageArg;
use std::cmp::Ordering;

/// Builds a constraint comparing the value against `bound`.
fn compare<V>(
    bound: V,
    accepts: fn(Ordering) -> bool,
    key: &'static str,
    format: &'static str,
) -> Constraint<V>
where
    V: PartialOrd + Clone + Into<MessageArg> + Send + Sync + 'static,
{
    let shown = bound.clone();
    Constraint::new(
        move |value: &V| value.partial_cmp(&bound).is_some_and(accepts),
        key,
        format,
    )
    .with_args(move |value: &V| vec![shown.clone().into(), value.clone().into()])
}

impl<V> ConstraintsBuilder<V>
where
    V: PartialOrd + Clone + Into<MessageArg> + Send + Sync + 'static,
{
    /// Requires `value > min`.
    #[must_use = "builder methods must be chained or built"]
    pub fn greater_than(self, min: V) -> Self {
        self.constraint(compare(
            min,
            Ordering::is_gt,
            GREATER_THAN_KEY,
            "\"{0}\" must be greater than {1}",
        ))
    }

    /// Requires `value >= min`.
    #[must_use = "builder methods must be chained or built"]
    pub fn greater_than_or_equal(self, min: V) -> Self {
        self.constraint(compare(
            min,
            Ordering::is_ge,
            GREATER_THAN_OR_EQUAL_KEY,
            "\"{0}\" must be greater than or equal to {1}",
        ))
    }

    /// Requires `value < max`.
    #[must_use = "builder methods must be chained or built"]
    pub fn less_than(self, max: V) -> Self {
        self.constraint(compare(
            max,
            Ordering::is_lt,
            LESS_THAN_KEY,
            "\"{0}\" must be less than {1}",
        ))
    }

    /// Requires `value <= max`.
    #[must_use = "builder methods must be chained or built"]
    pub fn less_than_or_equal(self, max: V) -> Self {
        self.constraint(compare(
            max,
            Ordering::is_le,
            LESS_THAN_OR_EQUAL_KEY,
            "\"{0}\" must be less than or equal to {1}",
        ))
    }
}
