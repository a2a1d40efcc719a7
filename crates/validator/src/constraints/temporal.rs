//! Constraints on instants.
//!
//! `past`, `future` and their `_or_present` variants read the current
//! instant from a [`Clock`] at evaluation time, so one validator can be
//! reused across calls.

use super::{
    AFTER_KEY, BEFORE_KEY, Clock, FUTURE_KEY, FUTURE_OR_PRESENT_KEY, PAST_KEY,
    PAST_OR_PRESENT_KEY, SystemClock,
};
use crate::foundation::{Constraint, ConstraintsBuilder};
use chrono::{DateTime, Utc};
use std::sync::Arc;

type Instant = DateTime<Utc>;

fn relative_to_now(
    clock: Arc<dyn Clock>,
    accepts: fn(&Instant, &Instant) -> bool,
    key: &'static str,
    format: &'static str,
) -> Constraint<Instant> {
    Constraint::new(move |value: &Instant| accepts(value, &clock.now()), key, format)
        .with_args(|value: &Instant| vec![(*value).into()])
}

fn relative_to(
    bound: Instant,
    accepts: fn(&Instant, &Instant) -> bool,
    key: &'static str,
    format: &'static str,
) -> Constraint<Instant> {
    Constraint::new(move |value: &Instant| accepts(value, &bound), key, format)
        .with_args(move |value: &Instant| vec![bound.into(), (*value).into()])
}

impl ConstraintsBuilder<Instant> {
    /// Requires an instant strictly before now.
    #[must_use = "builder methods must be chained or built"]
    pub fn past(self) -> Self {
        self.past_on(Arc::new(SystemClock))
    }

    /// [`past`](Self::past) against the given clock.
    #[must_use = "builder methods must be chained or built"]
    pub fn past_on(self, clock: Arc<dyn Clock>) -> Self {
        self.constraint(relative_to_now(
            clock,
            <Instant as PartialOrd>::lt,
            PAST_KEY,
            "\"{0}\" must be a past date",
        ))
    }

    /// Requires an instant not after now.
    #[must_use = "builder methods must be chained or built"]
    pub fn past_or_present(self) -> Self {
        self.past_or_present_on(Arc::new(SystemClock))
    }

    /// [`past_or_present`](Self::past_or_present) against the given clock.
    #[must_use = "builder methods must be chained or built"]
    pub fn past_or_present_on(self, clock: Arc<dyn Clock>) -> Self {
        self.constraint(relative_to_now(
            clock,
            <Instant as PartialOrd>::le,
            PAST_OR_PRESENT_KEY,
            "\"{0}\" must be a date in the past or in the present",
        ))
    }

    /// Requires an instant strictly after now.
    #[must_use = "builder methods must be chained or built"]
    pub fn future(self) -> Self {
        self.future_on(Arc::new(SystemClock))
    }

    /// [`future`](Self::future) against the given clock.
    #[must_use = "builder methods must be chained or built"]
    pub fn future_on(self, clock: Arc<dyn Clock>) -> Self {
        self.constraint(relative_to_now(
            clock,
            <Instant as PartialOrd>::gt,
            FUTURE_KEY,
            "\"{0}\" must be a future date",
        ))
    }

    /// Requires an instant not before now.
    #[must_use = "builder methods must be chained or built"]
    pub fn future_or_present(self) -> Self {
        self.future_or_present_on(Arc::new(SystemClock))
    }

    /// [`future_or_present`](Self::future_or_present) against the given clock.
    #[must_use = "builder methods must be chained or built"]
    pub fn future_or_present_on(self, clock: Arc<dyn Clock>) -> Self {
        self.constraint(relative_to_now(
            clock,
            <Instant as PartialOrd>::ge,
            FUTURE_OR_PRESENT_KEY,
            "\"{0}\" must be a date in the present or in the future",
        ))
    }

    /// Requires an instant strictly before `bound`.
    #[must_use = "builder methods must be chained or built"]
    pub fn before(self, bound: Instant) -> Self {
        self.constraint(relative_to(
            bound,
            <Instant as PartialOrd>::lt,
            BEFORE_KEY,
            "\"{0}\" has to be before {1}",
        ))
    }

    /// Requires an instant strictly after `bound`.
    #[must_use = "builder methods must be chained or built"]
    pub fn after(self, bound: Instant) -> Self {
        self.constraint(relative_to(
            bound,
            <Instant as PartialOrd>::gt,
            AFTER_KEY,
            "\"{0}\" has to be after {1}",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::FixedClock;
    use chrono::TimeZone;
    use rstest::rstest;

    fn at(secs: i64) -> Instant {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn results(builder: ConstraintsBuilder<Instant>, value: Instant) -> Vec<bool> {
        builder.build().iter().map(|c| c.test(&value)).collect()
    }

    #[rstest]
    #[case(99, vec![true, true, false, false])]
    #[case(100, vec![false, true, false, true])]
    #[case(101, vec![false, false, true, true])]
    fn relative_to_fixed_now(#[case] secs: i64, #[case] expected: Vec<bool>) {
        let clock: Arc<dyn Clock> = Arc::new(FixedClock(at(100)));
        let builder = ConstraintsBuilder::<Instant>::new()
            .past_on(Arc::clone(&clock))
            .past_or_present_on(Arc::clone(&clock))
            .future_on(Arc::clone(&clock))
            .future_or_present_on(clock);
        assert_eq!(results(builder, at(secs)), expected);
    }

    #[test]
    fn before_and_after_are_strict() {
        let builder = ConstraintsBuilder::<Instant>::new().before(at(10)).after(at(5));
        assert_eq!(results(builder, at(7)), vec![true, true]);
        let builder = ConstraintsBuilder::<Instant>::new().before(at(10)).after(at(5));
        assert_eq!(results(builder, at(10)), vec![false, true]);
    }

    #[test]
    fn system_clock_past() {
        let builder = ConstraintsBuilder::<Instant>::new().past();
        assert_eq!(results(builder, at(1)), vec![true]);
    }
}
