//! Entries that delegate to another validator.
//!
//! - [`NestedEntry`] validates one projected sub-object
//! - [`ForEachEntry`] validates every element of a projected slice
//! - [`ConditionalEntry`] runs a validator of the same type when a
//!   condition holds
//!
//! Names produced by the delegate are prefixed with the entry's name, so a
//! failing `zip` below `address` is reported as `address.zip` and a failing
//! `name` of the second element of `items` as `items[1].name`.

use crate::foundation::{
    ConstraintCondition, ConstraintGroup, ConstraintViolations, Evaluate, Projector,
    ValidationContext,
};
use crate::validator::Validator;
use std::sync::Arc;

/// What a nested entry does with an absent sub-value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Absent {
    /// Report the not-null violation under the entry's name.
    Reject,
    /// Skip the entry.
    Skip,
}

pub(crate) type SliceProjector<T, E> =
    Arc<dyn for<'a> Fn(&'a T) -> Option<&'a [E]> + Send + Sync>;

// ============================================================================
// NESTED
// ============================================================================

/// Validates the sub-object at `name`.
pub(crate) struct NestedEntry<T, S> {
    name: String,
    projector: Projector<T, S>,
    validator: Validator<S>,
    absent: Absent,
    group: Option<ConstraintGroup>,
}

impl<T, S> NestedEntry<T, S> {
    pub(crate) fn new(
        name: String,
        projector: Projector<T, S>,
        validator: Validator<S>,
        absent: Absent,
        group: Option<ConstraintGroup>,
    ) -> Self {
        Self {
            name,
            projector,
            validator,
            absent,
            group,
        }
    }
}

impl<T: 'static, S: 'static> Evaluate<T> for NestedEntry<T, S> {
    fn evaluate(&self, target: &T, ctx: &ValidationContext<'_>, out: &mut ConstraintViolations) {
        if !ctx.group().admits(self.group.as_ref()) {
            return;
        }
        match (self.projector)(target) {
            Some(value) => self.validator.evaluate_in(value, &ctx.child(&self.name), out),
            None if self.absent == Absent::Reject => out.add(ctx.not_null_violation(&self.name)),
            None => {}
        }
    }
}

// ============================================================================
// FOR EACH
// ============================================================================

/// Validates every element of the slice at `name`.
pub(crate) struct ForEachEntry<T, E> {
    name: String,
    projector: SliceProjector<T, E>,
    validator: Validator<E>,
    absent: Absent,
    group: Option<ConstraintGroup>,
}

impl<T, E> ForEachEntry<T, E> {
    pub(crate) fn new(
        name: String,
        projector: SliceProjector<T, E>,
        validator: Validator<E>,
        absent: Absent,
        group: Option<ConstraintGroup>,
    ) -> Self {
        Self {
            name,
            projector,
            validator,
            absent,
            group,
        }
    }
}

impl<T: 'static, E: 'static> Evaluate<T> for ForEachEntry<T, E> {
    fn evaluate(&self, target: &T, ctx: &ValidationContext<'_>, out: &mut ConstraintViolations) {
        if !ctx.group().admits(self.group.as_ref()) {
            return;
        }
        let Some(elements) = (self.projector)(target) else {
            if self.absent == Absent::Reject {
                out.add(ctx.not_null_violation(&self.name));
            }
            return;
        };
        for (index, element) in elements.iter().enumerate() {
            let segment = format!("{}[{index}]", self.name);
            self.validator.evaluate_in(element, &ctx.child(&segment), out);
            if ctx.is_fail_fast() && !out.is_empty() {
                return;
            }
        }
    }
}

// ============================================================================
// CONDITIONAL
// ============================================================================

/// Runs `validator` on the target itself when `condition` holds.
pub(crate) struct ConditionalEntry<T> {
    condition: ConstraintCondition<T>,
    validator: Validator<T>,
}

impl<T> ConditionalEntry<T> {
    pub(crate) fn new(condition: ConstraintCondition<T>, validator: Validator<T>) -> Self {
        Self {
            condition,
            validator,
        }
    }
}

impl<T: 'static> Evaluate<T> for ConditionalEntry<T> {
    fn evaluate(&self, target: &T, ctx: &ValidationContext<'_>, out: &mut ConstraintViolations) {
        if (self.condition)(target, ctx.group()) {
            self.validator.evaluate_in(target, ctx, out);
        }
    }
}
