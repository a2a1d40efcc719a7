//! Validators over whole values.
//!
//! A [`Validator`] is built once with a [`ValidatorBuilder`] and is then
//! immutable. It can be cloned cheaply and shared between threads; every
//! call allocates its own violations.
//!
//! # Evaluation order
//!
//! Chains run first in declaration order, then nested entries, then
//! conditional sub-validators. In the default applicative mode every unit
//! runs and all violations are returned. In fail-fast mode evaluation stops
//! after the first unit that reports anything.
//!
//! ```rust,ignore
//! use verdict_validator::prelude::*;
//!
//! let validator = ValidatorBuilder::<User>::new()
//!     .constraint("name", |u: &User| u.name.as_str(), |c| c.not_blank().max_length(20))
//!     .constraint("age", |u: &User| &u.age, |c| c.greater_than_or_equal(0))
//!     .build();
//!
//! match validator.validate(user) {
//!     Validated::Valid(user) => save(user),
//!     Validated::Invalid(violations) => report(violations.messages()),
//! }
//! ```

mod builder;
mod config;
mod nested;

pub use builder::ValidatorBuilder;
pub use config::ValidatorConfig;

use crate::foundation::{
    ConstraintGroup, ConstraintViolations, ConstraintViolationsError, Evaluate, Validated,
    ValidationContext,
};
use crate::message::{Locale, MessageFormatter};
use std::fmt;
use std::sync::Arc;

struct Inner<T> {
    chains: Vec<Box<dyn Evaluate<T>>>,
    nested: Vec<Box<dyn Evaluate<T>>>,
    conditionals: Vec<Box<dyn Evaluate<T>>>,
    config: ValidatorConfig,
    formatter: Arc<dyn MessageFormatter>,
}

/// Validates values of type `T`.
pub struct Validator<T> {
    inner: Arc<Inner<T>>,
}

impl<T: 'static> Validator<T> {
    /// Starts building a validator.
    #[must_use]
    pub fn builder() -> ValidatorBuilder<T> {
        ValidatorBuilder::new()
    }

    /// The configuration the validator was built with.
    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.inner.config
    }

    /// The formatter used to render messages.
    #[must_use]
    pub fn formatter(&self) -> &Arc<dyn MessageFormatter> {
        &self.inner.formatter
    }

    /// Validates `target` under the default locale and group, reporting every
    /// failed constraint.
    pub fn validate(&self, target: T) -> Validated<T> {
        let locale = self.inner.config.default_locale.clone();
        self.validate_with(target, &locale, &ConstraintGroup::DEFAULT)
    }

    /// Validates `target` under `locale` and `group`, reporting every failed
    /// constraint.
    pub fn validate_with(&self, target: T, locale: &Locale, group: &ConstraintGroup) -> Validated<T> {
        let violations = self.run(&target, locale, group, false);
        Validated::of(target, violations)
    }

    /// Validates `target` under the default locale and group, stopping at the
    /// first unit that fails.
    pub fn validate_fail_fast(&self, target: T) -> Validated<T> {
        let locale = self.inner.config.default_locale.clone();
        self.validate_fail_fast_with(target, &locale, &ConstraintGroup::DEFAULT)
    }

    /// Fail-fast validation under `locale` and `group`.
    pub fn validate_fail_fast_with(
        &self,
        target: T,
        locale: &Locale,
        group: &ConstraintGroup,
    ) -> Validated<T> {
        let violations = self.run(&target, locale, group, true);
        Validated::of(target, violations)
    }

    /// Returns the violations for a borrowed target.
    #[must_use]
    pub fn violations(&self, target: &T) -> ConstraintViolations {
        self.run(target, &self.inner.config.default_locale, &ConstraintGroup::DEFAULT, false)
    }

    /// Returns the violations for a borrowed target under `locale` and `group`.
    #[must_use]
    pub fn violations_with(
        &self,
        target: &T,
        locale: &Locale,
        group: &ConstraintGroup,
    ) -> ConstraintViolations {
        self.run(target, locale, group, false)
    }

    /// Validates `target` and converts violations into an error.
    pub fn validated(&self, target: T) -> Result<T, ConstraintViolationsError> {
        self.validate(target).into_error_result()
    }

    /// The applicative view of this validator.
    #[must_use]
    pub fn applicative(&self) -> ApplicativeValidator<T> {
        ApplicativeValidator {
            validator: self.clone(),
        }
    }

    fn run(
        &self,
        target: &T,
        locale: &Locale,
        group: &ConstraintGroup,
        fail_fast: bool,
    ) -> ConstraintViolations {
        let ctx = ValidationContext::new(locale, group, &self.inner.formatter).with_fail_fast(fail_fast);
        let mut out = ConstraintViolations::new();
        self.evaluate_in(target, &ctx, &mut out);
        tracing::trace!(
            violations = out.len(),
            fail_fast,
            group = %group,
            locale = %locale,
            "validation finished"
        );
        out
    }

    /// Evaluates every unit under `ctx`, which may belong to a parent
    /// validator.
    pub(crate) fn evaluate_in(
        &self,
        target: &T,
        ctx: &ValidationContext<'_>,
        out: &mut ConstraintViolations,
    ) {
        let config = &self.inner.config;
        let prefixed;
        let ctx = if config.prefix.is_empty() {
            ctx
        } else {
            prefixed = ctx.child(&config.prefix);
            &prefixed
        };
        let ctx = ctx.with_not_null_message(
            &config.not_null_message_key,
            &config.not_null_message_format,
        );

        let units = self
            .inner
            .chains
            .iter()
            .chain(&self.inner.nested)
            .chain(&self.inner.conditionals);
        for unit in units {
            unit.evaluate(target, &ctx, out);
            if ctx.is_fail_fast() && !out.is_empty() {
                return;
            }
        }
    }
}

impl<T> Clone for Validator<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> fmt::Debug for Validator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("chains", &self.inner.chains.len())
            .field("nested", &self.inner.nested.len())
            .field("conditionals", &self.inner.conditionals.len())
            .field("config", &self.inner.config)
            .finish()
    }
}

// ============================================================================
// APPLICATIVE VIEW
// ============================================================================

/// A [`Validator`] seen as a one-argument validator.
///
/// Evaluation is always applicative; this type exists so that a plain
/// validator can take part in `combine*` and the other argument-validator
/// combinators.
pub struct ApplicativeValidator<T> {
    validator: Validator<T>,
}

impl<T: 'static> ApplicativeValidator<T> {
    /// The underlying validator.
    #[must_use]
    pub fn validator(&self) -> &Validator<T> {
        &self.validator
    }

    /// Validates `target` under the default locale and group.
    pub fn validate(&self, target: T) -> Validated<T> {
        self.validator.validate(target)
    }

    /// Validates `target` under `locale` and `group`.
    pub fn validate_with(&self, target: T, locale: &Locale, group: &ConstraintGroup) -> Validated<T> {
        self.validator.validate_with(target, locale, group)
    }
}

impl<T> Clone for ApplicativeValidator<T> {
    fn clone(&self) -> Self {
        Self {
            validator: self.validator.clone(),
        }
    }
}

impl<T> fmt::Debug for ApplicativeValidator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApplicativeValidator").field(&self.validator).finish()
    }
}
