//! The result of a validation.

use crate::foundation::{ConstraintViolations, ConstraintViolationsError};

/// Either a valid value or a non-empty sequence of violations.
///
/// Unlike `Result`, combining two `Validated` values with [`zip`](Self::zip)
/// keeps the violations of both sides.
#[derive(Debug, Clone, PartialEq)]
#[must_use = "validation result must be checked"]
pub enum Validated<T> {
    /// The value passed every constraint.
    Valid(T),
    /// At least one constraint failed.
    Invalid(ConstraintViolations),
}

impl<T> Validated<T> {
    /// Builds a result from a value and the violations found for it.
    pub fn of(value: T, violations: ConstraintViolations) -> Self {
        if violations.is_empty() {
            Self::Valid(value)
        } else {
            Self::Invalid(violations)
        }
    }

    /// Wraps violations, or returns `None` when there are none.
    #[must_use]
    pub fn invalid(violations: ConstraintViolations) -> Option<Self> {
        (!violations.is_empty()).then_some(Self::Invalid(violations))
    }

    /// Returns true for [`Validated::Valid`].
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns the valid value.
    ///
    /// # Panics
    ///
    /// Panics if the result is invalid.
    #[must_use]
    #[track_caller]
    pub fn value(&self) -> &T {
        match self {
            Self::Valid(value) => value,
            Self::Invalid(violations) => {
                panic!("value() called on an invalid result: {violations}")
            }
        }
    }

    /// Returns the violations.
    ///
    /// # Panics
    ///
    /// Panics if the result is valid.
    #[must_use]
    #[track_caller]
    pub fn errors(&self) -> &ConstraintViolations {
        match self {
            Self::Valid(_) => panic!("errors() called on a valid result"),
            Self::Invalid(violations) => violations,
        }
    }

    /// Returns the value if valid.
    #[must_use]
    pub fn as_valid(&self) -> Option<&T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// Returns the violations if invalid.
    #[must_use]
    pub fn as_invalid(&self) -> Option<&ConstraintViolations> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(violations) => Some(violations),
        }
    }

    /// Consumes the result into its value, if valid.
    #[must_use]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// Converts into a `Result`.
    pub fn into_result(self) -> Result<T, ConstraintViolations> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(violations) => Err(violations),
        }
    }

    /// Converts into a `Result` whose error is the boundary error type.
    pub fn into_error_result(self) -> Result<T, ConstraintViolationsError> {
        self.into_result().map_err(ConstraintViolationsError::new)
    }

    /// Transforms the valid value; `f` is not called when invalid.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Validated<U> {
        match self {
            Self::Valid(value) => Validated::Valid(f(value)),
            Self::Invalid(violations) => Validated::Invalid(violations),
        }
    }

    /// Chains a dependent validation; `f` is not called when invalid.
    pub fn flat_map<U>(self, f: impl FnOnce(T) -> Validated<U>) -> Validated<U> {
        match self {
            Self::Valid(value) => f(value),
            Self::Invalid(violations) => Validated::Invalid(violations),
        }
    }

    /// Transforms the violations of an invalid result.
    ///
    /// An empty sequence returned by `f` is kept as-is, so callers must not
    /// use this to turn an invalid result valid.
    pub fn map_errors(self, f: impl FnOnce(ConstraintViolations) -> ConstraintViolations) -> Self {
        match self {
            Self::Valid(value) => Self::Valid(value),
            Self::Invalid(violations) => Self::Invalid(f(violations)),
        }
    }

    /// Collapses both variants into one value.
    pub fn fold<U>(
        self,
        on_invalid: impl FnOnce(ConstraintViolations) -> U,
        on_valid: impl FnOnce(T) -> U,
    ) -> U {
        match self {
            Self::Valid(value) => on_valid(value),
            Self::Invalid(violations) => on_invalid(violations),
        }
    }

    /// Pairs two results, accumulating the violations of both sides.
    pub fn zip<U>(self, other: Validated<U>) -> Validated<(T, U)> {
        match (self, other) {
            (Self::Valid(a), Validated::Valid(b)) => Validated::Valid((a, b)),
            (Self::Valid(_), Validated::Invalid(e)) | (Self::Invalid(e), Validated::Valid(_)) => {
                Validated::Invalid(e)
            }
            (Self::Invalid(left), Validated::Invalid(right)) => {
                Validated::Invalid(left.concat(right))
            }
        }
    }
}

impl<T> From<Validated<T>> for Result<T, ConstraintViolations> {
    fn from(validated: Validated<T>) -> Self {
        validated.into_result()
    }
}
