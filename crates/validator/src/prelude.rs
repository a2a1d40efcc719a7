//! Prelude module for convenient imports.
//!
//! Provides a single `use verdict_validator::prelude::*;` import that brings
//! in the builder, the result types and every argument-validator trait, so
//! combinators such as `and_then` and `compose` resolve on any validator.
//!
//! # Examples
//!
//! ```rust,ignore
//! use verdict_validator::prelude::*;
//!
//! let validator = ValidatorBuilder::<String>::new()
//!     .constraint("name", String::as_str, |c| c.not_blank().max_length(20))
//!     .build();
//! let upper = validator.and_then(|s| s.to_uppercase());
//! ```

// ============================================================================
// FOUNDATION: violations, results, constraints
// ============================================================================

pub use crate::foundation::{
    Constraint, ConstraintGroup, ConstraintViolation, ConstraintViolations,
    ConstraintViolationsError, ConstraintsBuilder, CustomConstraint, NullPolicy, Validated,
};

// ============================================================================
// VALIDATORS
// ============================================================================

pub use crate::validator::{ApplicativeValidator, Validator, ValidatorBuilder, ValidatorConfig};

// ============================================================================
// ARGUMENTS: holders, traits, combine
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::arguments::*;

// ============================================================================
// MESSAGES AND CATALOGUE
// ============================================================================

pub use crate::constraints::{Clock, FixedClock, SystemClock};
pub use crate::message::{
    BundleMessageFormatter, Locale, MessageArg, MessageBundles, MessageFormatter,
    SimpleMessageFormatter,
};
