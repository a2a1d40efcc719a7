//! Core validation types.
//!
//! - **Violations**: [`ConstraintViolation`], [`ConstraintViolations`] and the
//!   boundary error [`ConstraintViolationsError`]
//! - **Results**: [`Validated`]
//! - **Constraints**: [`Constraint`], [`NullPolicy`], [`CustomConstraint`]
//! - **Chains**: [`ConstraintChain`], [`ConstraintsBuilder`]
//! - **Selection**: [`ConstraintGroup`], [`ConstraintCondition`]
//!
//! # Architecture
//!
//! A chain projects one value out of the target and runs its constraints in
//! declaration order. Each failing constraint yields a violation whose
//! message is rendered immediately under the requested locale, so a
//! [`ConstraintViolations`] never depends on state outside the call that
//! produced it.
//!
//! ```rust,ignore
//! use verdict_validator::prelude::*;
//!
//! let constraints = ConstraintsBuilder::<str>::new()
//!     .not_null()
//!     .not_blank()
//!     .max_length(20)
//!     .build();
//! ```

pub mod chain;
pub mod constraint;
pub mod context;
pub mod group;
pub mod validated;
pub mod violation;

pub(crate) use chain::{Evaluate, projection};
pub use chain::{ConstraintChain, ConstraintsBuilder, Projector};
pub use constraint::{Constraint, ConstraintFailure, CustomConstraint, NullPolicy};
pub use context::ValidationContext;
pub use group::{ConstraintCondition, ConstraintGroup};
pub use validated::Validated;
pub use violation::{
    ConstraintViolation, ConstraintViolations, ConstraintViolationsError, ViolationArgs,
};
