//! # verdict-validator
//!
//! Declarative validation of values: describe once which constraints a
//! type's fields must satisfy, then validate any number of values and get
//! back either the value or every violation, with messages rendered for the
//! caller's locale.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use verdict_validator::prelude::*;
//!
//! struct User { name: String, email: Option<String>, age: i32 }
//!
//! let validator = ValidatorBuilder::<User>::new()
//!     .constraint("name", |u: &User| u.name.as_str(), |c| c.not_blank().max_length(20))
//!     .constraint_nullable("email", |u: &User| u.email.as_deref(), |c| c.not_null().email())
//!     .constraint("age", |u: &User| &u.age, |c| c.greater_than_or_equal(0))
//!     .build();
//!
//! let result = validator.validate(user);
//! if let Validated::Invalid(violations) = &result {
//!     for message in violations.messages() {
//!         eprintln!("{message}");
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! - [`foundation`]: violations, [`Validated`](foundation::Validated),
//!   constraints and chains
//! - [`validator`]: [`Validator`](validator::Validator) and its builder
//! - [`arguments`]: validators over several inputs and `combineN`
//! - [`constraints`]: the built-in catalogue
//! - [`message`]: locales, templates and message bundles

// Boxed validation closures over up to sixteen inputs produce long types that
// are inherent to the argument-validator family.
#![allow(clippy::type_complexity)]

pub mod arguments;
pub mod constraints;
pub mod foundation;
mod macros;
pub mod message;
pub mod prelude;
pub mod validator;
