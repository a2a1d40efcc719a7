//! Message rendering
//!
//! Violations carry a message key, a default format and positional
//! arguments. A [`MessageFormatter`] turns those into the final message for
//! one [`Locale`]:
//!
//! 1. look the key up in locale-specific bundles, walking
//!    `language_COUNTRY -> language -> root`;
//! 2. otherwise use the constraint's default format;
//! 3. substitute `{0}`, `{1}`, ... with arguments rendered for the locale.
//!
//! ```rust,ignore
//! use verdict_validator::message::*;
//!
//! let formatter = BundleMessageFormatter::new(
//!     MessageBundles::new().with_message(Locale::GERMAN, "object.notNull", "\"{0}\" fehlt"),
//! );
//! let message = formatter.format("object.notNull", "\"{0}\" must not be null", &["name".into()], &Locale::GERMAN);
//! assert_eq!(message, "\"name\" fehlt");
//! ```

mod arg;
mod bundle;
mod formatter;
mod locale;
mod template;

pub use arg::MessageArg;
pub use bundle::{MessageBundleError, MessageBundles};
pub use formatter::{BundleMessageFormatter, MessageFormatter, SimpleMessageFormatter};
pub use locale::{Locale, LocaleParseError};
pub use template::{MessageTemplate, TemplatePart, format_message};
