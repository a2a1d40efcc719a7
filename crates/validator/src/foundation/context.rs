//! Per-call evaluation state.

use crate::foundation::violation::join_path;
use crate::foundation::{ConstraintGroup, ConstraintViolation};
use crate::message::{Locale, MessageArg, MessageFormatter};
use std::borrow::Cow;
use std::sync::Arc;

/// Everything a chain needs to turn a failed constraint into a rendered
/// violation: the requested locale and group, the formatter, the path of the
/// value being validated and the message used for rejected nulls.
///
/// A context lives for one `validate` call and is never shared between calls.
#[derive(Clone)]
pub struct ValidationContext<'a> {
    locale: &'a Locale,
    group: &'a ConstraintGroup,
    formatter: &'a Arc<dyn MessageFormatter>,
    path: Cow<'a, str>,
    not_null_key: &'a str,
    not_null_format: &'a str,
    fail_fast: bool,
}

impl<'a> ValidationContext<'a> {
    /// Creates a root context.
    pub fn new(
        locale: &'a Locale,
        group: &'a ConstraintGroup,
        formatter: &'a Arc<dyn MessageFormatter>,
    ) -> Self {
        Self {
            locale,
            group,
            formatter,
            path: Cow::Borrowed(""),
            not_null_key: crate::constraints::NOT_NULL_KEY,
            not_null_format: crate::constraints::NOT_NULL_FORMAT,
            fail_fast: false,
        }
    }

    /// Stops evaluation at the first unit that reports a violation.
    #[must_use]
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// True in fail-fast mode.
    #[must_use]
    pub fn is_fail_fast(&self) -> bool {
        self.fail_fast
    }

    /// The requested locale.
    #[must_use]
    pub fn locale(&self) -> &Locale {
        self.locale
    }

    /// The requested group.
    #[must_use]
    pub fn group(&self) -> &ConstraintGroup {
        self.group
    }

    /// Path prefixed to every name produced under this context.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns a context whose path is extended by `segment`.
    #[must_use]
    pub fn child(&self, segment: &str) -> ValidationContext<'a> {
        ValidationContext {
            locale: self.locale,
            group: self.group,
            formatter: self.formatter,
            path: Cow::Owned(join_path(&self.path, segment)),
            not_null_key: self.not_null_key,
            not_null_format: self.not_null_format,
            fail_fast: self.fail_fast,
        }
    }

    /// Returns a context using a different not-null message.
    #[must_use]
    pub fn with_not_null_message<'b>(&'b self, key: &'b str, format: &'b str) -> ValidationContext<'b> {
        ValidationContext {
            locale: self.locale,
            group: self.group,
            formatter: self.formatter,
            path: Cow::Borrowed(&self.path),
            not_null_key: key,
            not_null_format: format,
            fail_fast: self.fail_fast,
        }
    }

    /// Full name of `name` under this context's path.
    #[must_use]
    pub fn full_name(&self, name: &str) -> String {
        join_path(&self.path, name)
    }

    /// Renders a violation for `name`. The full name becomes `args[0]`,
    /// followed by `args`.
    pub fn violation(
        &self,
        name: &str,
        message_key: impl Into<Cow<'static, str>>,
        default_message_format: impl Into<Cow<'static, str>>,
        args: impl IntoIterator<Item = MessageArg>,
    ) -> ConstraintViolation {
        let full_name = self.full_name(name);
        let all_args = std::iter::once(MessageArg::from(full_name.clone())).chain(args);
        ConstraintViolation::new(
            full_name,
            message_key,
            default_message_format,
            all_args,
            Arc::clone(self.formatter),
            self.locale.clone(),
        )
    }

    /// Renders the not-null violation for `name`.
    pub fn not_null_violation(&self, name: &str) -> ConstraintViolation {
        self.violation(
            name,
            self.not_null_key.to_string(),
            self.not_null_format.to_string(),
            [],
        )
    }
}
