//! Violation records produced by failed constraints.
//!
//! A [`ConstraintViolation`] is immutable once built. Its message is rendered
//! when the violation is created, so a [`ConstraintViolations`] sequence can
//! be handed to code running under a different locale without changing.

use crate::message::{Locale, MessageArg, MessageFormatter, SimpleMessageFormatter};
use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;
use std::ops::Index;
use std::sync::Arc;

/// Argument storage; most violations carry the name plus one or two values.
pub type ViolationArgs = SmallVec<[MessageArg; 4]>;

// ============================================================================
// CONSTRAINT VIOLATION
// ============================================================================

/// One failed constraint.
///
/// Equality is structural over the name, the message key and the arguments;
/// the rendered message and its locale are not compared.
#[derive(Clone)]
pub struct ConstraintViolation {
    name: String,
    message_key: Cow<'static, str>,
    default_message_format: Cow<'static, str>,
    args: ViolationArgs,
    message: String,
    locale: Locale,
    formatter: Arc<dyn MessageFormatter>,
}

impl ConstraintViolation {
    /// Creates a violation and renders its message with `formatter`.
    ///
    /// `args[0]` is expected to be the violation name; [`rename`](Self::rename)
    /// keeps the two in sync.
    pub fn new(
        name: impl Into<String>,
        message_key: impl Into<Cow<'static, str>>,
        default_message_format: impl Into<Cow<'static, str>>,
        args: impl IntoIterator<Item = MessageArg>,
        formatter: Arc<dyn MessageFormatter>,
        locale: Locale,
    ) -> Self {
        let message_key = message_key.into();
        let default_message_format = default_message_format.into();
        let args: ViolationArgs = args.into_iter().collect();
        let message = formatter.format(&message_key, &default_message_format, &args, &locale);
        Self {
            name: name.into(),
            message_key,
            default_message_format,
            args,
            message,
            locale,
            formatter,
        }
    }

    /// Creates a violation rendered by [`SimpleMessageFormatter`] for the root
    /// locale. The name is inserted as the first argument.
    pub fn simple(
        name: impl Into<String>,
        message_key: impl Into<Cow<'static, str>>,
        default_message_format: impl Into<Cow<'static, str>>,
        args: impl IntoIterator<Item = MessageArg>,
    ) -> Self {
        let name = name.into();
        let all_args = std::iter::once(MessageArg::from(name.clone())).chain(args);
        Self::new(
            name,
            message_key,
            default_message_format,
            all_args,
            Arc::new(SimpleMessageFormatter),
            Locale::ROOT,
        )
    }

    /// Dotted path of the value that failed, e.g. `"user.address.zip"`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stable message identifier, e.g. `"object.notNull"`.
    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    /// Template used when the formatter has no entry for the key.
    #[must_use]
    pub fn default_message_format(&self) -> &str {
        &self.default_message_format
    }

    /// Positional message arguments.
    #[must_use]
    pub fn args(&self) -> &[MessageArg] {
        &self.args
    }

    /// The rendered message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Locale the message was rendered for.
    #[must_use]
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Returns a copy with a new name, re-rendered in the same locale.
    ///
    /// The first argument is replaced when it held the old name.
    #[must_use]
    pub fn rename(&self, rename: impl FnOnce(&str) -> String) -> Self {
        let name = rename(&self.name);
        let mut args = self.args.clone();
        if let Some(first) = args.first_mut()
            && first.as_text() == Some(self.name.as_str())
        {
            *first = MessageArg::from(name.clone());
        }
        Self::new(
            name,
            self.message_key.clone(),
            self.default_message_format.clone(),
            args,
            Arc::clone(&self.formatter),
            self.locale.clone(),
        )
    }

    /// Prefixes the name with a collection index: `"name"` becomes `"[2].name"`.
    #[must_use]
    pub fn indexed(&self, index: usize) -> Self {
        self.rename(|name| join_path(&format!("[{index}]"), name))
    }

    /// Prefixes the name with a parent path: `"zip"` becomes `"address.zip"`.
    #[must_use]
    pub fn prefixed(&self, prefix: &str) -> Self {
        self.rename(|name| join_path(prefix, name))
    }

    /// Converts the violation to a JSON value.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "messageKey": self.message_key,
            "message": self.message,
            "args": self.args.iter().map(|arg| arg.render(&self.locale)).collect::<Vec<_>>(),
        })
    }
}

/// Joins a parent path and a child name. Index segments attach without a dot.
pub(crate) fn join_path(parent: &str, child: &str) -> String {
    if parent.is_empty() {
        child.to_string()
    } else if child.is_empty() {
        parent.to_string()
    } else if child.starts_with('[') {
        format!("{parent}{child}")
    } else {
        format!("{parent}.{child}")
    }
}

impl PartialEq for ConstraintViolation {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.message_key == other.message_key && self.args == other.args
    }
}

impl fmt::Debug for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstraintViolation")
            .field("name", &self.name)
            .field("message_key", &self.message_key)
            .field("args", &self.args)
            .field("message", &self.message)
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.name, self.message_key, self.message)
    }
}

// ============================================================================
// VIOLATION SEQUENCE
// ============================================================================

/// An ordered sequence of violations.
///
/// Order is construction order. Concatenation is associative with the empty
/// sequence as identity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstraintViolations {
    violations: Vec<ConstraintViolation>,
}

impl ConstraintViolations {
    /// Creates an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    /// Appends one violation.
    pub fn add(&mut self, violation: ConstraintViolation) {
        self.violations.push(violation);
    }

    /// Appends every violation of `other`.
    pub fn append(&mut self, other: ConstraintViolations) {
        self.violations.extend(other.violations);
    }

    /// Concatenates two sequences.
    #[must_use]
    pub fn concat(mut self, other: ConstraintViolations) -> Self {
        self.append(other);
        self
    }

    /// Returns the violation at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ConstraintViolation> {
        self.violations.get(index)
    }

    /// Number of violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there is no violation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Iterates in construction order.
    pub fn iter(&self) -> std::slice::Iter<'_, ConstraintViolation> {
        self.violations.iter()
    }

    /// Rendered messages in order.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.violations.iter().map(ConstraintViolation::message).collect()
    }

    /// Violations whose name is exactly `name`.
    pub fn violations_by_name<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a ConstraintViolation> + 'a {
        self.violations.iter().filter(move |v| v.name() == name)
    }

    /// Applies [`ConstraintViolation::rename`] to each violation.
    #[must_use]
    pub fn rename(&self, rename: impl Fn(&str) -> String) -> Self {
        self.violations.iter().map(|v| v.rename(&rename)).collect()
    }

    /// Applies [`ConstraintViolation::indexed`] to each violation.
    #[must_use]
    pub fn indexed(&self, index: usize) -> Self {
        self.violations.iter().map(|v| v.indexed(index)).collect()
    }

    /// Applies [`ConstraintViolation::prefixed`] to each violation.
    #[must_use]
    pub fn prefixed(&self, prefix: &str) -> Self {
        self.violations.iter().map(|v| v.prefixed(prefix)).collect()
    }

    /// Returns the violations as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[ConstraintViolation] {
        &self.violations
    }

    /// Consumes the sequence into a vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<ConstraintViolation> {
        self.violations
    }

    /// Converts the sequence to a JSON array.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::Array(
            self.violations
                .iter()
                .map(ConstraintViolation::to_json_value)
                .collect(),
        )
    }
}

impl Index<usize> for ConstraintViolations {
    type Output = ConstraintViolation;

    fn index(&self, index: usize) -> &Self::Output {
        &self.violations[index]
    }
}

impl From<Vec<ConstraintViolation>> for ConstraintViolations {
    fn from(violations: Vec<ConstraintViolation>) -> Self {
        Self { violations }
    }
}

impl FromIterator<ConstraintViolation> for ConstraintViolations {
    fn from_iter<I: IntoIterator<Item = ConstraintViolation>>(iter: I) -> Self {
        Self {
            violations: iter.into_iter().collect(),
        }
    }
}

impl Extend<ConstraintViolation> for ConstraintViolations {
    fn extend<I: IntoIterator<Item = ConstraintViolation>>(&mut self, iter: I) {
        self.violations.extend(iter);
    }
}

impl IntoIterator for ConstraintViolations {
    type Item = ConstraintViolation;
    type IntoIter = std::vec::IntoIter<ConstraintViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a ConstraintViolations {
    type Item = &'a ConstraintViolation;
    type IntoIter = std::slice::Iter<'a, ConstraintViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

impl fmt::Display for ConstraintViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} violation(s):", self.violations.len())?;
        for (i, violation) in self.violations.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, violation)?;
        }
        Ok(())
    }
}

// ============================================================================
// BOUNDARY ERROR
// ============================================================================

/// Raised by the `validated(...)` conveniences when a value is invalid.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", render_error(.violations))]
pub struct ConstraintViolationsError {
    violations: ConstraintViolations,
}

impl ConstraintViolationsError {
    /// Wraps a non-empty violation sequence.
    #[must_use]
    pub fn new(violations: ConstraintViolations) -> Self {
        Self { violations }
    }

    /// The violations that caused the error.
    #[must_use]
    pub fn violations(&self) -> &ConstraintViolations {
        &self.violations
    }

    /// Consumes the error into its violations.
    #[must_use]
    pub fn into_violations(self) -> ConstraintViolations {
        self.violations
    }
}

impl From<ConstraintViolations> for ConstraintViolationsError {
    fn from(violations: ConstraintViolations) -> Self {
        Self::new(violations)
    }
}

fn render_error(violations: &ConstraintViolations) -> String {
    let mut out = String::from("Constraint violations found!");
    for violation in violations {
        out.push_str("\n* ");
        out.push_str(violation.message());
    }
    out
}
