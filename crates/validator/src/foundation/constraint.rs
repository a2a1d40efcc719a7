//! Single constraints and their null handling.

use crate::foundation::{ConstraintViolation, ValidationContext};
use crate::message::MessageArg;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// How a constraint treats an absent value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NullPolicy {
    /// Null is reported with the not-null message and no later constraint of
    /// the chain runs.
    RejectNull,
    /// Null is valid.
    #[default]
    AcceptNull,
    /// The constraint is only defined for present values. Null is left to a
    /// preceding [`RejectNull`](Self::RejectNull) constraint; the chain
    /// builder inserts `not_null` when the chain has none.
    RequireNonNull,
}

/// A failed constraint, as returned by [`Constraint::evaluate`].
#[derive(Debug, Clone)]
pub struct ConstraintFailure {
    violation: ConstraintViolation,
    stops_chain: bool,
}

impl ConstraintFailure {
    /// The rendered violation.
    #[must_use]
    pub fn violation(&self) -> &ConstraintViolation {
        &self.violation
    }

    /// True when the remaining constraints of the chain must be skipped.
    #[must_use]
    pub fn stops_chain(&self) -> bool {
        self.stops_chain
    }

    /// Consumes the failure into its violation.
    #[must_use]
    pub fn into_violation(self) -> ConstraintViolation {
        self.violation
    }
}

type Test<V> = Arc<dyn Fn(&V) -> bool + Send + Sync>;
type ArgsFn<V> = Arc<dyn Fn(&V) -> Vec<MessageArg> + Send + Sync>;

/// A predicate over `V` with the metadata needed to report its failure.
///
/// The predicate only ever sees present values; absent values are handled by
/// the [`NullPolicy`].
pub struct Constraint<V: ?Sized> {
    test: Test<V>,
    message_key: Cow<'static, str>,
    default_message_format: Cow<'static, str>,
    args: ArgsFn<V>,
    null_policy: NullPolicy,
}

impl<V: ?Sized + 'static> Constraint<V> {
    /// Creates a constraint that accepts null and reports no extra arguments.
    pub fn new(
        test: impl Fn(&V) -> bool + Send + Sync + 'static,
        message_key: impl Into<Cow<'static, str>>,
        default_message_format: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            test: Arc::new(test),
            message_key: message_key.into(),
            default_message_format: default_message_format.into(),
            args: Arc::new(|_: &V| Vec::new()),
            null_policy: NullPolicy::AcceptNull,
        }
    }

    /// Sets the argument extractor. Its output follows the name in the
    /// violation's arguments.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_args(mut self, args: impl Fn(&V) -> Vec<MessageArg> + Send + Sync + 'static) -> Self {
        self.args = Arc::new(args);
        self
    }

    /// Replaces the default message template.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_default_message_format(mut self, format: impl Into<Cow<'static, str>>) -> Self {
        self.default_message_format = format.into();
        self
    }

    /// Sets the null policy.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_null_policy(mut self, null_policy: NullPolicy) -> Self {
        self.null_policy = null_policy;
        self
    }

    /// The message key reported on failure.
    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    /// The default message template.
    #[must_use]
    pub fn default_message_format(&self) -> &str {
        &self.default_message_format
    }

    /// The null policy.
    #[must_use]
    pub fn null_policy(&self) -> NullPolicy {
        self.null_policy
    }

    /// Runs the predicate on a present value.
    #[must_use]
    pub fn test(&self, value: &V) -> bool {
        (self.test)(value)
    }

    /// Evaluates the constraint for the value named `name`.
    ///
    /// Returns `None` when the constraint holds.
    pub fn evaluate(
        &self,
        name: &str,
        value: Option<&V>,
        ctx: &ValidationContext<'_>,
    ) -> Option<ConstraintFailure> {
        match (value, self.null_policy) {
            (None, NullPolicy::AcceptNull | NullPolicy::RequireNonNull) => None,
            (None, NullPolicy::RejectNull) => Some(ConstraintFailure {
                violation: ctx.not_null_violation(name),
                stops_chain: true,
            }),
            (Some(value), _) if (self.test)(value) => None,
            (Some(value), _) => Some(ConstraintFailure {
                violation: ctx.violation(
                    name,
                    self.message_key.clone(),
                    self.default_message_format.clone(),
                    (self.args)(value),
                ),
                stops_chain: false,
            }),
        }
    }

    /// Builds a constraint from a [`CustomConstraint`].
    pub fn from_custom<C>(custom: C) -> Self
    where
        C: CustomConstraint<V> + 'static,
    {
        let custom = Arc::new(custom);
        let key = custom.message_key();
        let format = custom.default_message_format();
        let for_args = Arc::clone(&custom);
        Constraint::new(move |value: &V| custom.test(value), key, format)
            .with_args(move |value: &V| for_args.args(value))
    }
}

impl<V: ?Sized> Clone for Constraint<V> {
    fn clone(&self) -> Self {
        Self {
            test: Arc::clone(&self.test),
            message_key: self.message_key.clone(),
            default_message_format: self.default_message_format.clone(),
            args: Arc::clone(&self.args),
            null_policy: self.null_policy,
        }
    }
}

impl<V: ?Sized> fmt::Debug for Constraint<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constraint")
            .field("message_key", &self.message_key)
            .field("default_message_format", &self.default_message_format)
            .field("null_policy", &self.null_policy)
            .field("test", &"<function>")
            .finish()
    }
}

// ============================================================================
// CUSTOM CONSTRAINTS
// ============================================================================

/// A reusable, named predicate.
///
/// Implement this for domain rules that are shared between validators and
/// register them with `predicate_custom`.
///
/// ```rust,ignore
/// struct Past;
///
/// impl CustomConstraint<DateTime<Utc>> for Past {
///     fn test(&self, value: &DateTime<Utc>) -> bool { *value < Utc::now() }
///     fn message_key(&self) -> &'static str { "instant.past" }
///     fn default_message_format(&self) -> &'static str { "\"{0}\" must be past" }
/// }
/// ```
pub trait CustomConstraint<V: ?Sized>: Send + Sync {
    /// Returns true when `value` satisfies the constraint.
    fn test(&self, value: &V) -> bool;

    /// Stable message identifier.
    fn message_key(&self) -> &'static str;

    /// Template used when no bundle entry exists.
    fn default_message_format(&self) -> &'static str;

    /// Arguments following the name. None by default.
    fn args(&self, _value: &V) -> Vec<MessageArg> {
        Vec::new()
    }
}
