//! Constraint chains: ordered constraints attached to one named projection.

use crate::constraints;
use crate::foundation::{
    Constraint, ConstraintGroup, ConstraintViolations, CustomConstraint, NullPolicy,
    ValidationContext,
};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Extracts a possibly absent sub-value from a target.
pub type Projector<T, V> = Arc<dyn for<'a> Fn(&'a T) -> Option<&'a V> + Send + Sync>;

/// Pins the higher-ranked signature of a projection closure.
pub(crate) fn projection<T, V: ?Sized, F>(f: F) -> F
where
    F: for<'a> Fn(&'a T) -> Option<&'a V>,
{
    f
}

/// One unit of evaluation inside a validator.
///
/// Implementations append the violations they find to `out` in declaration
/// order and never look at violations produced by other units.
pub(crate) trait Evaluate<T>: Send + Sync {
    fn evaluate(&self, target: &T, ctx: &ValidationContext<'_>, out: &mut ConstraintViolations);
}

// ============================================================================
// CONSTRAINT CHAIN
// ============================================================================

/// Ordered constraints over one named projection of `T`.
///
/// Every constraint runs, so all failures of a field are reported together,
/// except after a rejected null: that violation ends the chain.
pub struct ConstraintChain<T, V: ?Sized> {
    name: String,
    projector: Projector<T, V>,
    constraints: Vec<Constraint<V>>,
    group: Option<ConstraintGroup>,
}

impl<T, V: ?Sized> ConstraintChain<T, V> {
    /// Creates an untagged chain.
    pub fn new(
        name: impl Into<String>,
        projector: Projector<T, V>,
        constraints: Vec<Constraint<V>>,
    ) -> Self {
        Self {
            name: name.into(),
            projector,
            constraints,
            group: None,
        }
    }

    /// Tags the chain with a group.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_group(mut self, group: Option<ConstraintGroup>) -> Self {
        self.group = group;
        self
    }

    /// The projection name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The group tag, if any.
    #[must_use]
    pub fn group(&self) -> Option<&ConstraintGroup> {
        self.group.as_ref()
    }

    /// The constraints in declaration order.
    #[must_use]
    pub fn constraints(&self) -> &[Constraint<V>] {
        &self.constraints
    }

    /// Evaluates the chain against `target`.
    pub fn evaluate(&self, target: &T, ctx: &ValidationContext<'_>, out: &mut ConstraintViolations)
    where
        V: 'static,
    {
        if !ctx.group().admits(self.group.as_ref()) {
            return;
        }

        let value = (self.projector)(target);
        for constraint in &self.constraints {
            if let Some(failure) = constraint.evaluate(&self.name, value, ctx) {
                let stops_chain = failure.stops_chain();
                out.add(failure.into_violation());
                if stops_chain {
                    break;
                }
            }
        }
    }
}

impl<T, V> Evaluate<T> for ConstraintChain<T, V>
where
    T: 'static,
    V: ?Sized + 'static,
{
    fn evaluate(&self, target: &T, ctx: &ValidationContext<'_>, out: &mut ConstraintViolations) {
        ConstraintChain::evaluate(self, target, ctx, out);
    }
}

impl<T, V: ?Sized> fmt::Debug for ConstraintChain<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstraintChain")
            .field("name", &self.name)
            .field("constraints", &self.constraints)
            .field("group", &self.group)
            .field("projector", &"<function>")
            .finish()
    }
}

// ============================================================================
// CONSTRAINTS BUILDER
// ============================================================================

/// Collects the constraints of one chain.
///
/// ```rust,ignore
/// ValidatorBuilder::<User>::new()
///     .constraint("name", |u: &User| u.name.as_str(), |c| c.not_blank().max_length(20))
///     .build();
/// ```
pub struct ConstraintsBuilder<V: ?Sized> {
    constraints: Vec<Constraint<V>>,
}

impl<V: ?Sized + 'static> ConstraintsBuilder<V> {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            constraints: Vec::new(),
        }
    }

    /// Appends a constraint.
    #[must_use = "builder methods must be chained or built"]
    pub fn constraint(mut self, constraint: Constraint<V>) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Rejects an absent value. Constraints after a failed `not_null` are
    /// not evaluated.
    #[must_use = "builder methods must be chained or built"]
    pub fn not_null(self) -> Self {
        self.constraint(constraints::not_null())
    }

    /// Requires the value to be absent.
    #[must_use = "builder methods must be chained or built"]
    pub fn is_null(self) -> Self {
        self.constraint(constraints::is_null())
    }

    /// Adds a predicate; absent values pass.
    #[must_use = "builder methods must be chained or built"]
    pub fn predicate(
        self,
        test: impl Fn(&V) -> bool + Send + Sync + 'static,
        message_key: impl Into<Cow<'static, str>>,
        default_message_format: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.constraint(Constraint::new(test, message_key, default_message_format))
    }

    /// Adds a predicate that is only defined for present values. A `not_null`
    /// is inserted at the front of the chain if none precedes it.
    #[must_use = "builder methods must be chained or built"]
    pub fn predicate_non_null(
        self,
        test: impl Fn(&V) -> bool + Send + Sync + 'static,
        message_key: impl Into<Cow<'static, str>>,
        default_message_format: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.constraint(
            Constraint::new(test, message_key, default_message_format)
                .with_null_policy(NullPolicy::RequireNonNull),
        )
    }

    /// Adds a [`CustomConstraint`]; absent values pass.
    #[must_use = "builder methods must be chained or built"]
    pub fn predicate_custom(self, custom: impl CustomConstraint<V> + 'static) -> Self {
        self.constraint(Constraint::from_custom(custom))
    }

    /// Replaces the default message format of the last constraint.
    #[must_use = "builder methods must be chained or built"]
    pub fn message(mut self, default_message_format: impl Into<Cow<'static, str>>) -> Self {
        if let Some(last) = self.constraints.pop() {
            self.constraints
                .push(last.with_default_message_format(default_message_format));
        }
        self
    }

    /// Finishes the chain, inserting `not_null` at the front when a
    /// [`NullPolicy::RequireNonNull`] constraint has no rejecting constraint
    /// before it.
    #[must_use]
    pub fn build(mut self) -> Vec<Constraint<V>> {
        let mut guarded = false;
        let mut needs_guard = false;
        for constraint in &self.constraints {
            match constraint.null_policy() {
                NullPolicy::RejectNull => guarded = true,
                NullPolicy::RequireNonNull if !guarded => {
                    needs_guard = true;
                    break;
                }
                _ => {}
            }
        }
        if needs_guard {
            tracing::debug!("inserting implicit not_null constraint at the front of a chain");
            self.constraints.insert(0, constraints::not_null());
        }
        self.constraints
    }
}

impl<V: ?Sized + 'static> Default for ConstraintsBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{Locale, MessageFormatter, SimpleMessageFormatter};
    use pretty_assertions::assert_eq;

    struct Person {
        name: Option<String>,
    }

    fn chain(build: impl FnOnce(ConstraintsBuilder<str>) -> ConstraintsBuilder<str>) -> ConstraintChain<Person, str> {
        let projector: Projector<Person, str> =
            Arc::new(projection(|p: &Person| p.name.as_deref()));
        ConstraintChain::new("name", projector, build(ConstraintsBuilder::new()).build())
    }

    fn run(chain: &ConstraintChain<Person, str>, person: &Person, group: &ConstraintGroup) -> ConstraintViolations {
        let formatter: Arc<dyn MessageFormatter> = Arc::new(SimpleMessageFormatter);
        let ctx = ValidationContext::new(&Locale::ROOT, group, &formatter);
        let mut out = ConstraintViolations::new();
        chain.evaluate(person, &ctx, &mut out);
        out
    }

    fn keys(violations: &ConstraintViolations) -> Vec<&str> {
        violations.iter().map(|v| v.message_key()).collect()
    }

    #[test]
    fn reports_every_failure_in_declaration_order() {
        let chain = chain(|c| c.not_blank().min_length(5).pattern(regex::Regex::new("^[a-z]+$").unwrap()));
        let out = run(&chain, &Person { name: Some(" ".into()) }, &ConstraintGroup::DEFAULT);
        assert_eq!(
            keys(&out),
            vec!["charSequence.notBlank", "container.greaterThanOrEqual", "charSequence.pattern"]
        );
        assert!(out.iter().all(|v| v.name() == "name"));
    }

    #[test]
    fn rejected_null_stops_the_chain() {
        let chain = chain(|c| c.not_null().predicate_non_null(|s| !s.is_empty(), "k", "f"));
        let out = run(&chain, &Person { name: None }, &ConstraintGroup::DEFAULT);
        assert_eq!(keys(&out), vec!["object.notNull"]);
    }

    #[test]
    fn implicit_not_null_is_synthesized() {
        let constraints = ConstraintsBuilder::<str>::new()
            .not_empty()
            .predicate_non_null(|s| s.len() < 10, "k", "f")
            .build();
        assert_eq!(constraints.len(), 3);
        assert_eq!(constraints[0].null_policy(), NullPolicy::RejectNull);

        let already_guarded = ConstraintsBuilder::<str>::new()
            .not_null()
            .predicate_non_null(|s| s.len() < 10, "k", "f")
            .build();
        assert_eq!(already_guarded.len(), 2);
    }

    #[test]
    fn absent_values_pass_nullable_constraints() {
        let chain = chain(|c| c.not_blank().max_length(3));
        assert!(run(&chain, &Person { name: None }, &ConstraintGroup::DEFAULT).is_empty());
    }

    #[test]
    fn tagged_chain_is_skipped_for_other_groups() {
        let chain = chain(|c| c.not_null()).with_group(Some(ConstraintGroup::of("update")));
        let person = Person { name: None };
        assert!(run(&chain, &person, &ConstraintGroup::DEFAULT).is_empty());
        assert_eq!(run(&chain, &person, &ConstraintGroup::of("update")).len(), 1);
    }

    #[test]
    fn message_overrides_last_format() {
        let chain = chain(|c| c.not_blank().message("{0} needs text"));
        let out = run(&chain, &Person { name: Some(String::new()) }, &ConstraintGroup::DEFAULT);
        assert_eq!(out[0].message(), "name needs text");
        assert_eq!(out[0].message_key(), "charSequence.notBlank");
    }
}
