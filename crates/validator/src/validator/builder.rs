//! Staged construction of [`Validator`]s.

use super::nested::{Absent, ConditionalEntry, ForEachEntry, NestedEntry, SliceProjector};
use super::{Inner, Validator, ValidatorConfig};
use crate::foundation::{
    ConstraintChain, ConstraintCondition, ConstraintGroup, ConstraintsBuilder, Evaluate,
    Projector, projection,
};
use crate::message::{Locale, MessageFormatter, SimpleMessageFormatter};
use std::sync::Arc;

/// Builds a [`Validator<T>`].
///
/// Every registration method consumes and returns the builder; nothing can
/// be changed once [`build`](Self::build) has been called.
///
/// ```rust,ignore
/// let address = ValidatorBuilder::<Address>::new()
///     .constraint("zip", |a: &Address| a.zip.as_str(), |c| c.not_blank())
///     .build();
///
/// let user = ValidatorBuilder::<User>::new()
///     .constraint_nullable("email", |u: &User| u.email.as_deref(), |c| c.not_null().email())
///     .nest("address", |u: &User| &u.address, address)
///     .on_group(ConstraintGroup::of("update"), |b| {
///         b.constraint("id", |u: &User| &u.id, |c| c.greater_than(0))
///     })
///     .build();
/// ```
pub struct ValidatorBuilder<T> {
    chains: Vec<Box<dyn Evaluate<T>>>,
    nested: Vec<Box<dyn Evaluate<T>>>,
    conditionals: Vec<Box<dyn Evaluate<T>>>,
    group: Option<ConstraintGroup>,
    config: ValidatorConfig,
    formatter: Option<Arc<dyn MessageFormatter>>,
}

impl<T: 'static> ValidatorBuilder<T> {
    /// Creates an empty builder with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            chains: Vec::new(),
            nested: Vec::new(),
            conditionals: Vec::new(),
            group: None,
            config: ValidatorConfig::default(),
            formatter: None,
        }
    }

    // ------------------------------------------------------------------------
    // Chains
    // ------------------------------------------------------------------------

    /// Adds a chain over a value that is always present.
    #[must_use = "builder methods must be chained or built"]
    pub fn constraint<V, P, F>(self, name: impl Into<String>, projector: P, constraints: F) -> Self
    where
        V: ?Sized + 'static,
        P: for<'a> Fn(&'a T) -> &'a V + Send + Sync + 'static,
        F: FnOnce(ConstraintsBuilder<V>) -> ConstraintsBuilder<V>,
    {
        let projector: Projector<T, V> = Arc::new(projection(move |t: &T| Some(projector(t))));
        self.chain(name.into(), projector, constraints)
    }

    /// Adds a chain over a value that may be absent.
    #[must_use = "builder methods must be chained or built"]
    pub fn constraint_nullable<V, P, F>(
        self,
        name: impl Into<String>,
        projector: P,
        constraints: F,
    ) -> Self
    where
        V: ?Sized + 'static,
        P: for<'a> Fn(&'a T) -> Option<&'a V> + Send + Sync + 'static,
        F: FnOnce(ConstraintsBuilder<V>) -> ConstraintsBuilder<V>,
    {
        self.chain(name.into(), Arc::new(projector), constraints)
    }

    fn chain<V, F>(mut self, name: String, projector: Projector<T, V>, constraints: F) -> Self
    where
        V: ?Sized + 'static,
        F: FnOnce(ConstraintsBuilder<V>) -> ConstraintsBuilder<V>,
    {
        let constraints = constraints(ConstraintsBuilder::new()).build();
        let chain = ConstraintChain::new(name, projector, constraints).with_group(self.group.clone());
        self.chains.push(Box::new(chain));
        self
    }

    // ------------------------------------------------------------------------
    // Nesting
    // ------------------------------------------------------------------------

    /// Validates the sub-object at `name` with `validator`.
    #[must_use = "builder methods must be chained or built"]
    pub fn nest<S, P>(self, name: impl Into<String>, projector: P, validator: Validator<S>) -> Self
    where
        S: 'static,
        P: for<'a> Fn(&'a T) -> &'a S + Send + Sync + 'static,
    {
        let projector: Projector<T, S> = Arc::new(projection(move |t: &T| Some(projector(t))));
        self.nested_entry(name.into(), projector, validator, Absent::Reject)
    }

    /// Validates a sub-object that may be absent; absence is reported with
    /// the not-null message under `name`.
    #[must_use = "builder methods must be chained or built"]
    pub fn nest_nullable<S, P>(
        self,
        name: impl Into<String>,
        projector: P,
        validator: Validator<S>,
    ) -> Self
    where
        S: 'static,
        P: for<'a> Fn(&'a T) -> Option<&'a S> + Send + Sync + 'static,
    {
        self.nested_entry(name.into(), Arc::new(projector), validator, Absent::Reject)
    }

    /// Validates a sub-object only when present.
    #[must_use = "builder methods must be chained or built"]
    pub fn optional_nest<S, P>(
        self,
        name: impl Into<String>,
        projector: P,
        validator: Validator<S>,
    ) -> Self
    where
        S: 'static,
        P: for<'a> Fn(&'a T) -> Option<&'a S> + Send + Sync + 'static,
    {
        self.nested_entry(name.into(), Arc::new(projector), validator, Absent::Skip)
    }

    fn nested_entry<S: 'static>(
        mut self,
        name: String,
        projector: Projector<T, S>,
        validator: Validator<S>,
        absent: Absent,
    ) -> Self {
        let entry = NestedEntry::new(name, projector, validator, absent, self.group.clone());
        self.nested.push(Box::new(entry));
        self
    }

    /// Validates every element of the slice at `name`. Element violations are
    /// named `name[index].child`.
    #[must_use = "builder methods must be chained or built"]
    pub fn for_each<E, P>(self, name: impl Into<String>, projector: P, validator: Validator<E>) -> Self
    where
        E: 'static,
        P: for<'a> Fn(&'a T) -> &'a [E] + Send + Sync + 'static,
    {
        let projector: SliceProjector<T, E> =
            Arc::new(projection(move |t: &T| Some(projector(t))));
        self.for_each_entry(name.into(), projector, validator, Absent::Reject)
    }

    /// Like [`for_each`](Self::for_each) for a slice that may be absent;
    /// absence is valid.
    #[must_use = "builder methods must be chained or built"]
    pub fn for_each_if_present<E, P>(
        self,
        name: impl Into<String>,
        projector: P,
        validator: Validator<E>,
    ) -> Self
    where
        E: 'static,
        P: for<'a> Fn(&'a T) -> Option<&'a [E]> + Send + Sync + 'static,
    {
        self.for_each_entry(name.into(), Arc::new(projector), validator, Absent::Skip)
    }

    fn for_each_entry<E: 'static>(
        mut self,
        name: String,
        projector: SliceProjector<T, E>,
        validator: Validator<E>,
        absent: Absent,
    ) -> Self {
        let entry = ForEachEntry::new(name, projector, validator, absent, self.group.clone());
        self.nested.push(Box::new(entry));
        self
    }

    // ------------------------------------------------------------------------
    // Groups and conditions
    // ------------------------------------------------------------------------

    /// Tags every chain and nested entry registered inside `register` with
    /// `group`.
    #[must_use = "builder methods must be chained or built"]
    pub fn on_group(mut self, group: ConstraintGroup, register: impl FnOnce(Self) -> Self) -> Self {
        let outer = self.group.replace(group);
        let mut builder = register(self);
        builder.group = outer;
        builder
    }

    /// Runs `validator` on the whole target when `condition` holds.
    #[must_use = "builder methods must be chained or built"]
    pub fn constraint_on_condition(
        self,
        condition: impl Fn(&T, &ConstraintGroup) -> bool + Send + Sync + 'static,
        validator: Validator<T>,
    ) -> Self {
        self.conditional(Arc::new(condition), validator)
    }

    /// Runs `validator` on the whole target when `group` is requested.
    #[must_use = "builder methods must be chained or built"]
    pub fn constraint_on_group(self, group: ConstraintGroup, validator: Validator<T>) -> Self {
        self.conditional(group.to_condition(), validator)
    }

    fn conditional(mut self, condition: ConstraintCondition<T>, validator: Validator<T>) -> Self {
        self.conditionals
            .push(Box::new(ConditionalEntry::new(condition, validator)));
        self
    }

    // ------------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------------

    /// Replaces the whole configuration.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the locale used by calls that do not name one.
    #[must_use = "builder methods must be chained or built"]
    pub fn default_locale(mut self, locale: Locale) -> Self {
        self.config.default_locale = locale;
        self
    }

    /// Sets the message reported for rejected nulls.
    #[must_use = "builder methods must be chained or built"]
    pub fn not_null_message(mut self, key: impl Into<String>, format: impl Into<String>) -> Self {
        self.config = self.config.with_not_null_message(key, format);
        self
    }

    /// Prepends `prefix` to every violation name.
    #[must_use = "builder methods must be chained or built"]
    pub fn prefixed(mut self, prefix: impl Into<String>) -> Self {
        self.config.prefix = prefix.into();
        self
    }

    /// Sets the formatter used to render messages.
    #[must_use = "builder methods must be chained or built"]
    pub fn message_formatter(mut self, formatter: Arc<dyn MessageFormatter>) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Finishes the validator.
    #[must_use]
    pub fn build(self) -> Validator<T> {
        tracing::debug!(
            chains = self.chains.len(),
            nested = self.nested.len(),
            conditionals = self.conditionals.len(),
            "validator built"
        );
        Validator {
            inner: Arc::new(Inner {
                chains: self.chains,
                nested: self.nested,
                conditionals: self.conditionals,
                config: self.config,
                formatter: self
                    .formatter
                    .unwrap_or_else(|| Arc::new(SimpleMessageFormatter)),
            }),
        }
    }
}

impl<T: 'static> Default for ValidatorBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
