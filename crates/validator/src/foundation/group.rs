//! Constraint groups and conditions.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Label selecting which chains take part in a validation call.
///
/// Chains registered without a group run under every group; chains tagged
/// with a group run only when that group is requested.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConstraintGroup(Cow<'static, str>);

impl ConstraintGroup {
    /// The group used when a call names none.
    pub const DEFAULT: ConstraintGroup = ConstraintGroup(Cow::Borrowed("DEFAULT"));

    /// Creates a group from its identifier.
    pub fn of(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// The group identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// A condition that holds when the requested group equals `self`.
    #[must_use]
    pub fn to_condition<T: 'static>(&self) -> ConstraintCondition<T> {
        let group = self.clone();
        Arc::new(move |_: &T, requested: &ConstraintGroup| *requested == group)
    }

    /// Returns true if a chain tagged with `tag` is live under `self`.
    #[must_use]
    pub fn admits(&self, tag: Option<&ConstraintGroup>) -> bool {
        tag.is_none_or(|tag| tag == self)
    }
}

impl Default for ConstraintGroup {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ConstraintGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Predicate deciding whether a conditional sub-validator runs for a target
/// under the requested group.
pub type ConstraintCondition<T> = Arc<dyn Fn(&T, &ConstraintGroup) -> bool + Send + Sync>;
