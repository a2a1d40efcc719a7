//! Locale-keyed message bundles.

use crate::message::{Locale, LocaleParseError};
use std::borrow::Cow;
use std::collections::HashMap;

/// Error raised while loading message bundles.
#[derive(Debug, thiserror::Error)]
pub enum MessageBundleError {
    /// The document is not a `{ locale: { key: format } }` JSON object.
    #[error("malformed message bundle document: {0}")]
    Json(#[from] serde_json::Error),

    /// A top-level key is not a locale tag.
    #[error("invalid locale '{tag}' in message bundle: {source}")]
    Locale {
        /// The offending key.
        tag: String,
        /// Why it did not parse.
        #[source]
        source: LocaleParseError,
    },
}

/// Message formats keyed by locale and message key.
///
/// Lookups walk the locale's [fallback chain](Locale::fallback_chain), so a
/// `de_CH` request is answered by `de_CH`, then `de`, then the root bundle.
///
/// # Examples
///
/// ```rust,ignore
/// let bundles = MessageBundles::new()
///     .with_message(Locale::GERMAN, "object.notNull", "\"{0}\" darf nicht null sein");
///
/// let format = bundles.resolve("object.notNull", &"de_CH".parse()?);
/// assert_eq!(format, Some("\"{0}\" darf nicht null sein"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MessageBundles {
    bundles: HashMap<Locale, HashMap<Cow<'static, str>, Cow<'static, str>>>,
}

impl MessageBundles {
    /// Creates an empty set of bundles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one message format.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(
        mut self,
        locale: Locale,
        key: impl Into<Cow<'static, str>>,
        format: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.insert(locale, key, format);
        self
    }

    /// Adds one message format in place.
    pub fn insert(
        &mut self,
        locale: Locale,
        key: impl Into<Cow<'static, str>>,
        format: impl Into<Cow<'static, str>>,
    ) {
        self.bundles
            .entry(locale)
            .or_default()
            .insert(key.into(), format.into());
    }

    /// Loads bundles from a JSON document shaped as
    /// `{ "<locale>": { "<message key>": "<format>" } }`.
    ///
    /// `"root"` names the root bundle.
    pub fn from_json_str(document: &str) -> Result<Self, MessageBundleError> {
        let raw: HashMap<String, HashMap<String, String>> = serde_json::from_str(document)?;
        let mut bundles = Self::new();
        for (tag, messages) in raw {
            let locale: Locale = tag
                .parse()
                .map_err(|source| MessageBundleError::Locale { tag, source })?;
            for (key, format) in messages {
                bundles.insert(locale.clone(), key, format);
            }
        }
        Ok(bundles)
    }

    /// Merges `other` into `self`; entries of `other` win.
    pub fn merge(&mut self, other: MessageBundles) {
        for (locale, messages) in other.bundles {
            self.bundles.entry(locale).or_default().extend(messages);
        }
    }

    /// Resolves `key` for `locale`, falling back to less specific locales.
    #[must_use]
    pub fn resolve(&self, key: &str, locale: &Locale) -> Option<&str> {
        locale.fallback_chain().iter().find_map(|candidate| {
            self.bundles
                .get(candidate)
                .and_then(|messages| messages.get(key))
                .map(AsRef::as_ref)
        })
    }

    /// Returns true if no message is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bundles.values().all(HashMap::is_empty)
    }
}
