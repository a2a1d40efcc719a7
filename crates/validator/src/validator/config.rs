//! Validator configuration.

use crate::constraints::{NOT_NULL_FORMAT, NOT_NULL_KEY};
use crate::message::Locale;
use serde::{Deserialize, Serialize};

/// Settings fixed when a validator is built.
///
/// Deserializes from a partial document; missing fields keep their defaults.
///
/// ```rust,ignore
/// let config: ValidatorConfig = serde_json::from_str(r#"{ "default_locale": "de" }"#)?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Locale used by calls that do not name one.
    pub default_locale: Locale,
    /// Message key reported for a rejected null.
    pub not_null_message_key: String,
    /// Default format reported for a rejected null.
    pub not_null_message_format: String,
    /// Path prepended to every violation name.
    pub prefix: String,
}

impl ValidatorConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default locale.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_default_locale(mut self, locale: Locale) -> Self {
        self.default_locale = locale;
        self
    }

    /// Sets the not-null message key and format.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_not_null_message(
        mut self,
        key: impl Into<String>,
        format: impl Into<String>,
    ) -> Self {
        self.not_null_message_key = key.into();
        self.not_null_message_format = format.into();
        self
    }

    /// Sets the name prefix.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            default_locale: Locale::ROOT,
            not_null_message_key: NOT_NULL_KEY.to_string(),
            not_null_message_format: NOT_NULL_FORMAT.to_string(),
            prefix: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_documents_keep_defaults() {
        let config: ValidatorConfig =
            serde_json::from_str(r#"{ "default_locale": "de_DE", "prefix": "form" }"#).unwrap();
        assert_eq!(config.default_locale, Locale::new("de").with_country("DE"));
        assert_eq!(config.prefix, "form");
        assert_eq!(config.not_null_message_key, "object.notNull");
    }

    #[test]
    fn round_trips_through_json() {
        let config = ValidatorConfig::new()
            .with_default_locale(Locale::JAPANESE)
            .with_not_null_message("required", "{0} is required");
        let json = serde_json::to_string(&config).unwrap();
        let back: ValidatorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
