//! Locale identifiers and their fallback chain.
//!
//! A [`Locale`] is a language plus an optional country. Message lookup walks
//! from the most specific locale to the root locale:
//!
//! ```text
//! de_CH  ->  de  ->  (root)
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Error returned when a locale tag cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleParseError {
    /// The tag was empty.
    #[error("locale tag must not be empty")]
    Empty,

    /// The language subtag is not alphabetic.
    #[error("invalid language subtag '{0}'")]
    InvalidLanguage(String),

    /// The country subtag is not alphanumeric.
    #[error("invalid country subtag '{0}'")]
    InvalidCountry(String),
}

/// A language with an optional country, e.g. `en`, `en_US`, `de_CH`.
///
/// Language subtags are stored lowercase and country subtags uppercase, so
/// `"EN-us"` and `"en_US"` compare equal once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale {
    language: Cow<'static, str>,
    country: Option<Cow<'static, str>>,
}

impl Locale {
    /// The root locale. Every fallback chain ends here.
    pub const ROOT: Locale = Locale {
        language: Cow::Borrowed(""),
        country: None,
    };

    /// English without a country.
    pub const ENGLISH: Locale = Locale::from_static("en");

    /// German without a country.
    pub const GERMAN: Locale = Locale::from_static("de");

    /// French without a country.
    pub const FRENCH: Locale = Locale::from_static("fr");

    /// Japanese without a country.
    pub const JAPANESE: Locale = Locale::from_static("ja");

    /// Builds a country-less locale from a static, already lowercase language.
    #[must_use]
    pub const fn from_static(language: &'static str) -> Self {
        Self {
            language: Cow::Borrowed(language),
            country: None,
        }
    }

    /// Creates a locale for a language.
    pub fn new(language: impl Into<Cow<'static, str>>) -> Self {
        Self {
            language: Cow::Owned(language.into().to_ascii_lowercase()),
            country: None,
        }
    }

    /// Adds a country subtag.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_country(mut self, country: impl Into<Cow<'static, str>>) -> Self {
        self.country = Some(Cow::Owned(country.into().to_ascii_uppercase()));
        self
    }

    /// Returns the language subtag (empty for the root locale).
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Returns the country subtag, if any.
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Returns true for the root locale.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.language.is_empty()
    }

    /// Returns this locale followed by each less specific locale, ending with
    /// [`Locale::ROOT`].
    #[must_use]
    pub fn fallback_chain(&self) -> Vec<Locale> {
        let mut chain = Vec::with_capacity(3);
        if self.country.is_some() {
            chain.push(self.clone());
        }
        if !self.is_root() {
            chain.push(Locale {
                language: self.language.clone(),
                country: None,
            });
        }
        chain.push(Locale::ROOT);
        chain
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::ROOT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.country {
            Some(country) => write!(f, "{}_{}", self.language, country),
            None => f.write_str(&self.language),
        }
    }
}

impl FromStr for Locale {
    type Err = LocaleParseError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(LocaleParseError::Empty);
        }
        if tag.eq_ignore_ascii_case("root") {
            return Ok(Locale::ROOT);
        }

        let mut parts = tag.splitn(2, ['_', '-']);
        let language = parts.next().unwrap_or_default();
        if language.is_empty() || !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(LocaleParseError::InvalidLanguage(language.to_string()));
        }

        let locale = Locale::new(language.to_string());
        match parts.next() {
            None => Ok(locale),
            Some(country) if !country.is_empty() && country.chars().all(|c| c.is_ascii_alphanumeric()) => {
                Ok(locale.with_country(country.to_string()))
            }
            Some(country) => Err(LocaleParseError::InvalidCountry(country.to_string())),
        }
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_root() {
            serializer.serialize_str("root")
        } else {
            serializer.collect_str(self)
        }
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_language_and_country() {
        let locale: Locale = "en-us".parse().unwrap();
        assert_eq!(locale.language(), "en");
        assert_eq!(locale.country(), Some("US"));
        assert_eq!(locale.to_string(), "en_US");
    }

    #[test]
    fn rejects_malformed_tags() {
        assert_eq!("".parse::<Locale>(), Err(LocaleParseError::Empty));
        assert!(matches!(
            "e1".parse::<Locale>(),
            Err(LocaleParseError::InvalidLanguage(_))
        ));
        assert!(matches!(
            "en_".parse::<Locale>(),
            Err(LocaleParseError::InvalidCountry(_))
        ));
    }

    #[test]
    fn fallback_chain_ends_at_root() {
        let chain = Locale::new("de").with_country("CH").fallback_chain();
        assert_eq!(
            chain,
            vec![
                Locale::new("de").with_country("CH"),
                Locale::GERMAN,
                Locale::ROOT
            ]
        );
        assert_eq!(Locale::ROOT.fallback_chain(), vec![Locale::ROOT]);
    }

    #[test]
    fn serde_uses_tag_strings() {
        let locale: Locale = serde_json::from_str("\"fr_CA\"").unwrap();
        assert_eq!(locale, Locale::FRENCH.with_country("CA"));
        assert_eq!(serde_json::to_string(&Locale::ROOT).unwrap(), "\"root\"");
    }
}
