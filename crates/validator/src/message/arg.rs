//! Message arguments and their locale-aware rendering.

use crate::message::Locale;
use chrono::{DateTime, Utc};
use std::borrow::Cow;
use std::fmt;

/// A positional argument substituted into a message template.
///
/// Numbers and date-times keep their type so they can be rendered with the
/// conventions of the locale a message is produced for.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageArg {
    /// Text, rendered verbatim.
    Text(Cow<'static, str>),
    /// A signed integer.
    Int(i64),
    /// An unsigned integer.
    UInt(u64),
    /// A floating point number.
    Float(f64),
    /// A boolean.
    Bool(bool),
    /// A UTC timestamp.
    DateTime(DateTime<Utc>),
    /// An absent value.
    Null,
}

impl MessageArg {
    /// Renders the argument for `locale`.
    #[must_use]
    pub fn render(&self, locale: &Locale) -> String {
        let symbols = NumberSymbols::for_locale(locale);
        match self {
            Self::Text(text) => text.to_string(),
            Self::Int(value) => {
                let digits = group_digits(&value.unsigned_abs().to_string(), symbols.grouping);
                if *value < 0 {
                    format!("-{digits}")
                } else {
                    digits
                }
            }
            Self::UInt(value) => group_digits(&value.to_string(), symbols.grouping),
            Self::Float(value) => render_float(*value, symbols),
            Self::Bool(value) => value.to_string(),
            Self::DateTime(value) => render_date_time(value, locale),
            Self::Null => "null".to_string(),
        }
    }

    /// Returns the text payload, if this is a text argument.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for MessageArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Locale::ROOT))
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<&'static str> for MessageArg {
    fn from(value: &'static str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl From<String> for MessageArg {
    fn from(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }
}

impl From<Cow<'static, str>> for MessageArg {
    fn from(value: Cow<'static, str>) -> Self {
        Self::Text(value)
    }
}

impl From<char> for MessageArg {
    fn from(value: char) -> Self {
        Self::Text(Cow::Owned(value.to_string()))
    }
}

impl From<bool> for MessageArg {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<DateTime<Utc>> for MessageArg {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

impl<T: Into<MessageArg>> From<Option<T>> for MessageArg {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

macro_rules! impl_from_int {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for MessageArg {
                fn from(value: $source) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

impl_from_int!(Int as i64: i8, i16, i32, i64);
impl_from_int!(UInt as u64: u8, u16, u32, u64);

impl From<isize> for MessageArg {
    fn from(value: isize) -> Self {
        Self::Int(value as i64)
    }
}

impl From<usize> for MessageArg {
    fn from(value: usize) -> Self {
        Self::UInt(value as u64)
    }
}

impl From<f32> for MessageArg {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for MessageArg {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

// ============================================================================
// LOCALE CONVENTIONS
// ============================================================================

#[derive(Debug, Clone, Copy)]
struct NumberSymbols {
    grouping: char,
    decimal: char,
}

impl NumberSymbols {
    fn for_locale(locale: &Locale) -> Self {
        match locale.language() {
            "de" | "es" | "it" | "nl" | "pt" | "tr" | "id" | "da" => Self {
                grouping: '.',
                decimal: ',',
            },
            "fr" | "ru" | "pl" | "cs" | "sv" | "nb" | "fi" | "uk" => Self {
                grouping: '\u{a0}',
                decimal: ',',
            },
            _ => Self {
                grouping: ',',
                decimal: '.',
            },
        }
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

fn render_float(value: f64, symbols: NumberSymbols) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let symbol = if value > 0.0 { "∞" } else { "-∞" };
        return symbol.to_string();
    }

    // At most three fraction digits, trailing zeros dropped.
    let fixed = format!("{:.3}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::new();
    if value.is_sign_negative() && (whole != "0" || !fraction.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_digits(whole, symbols.grouping));
    if !fraction.is_empty() {
        out.push(symbols.decimal);
        out.push_str(fraction);
    }
    out
}

fn render_date_time(value: &DateTime<Utc>, locale: &Locale) -> String {
    let pattern = match locale.language() {
        "en" => "%b %-d, %Y, %-I:%M:%S %p",
        "de" => "%d.%m.%Y, %H:%M:%S",
        "fr" => "%d/%m/%Y %H:%M:%S",
        "ja" => "%Y/%m/%d %H:%M:%S",
        _ => return value.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true),
    };
    value.format(pattern).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn integers_use_locale_grouping() {
        assert_eq!(MessageArg::from(1_234_567).render(&Locale::ROOT), "1,234,567");
        assert_eq!(MessageArg::from(-1_234).render(&Locale::GERMAN), "-1.234");
        assert_eq!(MessageArg::from(999u32).render(&Locale::ENGLISH), "999");
        assert_eq!(
            MessageArg::from(12_000usize).render(&Locale::FRENCH),
            "12\u{a0}000"
        );
    }

    #[test]
    fn integers_widen_without_loss() {
        assert_eq!(MessageArg::from(i64::MIN), MessageArg::Int(i64::MIN));
        assert_eq!(MessageArg::from(-3i8), MessageArg::Int(-3));
        assert_eq!(MessageArg::from(-7isize), MessageArg::Int(-7));
        assert_eq!(MessageArg::from(u64::MAX), MessageArg::UInt(u64::MAX));
        assert_eq!(MessageArg::from(200u8), MessageArg::UInt(200));
        assert_eq!(MessageArg::from(42usize), MessageArg::UInt(42));
    }

    #[test]
    fn floats_drop_trailing_zeros() {
        assert_eq!(MessageArg::from(2.5).render(&Locale::ROOT), "2.5");
        assert_eq!(MessageArg::from(2.5).render(&Locale::GERMAN), "2,5");
        assert_eq!(MessageArg::from(1234.0).render(&Locale::ROOT), "1,234");
        assert_eq!(MessageArg::from(0.12345).render(&Locale::ROOT), "0.123");
        assert_eq!(MessageArg::from(-0.0001).render(&Locale::ROOT), "0");
    }

    #[test]
    fn date_times_follow_locale_patterns() {
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let arg = MessageArg::from(at);
        assert_eq!(arg.render(&Locale::ROOT), "2024-01-15T10:30:00Z");
        assert_eq!(arg.render(&Locale::ENGLISH), "Jan 15, 2024, 10:30:00 AM");
        assert_eq!(arg.render(&Locale::GERMAN), "15.01.2024, 10:30:00");
        assert_eq!(arg.render(&Locale::JAPANESE), "2024/01/15 10:30:00");
    }

    #[test]
    fn options_map_to_null() {
        assert_eq!(MessageArg::from(None::<i32>), MessageArg::Null);
        assert_eq!(MessageArg::from(Some("x")).as_text(), Some("x"));
    }
}
