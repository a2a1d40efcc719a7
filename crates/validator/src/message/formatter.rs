//! The message formatting seam.

use crate::message::{Locale, MessageArg, MessageBundles, format_message};

/// Renders the human readable message of a violation.
///
/// Called once per violation while a validation runs, so the resulting
/// violations carry a message baked for the requested locale.
pub trait MessageFormatter: Send + Sync {
    /// Produces the message for `message_key`.
    ///
    /// `default_format` is the constraint's own template, used when the
    /// formatter has nothing better for the key.
    fn format(
        &self,
        message_key: &str,
        default_format: &str,
        args: &[MessageArg],
        locale: &Locale,
    ) -> String;
}

/// Formats every message from its default template.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleMessageFormatter;

impl MessageFormatter for SimpleMessageFormatter {
    fn format(
        &self,
        _message_key: &str,
        default_format: &str,
        args: &[MessageArg],
        locale: &Locale,
    ) -> String {
        format_message(default_format, args, locale)
    }
}

/// Looks message keys up in [`MessageBundles`] before falling back to the
/// default template.
#[derive(Debug, Clone, Default)]
pub struct BundleMessageFormatter {
    bundles: MessageBundles,
}

impl BundleMessageFormatter {
    /// Creates a formatter over `bundles`.
    #[must_use]
    pub fn new(bundles: MessageBundles) -> Self {
        Self { bundles }
    }

    /// Returns the bundles consulted by this formatter.
    #[must_use]
    pub fn bundles(&self) -> &MessageBundles {
        &self.bundles
    }
}

impl MessageFormatter for BundleMessageFormatter {
    fn format(
        &self,
        message_key: &str,
        default_format: &str,
        args: &[MessageArg],
        locale: &Locale,
    ) -> String {
        let format = self
            .bundles
            .resolve(message_key, locale)
            .unwrap_or(default_format);
        format_message(format, args, locale)
    }
}

impl<F> MessageFormatter for F
where
    F: Fn(&str, &str, &[MessageArg], &Locale) -> String + Send + Sync,
{
    fn format(
        &self,
        message_key: &str,
        default_format: &str,
        args: &[MessageArg],
        locale: &Locale,
    ) -> String {
        self(message_key, default_format, args, locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn simple_formatter_uses_default_format() {
        let message = SimpleMessageFormatter.format(
            "numeric.greaterThan",
            "\"{0}\" must be greater than {1}",
            &["count".into(), 1000.into()],
            &Locale::GERMAN,
        );
        assert_eq!(message, "\"count\" must be greater than 1.000");
    }

    #[test]
    fn bundle_formatter_prefers_bundle_entries() {
        let formatter = BundleMessageFormatter::new(MessageBundles::new().with_message(
            Locale::GERMAN,
            "object.notNull",
            "\"{0}\" darf nicht null sein",
        ));
        let args: [MessageArg; 1] = ["name".into()];

        assert_eq!(
            formatter.format("object.notNull", "\"{0}\" must not be null", &args, &Locale::GERMAN),
            "\"name\" darf nicht null sein"
        );
        assert_eq!(
            formatter.format("object.notNull", "\"{0}\" must not be null", &args, &Locale::ENGLISH),
            "\"name\" must not be null"
        );
    }

    #[test]
    fn closures_are_formatters() {
        let upper = |key: &str, _: &str, _: &[MessageArg], _: &Locale| key.to_uppercase();
        assert_eq!(upper.format("a.b", "", &[], &Locale::ROOT), "A.B");
    }
}
