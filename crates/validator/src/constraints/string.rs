//! String constraints.

use super::{EMAIL_KEY, NOT_BLANK_KEY, NOT_EMPTY_KEY, PATTERN_KEY, max_size, min_size};
use crate::foundation::{Constraint, ConstraintsBuilder};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is a valid regex")
});

/// Length in Unicode scalar values.
fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Anchors `regex` at both ends of the input. A regex whose anchored form
/// does not compile (a verbose-mode trailing comment, for one) is kept as is.
fn whole_match(regex: Regex) -> Regex {
    match Regex::new(&format!(r"\A(?:{})\z", regex.as_str())) {
        Ok(anchored) => anchored,
        Err(error) => {
            tracing::debug!(pattern = regex.as_str(), %error, "pattern kept unanchored");
            regex
        }
    }
}

impl ConstraintsBuilder<str> {
    /// Requires at least one character.
    #[must_use = "builder methods must be chained or built"]
    pub fn not_empty(self) -> Self {
        self.constraint(Constraint::new(
            |s: &str| !s.is_empty(),
            NOT_EMPTY_KEY,
            "\"{0}\" must not be empty",
        ))
    }

    /// Requires at least one non-whitespace character.
    #[must_use = "builder methods must be chained or built"]
    pub fn not_blank(self) -> Self {
        self.constraint(Constraint::new(
            |s: &str| !s.trim().is_empty(),
            NOT_BLANK_KEY,
            "\"{0}\" must not be blank",
        ))
    }

    /// Requires at least `min` characters.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_length(self, min: usize) -> Self {
        self.constraint(min_size(min, char_len))
    }

    /// Allows at most `max` characters.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_length(self, max: usize) -> Self {
        self.constraint(max_size(max, char_len))
    }

    /// Requires the whole value to match `regex`, as if it were wrapped in
    /// `^(?:...)$`. The violation shows the regex as given.
    #[must_use = "builder methods must be chained or built"]
    pub fn pattern(self, regex: Regex) -> Self {
        let shown = regex.as_str().to_string();
        let whole = whole_match(regex);
        self.constraint(
            Constraint::new(move |s: &str| whole.is_match(s), PATTERN_KEY, "\"{0}\" must match {1}")
                .with_args(move |s: &str| vec![shown.clone().into(), s.to_string().into()]),
        )
    }

    /// Requires a syntactically valid email address. Empty strings pass, so
    /// combine with [`not_empty`](Self::not_empty) when the address is
    /// mandatory.
    #[must_use = "builder methods must be chained or built"]
    pub fn email(self) -> Self {
        self.constraint(Constraint::new(
            |s: &str| s.is_empty() || EMAIL_REGEX.is_match(s),
            EMAIL_KEY,
            "\"{0}\" must be a valid email address",
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::foundation::{ConstraintsBuilder, NullPolicy};
    use regex::Regex;
    use rstest::rstest;

    fn passes(build: impl FnOnce(ConstraintsBuilder<str>) -> ConstraintsBuilder<str>, value: &str) -> bool {
        build(ConstraintsBuilder::new())
            .build()
            .iter()
            .all(|c| c.test(value))
    }

    #[rstest]
    #[case("", false)]
    #[case("   ", true)]
    #[case("a", true)]
    fn not_empty(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(passes(|c| c.not_empty(), value), expected);
    }

    #[rstest]
    #[case("", false)]
    #[case(" \t", false)]
    #[case(" a ", true)]
    fn not_blank(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(passes(|c| c.not_blank(), value), expected);
    }

    #[test]
    fn lengths_count_scalar_values() {
        assert!(passes(|c| c.max_length(3), "日本語"));
        assert!(!passes(|c| c.max_length(2), "日本語"));
        assert!(passes(|c| c.min_length(3), "日本語"));
    }

    #[rstest]
    #[case("user@example.com", true)]
    #[case("", true)]
    #[case("not-an-email", false)]
    #[case("a@b", true)]
    #[case("a@@b.com", false)]
    fn email(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(passes(|c| c.email(), value), expected);
    }

    #[rstest]
    #[case("[a-z]+", "abc", true)]
    #[case("[a-z]+", "abc1", false)]
    #[case("[a-z]+", "1abc", false)]
    #[case("a|ab", "ab", true)]
    #[case("^[0-9]{3}$", "123", true)]
    fn pattern_matches_the_whole_value(#[case] regex: &str, #[case] value: &str, #[case] expected: bool) {
        assert_eq!(passes(|c| c.pattern(Regex::new(regex).unwrap()), value), expected);
    }

    #[test]
    fn pattern_reports_regex_as_argument() {
        let constraints = ConstraintsBuilder::<str>::new()
            .pattern(Regex::new("^[0-9]{3}$").unwrap())
            .build();
        assert!(constraints[0].test("123"));
        assert!(!constraints[0].test("12a"));
        assert_eq!(constraints[0].null_policy(), NullPolicy::AcceptNull);
    }
}
