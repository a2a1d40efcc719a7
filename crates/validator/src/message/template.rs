//! Positional message templates.
//!
//! Templates use `{0}`, `{1}`, ... placeholders. A single quote starts a
//! literal section that ends at the next single quote, and `''` renders one
//! quote character:
//!
//! ```text
//! "{0}" must be greater than {1}     ->  "age" must be greater than 17
//! '{0}' is literal, {0} is not       ->  {0} is literal, age is not
//! ```
//!
//! Placeholders that do not parse, or point past the end of the argument
//! list, are kept verbatim.

use crate::message::{Locale, MessageArg};

/// A piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplatePart {
    /// Text copied to the output as-is.
    Literal(String),
    /// A reference to the argument at `index`.
    Placeholder {
        /// Zero-based argument index.
        index: usize,
        /// The original `{n}` text, used when the index is out of range.
        raw: String,
    },
}

/// A parsed message template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    parts: Vec<TemplatePart>,
}

impl MessageTemplate {
    /// Parses a template. Parsing never fails; malformed placeholders become
    /// literal text.
    #[must_use]
    pub fn parse(source: &str) -> Self {
        let mut parts = Vec::new();
        let mut literal = String::new();
        let chars: Vec<char> = source.chars().collect();
        let mut i = 0;
        let mut quoted = false;

        while i < chars.len() {
            let c = chars[i];
            if c == '\'' {
                if chars.get(i + 1) == Some(&'\'') {
                    literal.push('\'');
                    i += 2;
                } else {
                    quoted = !quoted;
                    i += 1;
                }
                continue;
            }

            if c == '{' && !quoted {
                if let Some((index, consumed)) = parse_placeholder(&chars[i..]) {
                    if !literal.is_empty() {
                        parts.push(TemplatePart::Literal(std::mem::take(&mut literal)));
                    }
                    parts.push(TemplatePart::Placeholder {
                        index,
                        raw: chars[i..i + consumed].iter().collect(),
                    });
                    i += consumed;
                    continue;
                }
            }

            literal.push(c);
            i += 1;
        }

        if !literal.is_empty() {
            parts.push(TemplatePart::Literal(literal));
        }
        Self { parts }
    }

    /// Returns the parsed parts.
    #[must_use]
    pub fn parts(&self) -> &[TemplatePart] {
        &self.parts
    }

    /// Renders the template with `args`, stringified for `locale`.
    #[must_use]
    pub fn render(&self, args: &[MessageArg], locale: &Locale) -> String {
        let mut out = String::new();
        for part in &self.parts {
            match part {
                TemplatePart::Literal(text) => out.push_str(text),
                TemplatePart::Placeholder { index, raw } => match args.get(*index) {
                    Some(arg) => out.push_str(&arg.render(locale)),
                    None => out.push_str(raw),
                },
            }
        }
        out
    }
}

/// Parses and renders `format` in one step.
#[must_use]
pub fn format_message(format: &str, args: &[MessageArg], locale: &Locale) -> String {
    MessageTemplate::parse(format).render(args, locale)
}

/// Parses `{digits}` at the start of `chars`, returning the index and the
/// number of characters consumed.
fn parse_placeholder(chars: &[char]) -> Option<(usize, usize)> {
    let close = chars.iter().position(|&c| c == '}')?;
    let digits: String = chars[1..close].iter().collect();
    let digits = digits.trim();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok().map(|index| (index, close + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args() -> Vec<MessageArg> {
        vec!["age".into(), 17.into()]
    }

    #[test]
    fn substitutes_positional_arguments() {
        assert_eq!(
            format_message("\"{0}\" must be greater than {1}", &args(), &Locale::ROOT),
            "\"age\" must be greater than 17"
        );
    }

    #[test]
    fn repeated_and_reordered_placeholders() {
        assert_eq!(
            format_message("{1}/{0}/{1}", &args(), &Locale::ROOT),
            "17/age/17"
        );
    }

    #[test]
    fn quotes_escape_placeholders() {
        assert_eq!(
            format_message("'{0}' is literal, {0} isn''t", &args(), &Locale::ROOT),
            "{0} is literal, age isn't"
        );
    }

    #[test]
    fn out_of_range_and_malformed_placeholders_stay_verbatim() {
        assert_eq!(
            format_message("{2} {x} {", &args(), &Locale::ROOT),
            "{2} {x} {"
        );
    }

    #[test]
    fn parse_splits_literals_and_placeholders() {
        let template = MessageTemplate::parse("a{0}b");
        assert_eq!(template.parts().len(), 3);
        assert!(matches!(
            template.parts()[1],
            TemplatePart::Placeholder { index: 0, .. }
        ));
    }
}
