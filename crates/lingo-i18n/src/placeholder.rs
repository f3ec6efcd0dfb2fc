//! `%name%` placeholder substitution.
//!
//! Arguments come in two shapes. Named arguments map a name to a value; the
//! name is wrapped to `%name%` unless the caller already wrapped it.
//! Positional arguments are bound to the distinct `%token%` occurrences of
//! the text, in order of first appearance.
//!
//! # Invariants
//!
//! 1. **Never fails**: a token without a value stays literal.
//! 2. **Single pass**: inserted values are not rescanned, so a value that
//!    itself contains `%name%` is emitted verbatim.
//! 3. **Longest token wins** when two tokens match at the same position.
//! 4. **Positional zip**: with `t` discovered tokens and `v` values, the first
//!    `min(t, v)` tokens are bound. Extra tokens stay literal and extra
//!    values are ignored.

use std::collections::HashMap;
use std::fmt;

/// Token injected by plural resolution.
pub const COUNT_TOKEN: &str = "%count%";

/// Arguments for placeholder substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholders {
    /// `(name, value)` pairs; later duplicates of a name win.
    Named(Vec<(String, String)>),
    /// Values bound to discovered tokens in order.
    Positional(Vec<String>),
}

impl Default for Placeholders {
    fn default() -> Self {
        Self::none()
    }
}

impl Placeholders {
    /// No arguments.
    #[must_use]
    pub fn none() -> Self {
        Self::Named(Vec::new())
    }

    /// Named arguments from `(name, value)` pairs.
    #[must_use]
    pub fn named<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::Named(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Positional arguments.
    #[must_use]
    pub fn positional<V: Into<String>>(values: impl IntoIterator<Item = V>) -> Self {
        Self::Positional(values.into_iter().map(Into::into).collect())
    }

    /// Add one argument. On a named set the value is bound to `name`; on a
    /// positional set `name` is ignored and the value is appended.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl fmt::Display) -> Self {
        match &mut self {
            Self::Named(pairs) => pairs.push((name.into(), value.to_string())),
            Self::Positional(values) => values.push(value.to_string()),
        }
        self
    }

    /// Whether no argument was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Named(pairs) => pairs.is_empty(),
            Self::Positional(values) => values.is_empty(),
        }
    }

    /// Resolve the arguments into `(token, value)` pairs for `text`.
    ///
    /// Tokens listed in `reserved` are skipped during positional discovery.
    fn bindings(&self, text: &str, reserved: &[&str]) -> Vec<(String, String)> {
        match self {
            Self::Named(pairs) => pairs
                .iter()
                .map(|(name, value)| (normalize_name(name), value.clone()))
                .collect(),
            Self::Positional(values) => placeholder_tokens(text)
                .into_iter()
                .filter(|token| !reserved.contains(token))
                .zip(values)
                .map(|(token, value)| (token.to_string(), value.clone()))
                .collect(),
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Placeholders
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        Self::named(pairs)
    }
}

impl<K, V> From<Vec<(K, V)>> for Placeholders
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: Vec<(K, V)>) -> Self {
        Self::named(pairs)
    }
}

/// Wrap `name` as `%name%` unless it is already wrapped.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    if name.len() >= 2 && name.starts_with('%') && name.ends_with('%') {
        name.to_string()
    } else {
        format!("%{name}%")
    }
}

/// Distinct `%token%` occurrences in `text`, in order of first appearance.
///
/// A token body is non-empty and contains neither whitespace nor `%`, so
/// the `%` in `"50% off"` does not open a token.
#[must_use]
pub fn placeholder_tokens(text: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = Vec::new();
    let mut cursor = 0;
    while let Some(open) = text[cursor..].find('%').map(|at| at + cursor) {
        let body_start = open + 1;
        let Some(close) = text[body_start..].find('%').map(|at| at + body_start) else {
            break;
        };
        let body = &text[body_start..close];
        if !body.is_empty() && !body.chars().any(char::is_whitespace) {
            let token = &text[open..=close];
            if !tokens.contains(&token) {
                tokens.push(token);
            }
            cursor = close + 1;
        } else {
            // The closing `%` may open the next token.
            cursor = close;
        }
    }
    tokens
}

/// Substitute `args` into `text`.
///
/// # Example
///
/// ```
/// use lingo_i18n::placeholder::{bind, Placeholders};
///
/// let named = Placeholders::from([("name", "Ada")]);
/// assert_eq!(bind("Hello %name%", &named), "Hello Ada");
///
/// let positional = Placeholders::positional(["3", "apples"]);
/// assert_eq!(bind("%n% %what%, %n% again", &positional), "3 apples, 3 again");
/// ```
#[must_use]
pub fn bind(text: &str, args: &Placeholders) -> String {
    substitute(text, args.bindings(text, &[]))
}

/// Substitute `args` plus a `%count%` binding that overrides any supplied one.
pub(crate) fn bind_with_count(text: &str, args: &Placeholders, count: &str) -> String {
    let mut pairs = args.bindings(text, &[COUNT_TOKEN]);
    pairs.retain(|(token, _)| token != COUNT_TOKEN);
    pairs.push((COUNT_TOKEN.to_string(), count.to_string()));
    substitute(text, pairs)
}

fn substitute(text: &str, pairs: Vec<(String, String)>) -> String {
    if pairs.is_empty() {
        return text.to_string();
    }

    // Later duplicates win; then order longest-first for matching.
    let mut table: Vec<(String, String)> = pairs
        .into_iter()
        .collect::<HashMap<_, _>>()
        .into_iter()
        .collect();
    table.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let mut result = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(at) = rest.find('%') {
        result.push_str(&rest[..at]);
        rest = &rest[at..];
        match table
            .iter()
            .find(|(token, _)| rest.starts_with(token.as_str()))
        {
            Some((token, value)) => {
                result.push_str(value);
                rest = &rest[token.len()..];
            }
            None => {
                result.push('%');
                rest = &rest[1..];
            }
        }
    }
    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_bare_and_wrapped_names() {
        assert_eq!(
            bind("%some% blah blah", &Placeholders::from([("some", "Foo")])),
            "Foo blah blah"
        );
        assert_eq!(
            bind("%some% blah", &Placeholders::from([("%some%", "Foo")])),
            "Foo blah"
        );
    }

    #[test]
    fn named_multiple_and_repeated() {
        let args = Placeholders::from([("some", "Foo"), ("sample", "Bar")]);
        assert_eq!(bind("%some% %sample%", &args), "Foo Bar");
        assert_eq!(
            bind("%x% %x%", &Placeholders::from([("x", "Yada")])),
            "Yada Yada"
        );
    }

    #[test]
    fn unmatched_tokens_stay_literal() {
        let args = Placeholders::from([("a", "1")]);
        assert_eq!(bind("%a% %b% 50% %", &args), "1 %b% 50% %");
        assert_eq!(bind("no tokens", &Placeholders::none()), "no tokens");
    }

    #[test]
    fn values_are_not_rescanned() {
        let args = Placeholders::from([("a", "%b%"), ("b", "B")]);
        assert_eq!(bind("%a%|%b%", &args), "%b%|B");
    }

    #[test]
    fn later_duplicate_name_wins() {
        let args = Placeholders::named([("x", "first"), ("%x%", "second")]);
        assert_eq!(bind("%x%", &args), "second");
    }

    #[test]
    fn longest_token_wins() {
        let args = Placeholders::named([("%a%", "short"), ("%a%b%", "long")]);
        assert_eq!(bind("%a%b%", &args), "long");
    }

    #[test]
    fn builder_accepts_display_values() {
        let args = Placeholders::none().with("n", 42).with("pi", 3.5);
        assert_eq!(bind("%n% / %pi%", &args), "42 / 3.5");
        assert!(!args.is_empty());
        assert!(Placeholders::default().is_empty());
    }

    #[test]
    fn normalize_name_forms() {
        assert_eq!(normalize_name("x"), "%x%");
        assert_eq!(normalize_name("%x%"), "%x%");
        assert_eq!(normalize_name("%x"), "%%x%");
        assert_eq!(normalize_name("%"), "%%%");
        assert_eq!(normalize_name(""), "%%");
    }

    #[test]
    fn token_discovery_order_and_dedup() {
        assert_eq!(
            placeholder_tokens("%b% and %a% then %b% again"),
            ["%b%", "%a%"]
        );
        assert_eq!(placeholder_tokens("50% of %total%"), ["%total%"]);
        assert_eq!(placeholder_tokens("%%x%"), ["%x%"]);
        assert!(placeholder_tokens("100% sure").is_empty());
        assert!(placeholder_tokens("").is_empty());
    }

    #[test]
    fn positional_binds_in_discovery_order() {
        let args = Placeholders::positional(["Ann", "Bob"]);
        assert_eq!(bind("%to% from %from%, to %to%", &args), "Ann from Bob, to Ann");
    }

    #[test]
    fn positional_mismatch_zips_to_shorter() {
        let fewer = Placeholders::positional(["1"]);
        assert_eq!(bind("%a% %b%", &fewer), "1 %b%");

        let more = Placeholders::positional(["1", "2", "3"]);
        assert_eq!(bind("%a% %b%", &more), "1 2");
    }

    #[test]
    fn positional_with_builder_appends() {
        let args = Placeholders::positional(["x"]).with("ignored", "y");
        assert_eq!(args, Placeholders::Positional(vec!["x".into(), "y".into()]));
    }

    #[test]
    fn count_overrides_named_count() {
        let args = Placeholders::from([("count", "wrong"), ("what", "apples")]);
        assert_eq!(bind_with_count("%count% %what%", &args, "3"), "3 apples");
        let args = Placeholders::from([("%count%", "wrong")]);
        assert_eq!(bind_with_count("%count%", &args, "7"), "7");
    }

    #[test]
    fn count_is_skipped_during_positional_discovery() {
        let args = Placeholders::positional(["apples"]);
        assert_eq!(
            bind_with_count("%count% %what%", &args, "3"),
            "3 apples"
        );
    }

    #[test]
    fn multibyte_text_is_preserved() {
        let args = Placeholders::from([("n", "3")]);
        assert_eq!(bind("%n% jabłka … ok", &args), "3 jabłka … ok");
    }
}
