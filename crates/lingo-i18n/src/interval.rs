//! ISO 31-11 interval expressions embedded in plural messages.
//!
//! Two forms are recognized:
//!
//! | Form  | Example        | Contains `n` when            |
//! |-------|----------------|------------------------------|
//! | Set   | `{0, 1, 2.5}`  | `n` equals any listed number |
//! | Range | `]1,19]`       | `1 < n <= 19`                |
//!
//! A `[` on the left and a `]` on the right close the range; the mirrored
//! brackets open it. Endpoints accept `-Inf`, `Inf` and `+Inf`.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Malformed text | Neither form matches | `I18nError::InvalidInterval` |
//! | `-Inf` on the right, `+Inf` on the left | Grammar only allows the sensible side | `InvalidInterval` |
//! | Trailing text after a whole-string parse | e.g. `[1,2] x` | `InvalidInterval` |

use std::fmt;
use std::str::FromStr;

use crate::error::I18nError;

/// A parsed interval expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Interval {
    /// Discrete set of numbers.
    Set(Vec<f64>),
    /// Range with independently open or closed ends.
    Range {
        left: f64,
        left_inclusive: bool,
        right: f64,
        right_inclusive: bool,
    },
}

impl Interval {
    /// Parse a complete interval expression, ignoring surrounding whitespace.
    pub fn parse(text: &str) -> Result<Self, I18nError> {
        match Self::parse_prefix(text.trim()) {
            Some((interval, rest)) if rest.is_empty() => Ok(interval),
            _ => Err(I18nError::InvalidInterval(text.to_string())),
        }
    }

    /// Parse an interval at the start of `text` and return the text that
    /// follows it, with leading whitespace removed.
    ///
    /// Returns `None` when `text` does not begin with a well-formed interval.
    #[must_use]
    pub fn parse_prefix(text: &str) -> Option<(Self, &str)> {
        let mut scanner = Scanner::new(text);
        let interval = match scanner.peek()? {
            b'{' => scanner.set()?,
            b'[' | b']' => scanner.range()?,
            _ => return None,
        };
        Some((interval, text[scanner.pos..].trim_start()))
    }

    /// Whether `n` lies inside the interval.
    #[must_use]
    pub fn contains(&self, n: f64) -> bool {
        match self {
            Self::Set(values) => values.iter().any(|&v| v == n),
            Self::Range {
                left,
                left_inclusive,
                right,
                right_inclusive,
            } => {
                let above = if *left_inclusive { n >= *left } else { n > *left };
                let below = if *right_inclusive {
                    n <= *right
                } else {
                    n < *right
                };
                above && below
            }
        }
    }
}

impl FromStr for Interval {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Set(values) => {
                f.write_str("{")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write_bound(f, *v)?;
                }
                f.write_str("}")
            }
            Self::Range {
                left,
                left_inclusive,
                right,
                right_inclusive,
            } => {
                f.write_str(if *left_inclusive { "[" } else { "]" })?;
                write_bound(f, *left)?;
                f.write_str(",")?;
                write_bound(f, *right)?;
                f.write_str(if *right_inclusive { "]" } else { "[" })
            }
        }
    }
}

fn write_bound(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    if v == f64::INFINITY {
        f.write_str("+Inf")
    } else if v == f64::NEG_INFINITY {
        f.write_str("-Inf")
    } else {
        write!(f, "{v}")
    }
}

/// Byte scanner over the ASCII interval grammar.
struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn eat_keyword(&mut self, keyword: &str) -> bool {
        if self.bytes[self.pos..].starts_with(keyword.as_bytes()) {
            self.pos += keyword.len();
            true
        } else {
            false
        }
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    /// `{ number (, number)* }`
    fn set(&mut self) -> Option<Interval> {
        self.eat(b'{');
        self.skip_ws();
        let mut values = vec![self.number()?];
        loop {
            self.skip_ws();
            if self.eat(b'}') {
                return Some(Interval::Set(values));
            }
            if !self.eat(b',') {
                return None;
            }
            self.skip_ws();
            values.push(self.number()?);
        }
    }

    /// `[|] left , right [|]`
    fn range(&mut self) -> Option<Interval> {
        let left_inclusive = self.peek()? == b'[';
        self.pos += 1;
        self.skip_ws();
        let left = if self.eat_keyword("-Inf") {
            f64::NEG_INFINITY
        } else {
            self.number()?
        };
        self.skip_ws();
        if !self.eat(b',') {
            return None;
        }
        self.skip_ws();
        let right = if self.eat_keyword("+Inf") || self.eat_keyword("Inf") {
            f64::INFINITY
        } else {
            self.number()?
        };
        self.skip_ws();
        let right_inclusive = match self.peek()? {
            b']' => true,
            b'[' => false,
            _ => return None,
        };
        self.pos += 1;
        Some(Interval::Range {
            left,
            left_inclusive,
            right,
            right_inclusive,
        })
    }

    /// `-? digits (. digits)?`
    fn number(&mut self) -> Option<f64> {
        let start = self.pos;
        self.eat(b'-');
        let int_start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        if self.pos == int_start {
            self.pos = start;
            return None;
        }
        if self.peek() == Some(b'.')
            && self
                .bytes
                .get(self.pos + 1)
                .is_some_and(|b| b.is_ascii_digit())
        {
            self.pos += 1;
            while self.peek().is_some_and(|b| b.is_ascii_digit()) {
                self.pos += 1;
            }
        }
        std::str::from_utf8(&self.bytes[start..self.pos])
            .ok()?
            .parse()
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains(expr: &str, n: f64) -> bool {
        Interval::parse(expr).unwrap().contains(n)
    }

    #[test]
    fn set_matches_listed_numbers_only() {
        assert!(contains("{0}", 0.0));
        assert!(contains("{1,2, 3}", 3.0));
        assert!(contains("{ 1 , 2 }", 2.0));
        assert!(!contains("{1,2,3}", 4.0));
        assert!(contains("{2.5}", 2.5));
        assert!(contains("{-1}", -1.0));
    }

    #[test]
    fn set_equality_is_numeric() {
        assert!(contains("{0.0}", 0.0));
        assert!(contains("{0}", -0.0));
    }

    #[test]
    fn closed_and_open_ends() {
        assert!(contains("[1,19]", 1.0));
        assert!(contains("[1,19]", 19.0));
        assert!(!contains("]1,19]", 1.0));
        assert!(contains("]1,19]", 19.0));
        assert!(contains("[1,19[", 1.0));
        assert!(!contains("[1,19[", 19.0));
        assert!(!contains("]1,19[", 1.0));
        assert!(!contains("]1,19[", 19.0));
        assert!(contains("]1,19[", 1.5));
    }

    #[test]
    fn infinite_bounds() {
        assert!(contains("[20,Inf]", 1e300));
        assert!(contains("[20,+Inf[", 20.0));
        assert!(contains("[-Inf,0[", -10.0));
        assert!(!contains("[-Inf,0[", 0.0));
        assert!(contains("]-Inf,+Inf[", 0.0));
    }

    #[test]
    fn infinity_is_ieee_not_sentinel() {
        match Interval::parse("[-Inf,Inf]").unwrap() {
            Interval::Range { left, right, .. } => {
                assert_eq!(left, f64::NEG_INFINITY);
                assert_eq!(right, f64::INFINITY);
            }
            other => panic!("expected range, got {other:?}"),
        }
        assert!(contains("[-Inf,Inf]", f64::MAX));
    }

    #[test]
    fn whitespace_inside_range() {
        assert!(contains("[ 1 , 5 ]", 3.0));
        assert!(contains("  ]0,1]  ", 1.0));
    }

    #[test]
    fn malformed_is_an_error() {
        for bad in [
            "", "{}", "{1,}", "{a}", "[1]", "[1,2", "1,2]", "[Inf,2]", "[1,-Inf]", "(1,2)",
            "[1,2] tail", "{1 2}", "[1.,2]",
        ] {
            assert!(
                matches!(Interval::parse(bad), Err(I18nError::InvalidInterval(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn prefix_returns_remaining_text() {
        let (interval, rest) = Interval::parse_prefix("]1,19] %count% items").unwrap();
        assert_eq!(rest, "%count% items");
        assert!(interval.contains(2.0));

        let (_, rest) = Interval::parse_prefix("{0}none").unwrap();
        assert_eq!(rest, "none");

        assert!(Interval::parse_prefix("one: apple").is_none());
        assert!(Interval::parse_prefix("[oops] apples").is_none());
    }

    #[test]
    fn from_str_and_display() {
        let interval: Interval = "]1 ,19]".parse().unwrap();
        assert_eq!(interval.to_string(), "]1,19]");
        assert_eq!(
            Interval::parse("[-Inf,Inf[").unwrap().to_string(),
            "[-Inf,+Inf["
        );
        assert_eq!(Interval::parse("{0, 1.5}").unwrap().to_string(), "{0,1.5}");
    }
}
