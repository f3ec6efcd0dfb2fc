//! Error type shared by every resolution step.

use std::fmt;

/// Errors from i18n operations.
#[derive(Debug, Clone, PartialEq)]
pub enum I18nError {
    /// An interval expression matched neither the set nor the range form.
    InvalidInterval(String),
    /// The key is absent from every dictionary in the chain (strict mode only).
    MissingTranslation { key: String, language: String },
    /// No standard segment exists at the category index of the count.
    PluralSelection {
        message: String,
        language: String,
        count: f64,
    },
    /// A locale tag was malformed or has no known default territory.
    InvalidLocale(String),
}

impl fmt::Display for I18nError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInterval(text) => write!(f, "\"{text}\" is not a valid interval"),
            Self::MissingTranslation { key, language } => {
                write!(f, "missing translation for '{key}' in language '{language}'")
            }
            Self::PluralSelection {
                message,
                language,
                count,
            } => write!(
                f,
                "unable to choose a translation for \"{message}\" with language '{language}' and count {count}"
            ),
            Self::InvalidLocale(tag) => write!(f, "invalid locale: {tag}"),
        }
    }
}

impl std::error::Error for I18nError {}
