//! Translator configuration (deterministic, env-overridable).
//!
//! # Environment Variables
//! - `LINGO_LANG`: language tag used for plural rules (wins over `LANG`)
//! - `LANG`: POSIX locale; `.encoding` and `@modifier` suffixes are dropped,
//!   `C` and `POSIX` are ignored
//! - `LINGO_SILENT` (bool): return the key instead of failing on a miss

use std::env;
use std::fmt;

const ENV_LINGO_LANG: &str = "LINGO_LANG";
const ENV_LANG: &str = "LANG";
const ENV_LINGO_SILENT: &str = "LINGO_SILENT";

/// Translator configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TranslatorConfig {
    /// Language tag (`"en"`, `"pl_PL"`, `"pt_BR"`).
    pub language: String,
    /// Missing keys resolve to the key itself instead of an error.
    pub silent: bool,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            silent: false,
        }
    }
}

/// Configuration parse diagnostics (env + validation).
#[derive(Debug, Clone)]
pub struct TranslatorConfigParse {
    pub config: TranslatorConfig,
    pub errors: Vec<ConfigError>,
}

/// Configuration error with field context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub field: &'static str,
    pub value: String,
    pub message: String,
}

impl ConfigError {
    fn new(field: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.field, self.value, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl TranslatorConfig {
    /// Set the language tag.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set silent mode.
    #[must_use]
    pub fn with_silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    /// Parse config from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with_diagnostics().config
    }

    /// Parse config from environment variables and return diagnostics.
    #[must_use]
    pub fn from_env_with_diagnostics() -> TranslatorConfigParse {
        Self::from_env_with(|key| env::var(key).ok())
    }

    /// Parse config through an arbitrary variable lookup.
    pub fn from_env_with<F>(mut get: F) -> TranslatorConfigParse
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut errors = Vec::new();

        if let Some(value) = get(ENV_LINGO_LANG) {
            match parse_language(&value) {
                Some(parsed) => config.language = parsed,
                None => errors.push(ConfigError::new(
                    "language",
                    value,
                    "expected a language tag such as en or pl_PL",
                )),
            }
        } else if let Some(parsed) = get(ENV_LANG).as_deref().and_then(parse_language) {
            config.language = parsed;
        }

        if let Some(value) = get(ENV_LINGO_SILENT) {
            match parse_bool(&value) {
                Some(parsed) => config.silent = parsed,
                None => errors.push(ConfigError::new(
                    "silent",
                    value,
                    "expected bool (1/0/true/false)",
                )),
            }
        }

        TranslatorConfigParse { config, errors }
    }

    /// Validate config constraints and return all violations.
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();
        if self.language.trim().is_empty() {
            errors.push(ConfigError::new(
                "language",
                self.language.clone(),
                "must not be empty",
            ));
        }
        if self.language.chars().any(char::is_whitespace) {
            errors.push(ConfigError::new(
                "language",
                self.language.clone(),
                "must not contain whitespace",
            ));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Strip `.encoding` / `@modifier` from a POSIX locale and reject the
/// portable `C`/`POSIX` locales.
fn parse_language(value: &str) -> Option<String> {
    let base = value
        .trim()
        .split(['.', '@'])
        .next()
        .unwrap_or_default();
    if base.is_empty() || base == "C" || base == "POSIX" {
        return None;
    }
    if !base
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return None;
    }
    Some(base.to_string())
}

#[inline]
fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
