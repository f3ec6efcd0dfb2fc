//! Message resolution: dictionary chain, plural segment choice, binding.
//!
//! # Plural messages
//!
//! A plural message is a `|`-separated list of segments:
//!
//! ```text
//! {0} no items|{1} one item|]1,19] %count% items|[20,Inf] many items
//! one: %count% apple|other: %count% apples
//! ```
//!
//! Segments starting with an interval are explicit; the first one whose
//! interval contains the count wins. Every other segment is standard, with an
//! optional `label:` prefix that is dropped. When no explicit segment
//! matches, the language's [`PluralRule`] picks a standard segment by
//! position.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing key, strict | Key not in any dictionary | `MissingTranslation` |
//! | Missing key, silent | Key not in any dictionary | Key used as the message |
//! | No form for count | Index past the standard segments, more than one segment | `PluralSelection` |

use std::mem;
use std::sync::Arc;

#[cfg(feature = "tracing")]
use tracing::{debug, trace, warn};

use crate::config::TranslatorConfig;
use crate::dictionary::{Dictionary, MultiDictionary};
use crate::error::I18nError;
use crate::interval::Interval;
use crate::locale::Locale;
use crate::placeholder::{self, Placeholders};
use crate::plural::PluralRule;

/// Resolves keys into localized, pluralized, substituted strings.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use lingo_i18n::{MapDictionary, MultiDictionary, Placeholders, Translator};
///
/// let apples = MapDictionary::with_entries(
///     "en",
///     [("apples", "{0} no apples|one: one apple|other: %count% apples")],
/// );
/// let mut translator = Translator::new("en", MultiDictionary::new("en"));
/// translator.add_dictionary(Arc::new(apples), None);
///
/// let none = Placeholders::none();
/// assert_eq!(translator.translate_plural("apples", 0, &none).unwrap(), "no apples");
/// assert_eq!(translator.translate_plural("apples", 1, &none).unwrap(), "one apple");
/// assert_eq!(translator.translate_plural("apples", 7, &none).unwrap(), "7 apples");
/// ```
#[derive(Debug, Clone)]
pub struct Translator {
    language: String,
    rule: PluralRule,
    dictionary: MultiDictionary,
    silent: bool,
}

impl Translator {
    /// Strict translator for `language` over `dictionary`.
    #[must_use]
    pub fn new(language: impl Into<String>, dictionary: MultiDictionary) -> Self {
        let language = language.into();
        Self {
            rule: PluralRule::for_language(&language),
            language,
            dictionary,
            silent: false,
        }
    }

    /// Translator configured from a [`TranslatorConfig`].
    #[must_use]
    pub fn with_config(config: TranslatorConfig, dictionary: MultiDictionary) -> Self {
        let mut translator = Self::new(config.language, dictionary);
        translator.silent = config.silent;
        translator
    }

    /// Strict translator using the tag of `locale` as its language.
    #[must_use]
    pub fn for_locale(locale: &Locale, dictionary: MultiDictionary) -> Self {
        Self::new(locale.as_str(), dictionary)
    }

    /// Language tag used for plural rules and error reports.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Switch language; the plural rule follows.
    pub fn set_language(&mut self, language: impl Into<String>) -> &mut Self {
        self.language = language.into();
        self.rule = PluralRule::for_language(&self.language);
        self
    }

    /// Plural rule selected for the current language.
    #[must_use]
    pub fn plural_rule(&self) -> PluralRule {
        self.rule
    }

    #[must_use]
    pub fn is_silent(&self) -> bool {
        self.silent
    }

    /// In silent mode a missing key resolves to the key itself.
    pub fn set_silent(&mut self, silent: bool) -> &mut Self {
        self.silent = silent;
        self
    }

    /// The dictionary chain.
    #[must_use]
    pub fn dictionary(&self) -> &MultiDictionary {
        &self.dictionary
    }

    /// Mutable access to the chain (local entries, reordering).
    pub fn dictionary_mut(&mut self) -> &mut MultiDictionary {
        &mut self.dictionary
    }

    /// Replace the chain, returning the previous one.
    pub fn set_dictionary(&mut self, dictionary: MultiDictionary) -> MultiDictionary {
        mem::replace(&mut self.dictionary, dictionary)
    }

    /// Register a dictionary. With `priority`, it is spliced in at that
    /// position of the chain (clamped to the chain length); without, it is
    /// appended and consulted last.
    pub fn add_dictionary(
        &mut self,
        dictionary: Arc<dyn Dictionary>,
        priority: Option<usize>,
    ) -> &mut Self {
        #[cfg(feature = "tracing")]
        trace!(
            locale = dictionary.locale(),
            priority = ?priority,
            chain_len = self.dictionary.dictionaries().len(),
            "translator: add dictionary"
        );

        match priority {
            Some(index) => self.dictionary.insert_dictionary(index, dictionary),
            None => self.dictionary.add_dictionary(dictionary),
        };
        self
    }

    /// Registered dictionaries in lookup order.
    #[must_use]
    pub fn dictionaries(&self) -> &[Arc<dyn Dictionary>] {
        self.dictionary.dictionaries()
    }

    /// Translate `key` and substitute `args`.
    pub fn translate(&self, key: &str, args: &Placeholders) -> Result<String, I18nError> {
        let text = self.lookup(key)?;
        Ok(placeholder::bind(text, args))
    }

    /// Translate `key`, choose the segment for `count`, and substitute `args`
    /// plus `%count%`.
    pub fn translate_plural(
        &self,
        key: &str,
        count: i64,
        args: &Placeholders,
    ) -> Result<String, I18nError> {
        let message = self.lookup(key)?;
        // Integer counts below 2^53 convert to f64 exactly.
        let segment = self.choose(message, count as f64, count)?;
        Ok(placeholder::bind_with_count(
            segment,
            args,
            &count.to_string(),
        ))
    }

    /// Like [`translate_plural`](Self::translate_plural) for fractional
    /// counts. Intervals compare the exact value; the plural rule sees the
    /// count truncated toward zero.
    pub fn translate_plural_f64(
        &self,
        key: &str,
        count: f64,
        args: &Placeholders,
    ) -> Result<String, I18nError> {
        let message = self.lookup(key)?;
        let segment = self.choose(message, count, count as i64)?;
        Ok(placeholder::bind_with_count(
            segment,
            args,
            &count.to_string(),
        ))
    }

    fn lookup<'a>(&'a self, key: &'a str) -> Result<&'a str, I18nError> {
        if let Some(text) = self.dictionary.get(key) {
            return Ok(text);
        }
        if self.silent {
            #[cfg(feature = "tracing")]
            debug!(key, language = %self.language, "translator: missing translation, using key");
            return Ok(key);
        }
        Err(I18nError::MissingTranslation {
            key: key.to_string(),
            language: self.language.clone(),
        })
    }

    /// Pick the segment of `message` for `count`.
    fn choose<'m>(&self, message: &'m str, count: f64, whole: i64) -> Result<&'m str, I18nError> {
        let mut segments = 0usize;
        let mut standard: Vec<&'m str> = Vec::new();
        let mut explicit: Vec<(Interval, &'m str)> = Vec::new();

        for part in message.split('|').map(str::trim) {
            segments += 1;
            if let Some((interval, text)) = Interval::parse_prefix(part) {
                explicit.push((interval, text));
            } else {
                standard.push(strip_label(part));
            }
        }

        if let Some((_interval, text)) = explicit.iter().find(|(i, _)| i.contains(count)) {
            #[cfg(feature = "tracing")]
            trace!(interval = %_interval, count, "translator: explicit interval matched");
            return Ok(*text);
        }

        let index = self.rule.index(whole);
        if let Some(&text) = standard.get(index) {
            return Ok(text);
        }
        if segments == 1 {
            if let Some(&text) = standard.first() {
                return Ok(text);
            }
        }

        #[cfg(feature = "tracing")]
        warn!(
            language = %self.language,
            count,
            index,
            standard = standard.len(),
            forms = self.rule.form_count(),
            "translator: no plural form for count"
        );
        Err(I18nError::PluralSelection {
            message: message.to_string(),
            language: self.language.clone(),
            count,
        })
    }
}

/// Drop a leading `label:` (word characters, then a colon) and the
/// whitespace after it.
fn strip_label(segment: &str) -> &str {
    let label_len = segment
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
        .count();
    match segment[label_len..].strip_prefix(':') {
        Some(rest) if label_len > 0 => rest.trim_start(),
        _ => segment,
    }
}
