//! Locale tags and the per-locale values formatters need.
//!
//! A [`Locale`] is a plain value: the tag, the timezone and the currency
//! sub-unit travel with it and are handed to whatever formats numbers or
//! dates. Nothing here touches process-wide state.

use std::fmt;
use std::str::FromStr;

use crate::error::I18nError;

/// Default territory for a bare language code.
const DEFAULT_TERRITORIES: &[(&str, &str)] = &[
    ("az", "az_AZ"),
    ("bg", "bg_BG"),
    ("de", "de_DE"),
    ("en", "en_US"),
    ("es", "es_ES"),
    ("fi", "fi_FI"),
    ("fo", "fo_FO"),
    ("fr", "fr_FR"),
    ("hr", "hr_HR"),
    ("ht", "ht_HT"),
    ("hu", "hu_HU"),
    ("id", "id_ID"),
    ("is", "is_IS"),
    ("it", "it_IT"),
    ("lt", "lt_LT"),
    ("lv", "lv_LV"),
    ("mg", "mg_MG"),
    ("mk", "mk_MK"),
    ("mn", "mn_MN"),
    ("mt", "mt_MT"),
    ("nl", "nl_NL"),
    ("pl", "pl_PL"),
    ("pt", "pt_PT"),
    ("ro", "ro_RO"),
    ("ru", "ru_RU"),
    ("rw", "rw_RW"),
    ("sk", "sk_SK"),
    ("so", "so_SO"),
    ("th", "th_TH"),
    ("tr", "tr_TR"),
    ("uz", "uz_UZ"),
];

/// A `language_TERRITORY` locale (e.g. `en_US`, `arn_CL`).
///
/// # Example
///
/// ```
/// use lingo_i18n::Locale;
///
/// let locale = Locale::parse("en-GB").unwrap();
/// assert_eq!(locale.as_str(), "en_GB");
/// assert_eq!(locale.language(), "en");
/// assert_eq!(locale.territory(), "GB");
/// assert_eq!(locale.timezone(), "UTC");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "LocaleRepr", into = "LocaleRepr"))]
pub struct Locale {
    tag: String,
    split: usize,
    timezone: String,
    currency_sub_unit: u32,
}

impl Locale {
    pub const DEFAULT_TIMEZONE: &'static str = "UTC";
    pub const DEFAULT_CURRENCY_SUB_UNIT: u32 = 100;

    /// Parse `xx_YY`, `xx-YY`, `xxx_YY` or `xxx-YY`.
    pub fn parse(tag: &str) -> Result<Self, I18nError> {
        let bytes = tag.as_bytes();
        let split = bytes
            .iter()
            .position(|&b| b == b'_' || b == b'-')
            .ok_or_else(|| I18nError::InvalidLocale(tag.to_string()))?;
        let (language, territory) = (&bytes[..split], &bytes[split + 1..]);

        let language_ok = (2..=3).contains(&language.len())
            && language.iter().all(u8::is_ascii_lowercase);
        let territory_ok = territory.len() == 2 && territory.iter().all(u8::is_ascii_uppercase);
        if !language_ok || !territory_ok {
            return Err(I18nError::InvalidLocale(tag.to_string()));
        }

        Ok(Self {
            tag: format!("{}_{}", &tag[..split], &tag[split + 1..]),
            split,
            timezone: Self::DEFAULT_TIMEZONE.to_string(),
            currency_sub_unit: Self::DEFAULT_CURRENCY_SUB_UNIT,
        })
    }

    /// Locale for a bare language code using its default territory
    /// (`"pl"` → `pl_PL`).
    pub fn for_language(language: &str) -> Result<Self, I18nError> {
        DEFAULT_TERRITORIES
            .iter()
            .find(|(code, _)| *code == language)
            .ok_or_else(|| I18nError::InvalidLocale(language.to_string()))
            .and_then(|(_, tag)| Self::parse(tag))
    }

    /// Set the timezone identifier (e.g. `"Europe/Berlin"`).
    #[must_use]
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    /// Set the divisor that turns integer currency amounts into decimals.
    #[must_use]
    pub fn with_currency_sub_unit(mut self, sub_unit: u32) -> Self {
        self.currency_sub_unit = sub_unit;
        self
    }

    /// Normalized tag, always `_`-separated.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.tag
    }

    /// `"en"` for `en_US`.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.tag[..self.split]
    }

    /// `"US"` for `en_US`.
    #[must_use]
    pub fn territory(&self) -> &str {
        &self.tag[self.split + 1..]
    }

    #[must_use]
    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    #[must_use]
    pub fn currency_sub_unit(&self) -> u32 {
        self.currency_sub_unit
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct LocaleRepr {
    tag: String,
    #[serde(default = "default_timezone")]
    timezone: String,
    #[serde(default = "default_currency_sub_unit")]
    currency_sub_unit: u32,
}

#[cfg(feature = "serde")]
fn default_timezone() -> String {
    Locale::DEFAULT_TIMEZONE.to_string()
}

#[cfg(feature = "serde")]
fn default_currency_sub_unit() -> u32 {
    Locale::DEFAULT_CURRENCY_SUB_UNIT
}

#[cfg(feature = "serde")]
impl TryFrom<LocaleRepr> for Locale {
    type Error = I18nError;

    fn try_from(repr: LocaleRepr) -> Result<Self, Self::Error> {
        Ok(Self::parse(&repr.tag)?
            .with_timezone(repr.timezone)
            .with_currency_sub_unit(repr.currency_sub_unit))
    }
}

#[cfg(feature = "serde")]
impl From<Locale> for LocaleRepr {
    fn from(locale: Locale) -> Self {
        Self {
            tag: locale.tag,
            timezone: locale.timezone,
            currency_sub_unit: locale.currency_sub_unit,
        }
    }
}
