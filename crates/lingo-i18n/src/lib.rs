#![forbid(unsafe_code)]

//! Message resolution for multilingual applications.
//!
//! Resolves a translation key through an ordered chain of dictionaries,
//! selects the plural segment for a count (explicit ISO 31-11 intervals
//! first, then CLDR plural rules), and substitutes `%name%` placeholders.
//!
//! ```
//! use std::sync::Arc;
//! use lingo_i18n::{MapDictionary, MultiDictionary, Placeholders, Translator};
//!
//! let en = MapDictionary::with_entries("en", [
//!     ("welcome", "Welcome, %name%!"),
//!     ("items", "{0} no items|{1} one item|]1,19] %count% items|[20,Inf] many items"),
//! ]);
//! let mut translator = Translator::new("en", MultiDictionary::new("en"));
//! translator.add_dictionary(Arc::new(en), None);
//!
//! let args = Placeholders::from([("name", "Ada")]);
//! assert_eq!(translator.translate("welcome", &args).unwrap(), "Welcome, Ada!");
//! assert_eq!(
//!     translator.translate_plural("items", 3, &Placeholders::none()).unwrap(),
//!     "3 items"
//! );
//! ```

pub mod config;
pub mod dictionary;
pub mod error;
pub mod interval;
pub mod locale;
pub mod placeholder;
pub mod plural;
pub mod translator;

pub use config::{ConfigError, TranslatorConfig, TranslatorConfigParse};
pub use dictionary::{Dictionary, DictionaryEntry, MapDictionary, MultiDictionary};
pub use error::I18nError;
pub use interval::Interval;
pub use locale::Locale;
pub use placeholder::Placeholders;
pub use plural::{PluralRule, category_index};
pub use translator::Translator;
