//! Key-to-text dictionaries and the composite dictionary chain.
//!
//! # Invariants
//!
//! 1. **Absent is not empty**: `get` returns `None` for a missing key and
//!    `Some("")` for a key translated to the empty string.
//!
//! 2. **Chain order is lookup order**: [`MultiDictionary::get`] checks its
//!    own entries first, then each child in registration order, and returns
//!    the first hit.
//!
//! 3. **Snapshots agree with lookups**: for every key `k` in
//!    [`Dictionary::entries`], `entries()[k] == get(k)`. Local entries shadow
//!    children, and earlier children shadow later ones.
//!
//! 4. **Children are never written**: a composite only mutates its own local
//!    mapping. Children are shared through `Arc` and stay read-only.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

/// A source of translations for a single locale.
pub trait Dictionary: fmt::Debug + Send + Sync {
    /// Locale tag the dictionary was declared for (e.g. `"en_US"`).
    fn locale(&self) -> &str;

    /// Translation for `key`, or `None` when the key is absent.
    fn get(&self, key: &str) -> Option<&str>;

    /// Insert or overwrite the translation for `key`.
    fn set(&mut self, key: String, text: String);

    /// Snapshot of every key this dictionary resolves, ordered by key.
    fn entries(&self) -> BTreeMap<String, String>;
}

/// A single translation with an optional note for translators.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DictionaryEntry {
    pub text: String,
    /// Informational only; never consulted during resolution.
    pub comment: Option<String>,
}

impl DictionaryEntry {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            comment: None,
        }
    }
}

/// Map-backed dictionary.
///
/// # Example
///
/// ```
/// use lingo_i18n::{Dictionary, MapDictionary};
///
/// let mut dict = MapDictionary::with_entries("en_US", [("greeting", "Hello")]);
/// dict.set("farewell".into(), "Goodbye".into());
///
/// assert_eq!(dict.get("greeting"), Some("Hello"));
/// assert_eq!(dict.get("farewell"), Some("Goodbye"));
/// assert_eq!(dict.get("missing"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapDictionary {
    locale: String,
    entries: HashMap<String, DictionaryEntry>,
}

impl MapDictionary {
    /// Create an empty dictionary for `locale`.
    #[must_use]
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            entries: HashMap::new(),
        }
    }

    /// Create a dictionary pre-filled with `(key, text)` pairs.
    #[must_use]
    pub fn with_entries<K, V>(
        locale: impl Into<String>,
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut dict = Self::new(locale);
        dict.merge(entries);
        dict
    }

    /// Insert or overwrite a translation together with a translator comment.
    pub fn set_with_comment(
        &mut self,
        key: impl Into<String>,
        text: impl Into<String>,
        comment: impl Into<String>,
    ) {
        self.entries.insert(
            key.into(),
            DictionaryEntry {
                text: text.into(),
                comment: Some(comment.into()),
            },
        );
    }

    /// Comment attached to `key`, if any.
    #[must_use]
    pub fn comment(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(|e| e.comment.as_deref())
    }

    /// Full entry for `key`, comment included.
    #[must_use]
    pub fn entry(&self, key: &str) -> Option<&DictionaryEntry> {
        self.entries.get(key)
    }

    /// Insert or overwrite every `(key, text)` pair. Existing comments on
    /// overwritten keys are dropped.
    pub fn merge<K, V>(&mut self, entries: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (key, text) in entries {
            self.entries
                .insert(key.into(), DictionaryEntry::new(text.into()));
        }
    }

    /// Replace the whole mapping with `entries`.
    pub fn replace_entries<K, V>(&mut self, entries: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.entries.clear();
        self.merge(entries);
    }

    /// Remove `key`, returning its entry.
    pub fn remove(&mut self, key: &str) -> Option<DictionaryEntry> {
        self.entries.remove(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Dictionary for MapDictionary {
    fn locale(&self) -> &str {
        &self.locale
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|e| e.text.as_str())
    }

    fn set(&mut self, key: String, text: String) {
        self.entries.insert(key, DictionaryEntry::new(text));
    }

    fn entries(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|(k, e)| (k.clone(), e.text.clone()))
            .collect()
    }
}

/// Dictionary that groups a chain of shared dictionaries behind its own
/// local entries.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use lingo_i18n::{Dictionary, MapDictionary, MultiDictionary};
///
/// let base = Arc::new(MapDictionary::with_entries("en", [("ok", "OK"), ("cancel", "Cancel")]));
/// let mut chain = MultiDictionary::with_dictionaries("en", [base as Arc<dyn Dictionary>]);
/// chain.set("ok".into(), "Okay".into());
///
/// assert_eq!(chain.get("ok"), Some("Okay"));
/// assert_eq!(chain.get("cancel"), Some("Cancel"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MultiDictionary {
    local: MapDictionary,
    dictionaries: Vec<Arc<dyn Dictionary>>,
}

impl MultiDictionary {
    /// Create a composite with no children and no local entries.
    #[must_use]
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            local: MapDictionary::new(locale),
            dictionaries: Vec::new(),
        }
    }

    /// Create a composite over `dictionaries`, consulted in iteration order.
    #[must_use]
    pub fn with_dictionaries(
        locale: impl Into<String>,
        dictionaries: impl IntoIterator<Item = Arc<dyn Dictionary>>,
    ) -> Self {
        Self {
            local: MapDictionary::new(locale),
            dictionaries: dictionaries.into_iter().collect(),
        }
    }

    /// Append a child at the end of the chain.
    pub fn add_dictionary(&mut self, dictionary: Arc<dyn Dictionary>) -> &mut Self {
        self.dictionaries.push(dictionary);
        self
    }

    /// Splice a child into the chain at `index`; indices past the end append.
    pub fn insert_dictionary(&mut self, index: usize, dictionary: Arc<dyn Dictionary>) -> &mut Self {
        let index = index.min(self.dictionaries.len());
        self.dictionaries.insert(index, dictionary);
        self
    }

    /// Children in lookup order.
    #[must_use]
    pub fn dictionaries(&self) -> &[Arc<dyn Dictionary>] {
        &self.dictionaries
    }

    /// The composite's own entries, consulted before any child.
    #[must_use]
    pub fn local(&self) -> &MapDictionary {
        &self.local
    }

    /// Mutable access to the local entries (comments, bulk merge, removal).
    pub fn local_mut(&mut self) -> &mut MapDictionary {
        &mut self.local
    }
}

impl Dictionary for MultiDictionary {
    fn locale(&self) -> &str {
        self.local.locale()
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.local
            .get(key)
            .or_else(|| self.dictionaries.iter().find_map(|d| d.get(key)))
    }

    fn set(&mut self, key: String, text: String) {
        self.local.set(key, text);
    }

    fn entries(&self) -> BTreeMap<String, String> {
        // Merge from lowest to highest precedence so earlier sources overwrite.
        let mut merged = BTreeMap::new();
        for dictionary in self.dictionaries.iter().rev() {
            merged.extend(dictionary.entries());
        }
        merged.extend(self.local.entries());
        merged
    }
}
