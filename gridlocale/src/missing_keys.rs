//! Per-language record of keys that were filled from the empty-value
//! template instead of an authored translation.

use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MissingKeys {
    by_language: IndexMap<String, Vec<String>>,
}

impl MissingKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `key` to the list of `language`. Repeated keys are kept.
    pub fn record(&mut self, language: &str, key: &str) {
        self.by_language
            .entry(language.to_string())
            .or_default()
            .push(key.to_string());
    }

    /// `true` when every translation was authored.
    pub fn is_empty(&self) -> bool {
        self.by_language.is_empty()
    }

    /// Number of languages with at least one missing key.
    pub fn len(&self) -> usize {
        self.by_language.len()
    }

    /// Number of missing (language, key) pairs.
    pub fn total(&self) -> usize {
        self.by_language.values().map(Vec::len).sum()
    }

    pub fn get(&self, language: &str) -> Option<&[String]> {
        self.by_language.get(language).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.by_language
            .iter()
            .map(|(language, keys)| (language.as_str(), keys.as_slice()))
    }
}
