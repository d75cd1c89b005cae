// Misspelling record: surface word -> filtered suggestions

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::Serialize;

/// Per-request mapping from an unknown surface word (case preserved) to its
/// filtered suggestions.
///
/// Keys are exact surface forms: "Helo" and "helo" are independent entries.
/// A word is only ever inserted with at least one suggestion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MisspellingRecord {
    words: BTreeMap<String, Vec<String>>,
}

impl MisspellingRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record suggestions for a surface word.
    ///
    /// An empty suggestion list is ignored: "unknown but no good suggestion"
    /// is not flagged.
    pub fn insert(&mut self, word: impl Into<String>, suggestions: Vec<String>) {
        if suggestions.is_empty() {
            return;
        }
        self.words.insert(word.into(), suggestions);
    }

    /// Merge another record into this one. Later entries overwrite earlier
    /// ones for the same key.
    pub fn merge(&mut self, other: MisspellingRecord) {
        self.words.extend(other.words);
    }

    /// Exact, case-sensitive key lookup.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    pub fn suggestions(&self, word: &str) -> Option<&[String]> {
        self.words.get(word).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over `(word, suggestions)` in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.words.iter().map(|(w, s)| (w.as_str(), s.as_slice()))
    }

    /// The flagged surface words in key order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.keys().map(String::as_str)
    }
}

impl IntoIterator for MisspellingRecord {
    type Item = (String, Vec<String>);
    type IntoIter = btree_map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

impl FromIterator<(String, Vec<String>)> for MisspellingRecord {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (word, suggestions) in iter {
            record.insert(word, suggestions);
        }
        record
    }
}
