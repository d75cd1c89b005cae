// Vocabulary: the fixed, case-insensitive set of known words

pub mod loader;

use std::path::Path;

use hashbrown::HashSet;

pub use loader::{VocabularyError, load_word_list, parse_word_list};

/// Case-insensitive set of known-correct words.
///
/// Built once at start-up and never mutated afterwards; share it behind an
/// `Arc` between request handlers and scan workers.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Lower-cased words from the base list and custom additions.
    known: HashSet<String>,
    /// Lower-cased words accepted as correct but never suggested.
    ignored: HashSet<String>,
    /// Lower-cased words that may be offered as suggestions, in first-seen order.
    suggestible: Vec<String>,
}

impl Vocabulary {
    /// Build a vocabulary from a base word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        VocabularyBuilder::new().words(words).build()
    }

    /// Load a word list file and build a vocabulary from it.
    pub fn load(path: &Path) -> Result<Self, VocabularyError> {
        Ok(Self::from_words(load_word_list(path)?))
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        if self.contains_lowercase(word) {
            return true;
        }
        let lower = word.to_lowercase();
        self.contains_lowercase(&lower)
    }

    /// Membership test for a word the caller has already lower-cased.
    pub fn contains_lowercase(&self, word: &str) -> bool {
        self.known.contains(word) || self.ignored.contains(word)
    }

    /// Whether `word` was registered as ignored.
    pub fn is_ignored(&self, word: &str) -> bool {
        self.ignored.contains(word.to_lowercase().as_str())
    }

    /// Words the suggestion index should be trained on.
    pub fn suggestible_words(&self) -> &[String] {
        &self.suggestible
    }

    /// Number of distinct known (non-ignored) words.
    pub fn len(&self) -> usize {
        self.known.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty() && self.ignored.is_empty()
    }
}

/// Collects words before freezing them into a [`Vocabulary`].
#[derive(Debug, Default)]
pub struct VocabularyBuilder {
    vocabulary: Vocabulary,
}

impl VocabularyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add base list words.
    pub fn words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.add_known(word.as_ref());
        }
        self
    }

    /// Add a user-supplied word that is both accepted and suggestible.
    pub fn custom_word(mut self, word: &str) -> Self {
        self.add_known(word);
        self
    }

    /// Accept `word` as correct without ever offering it as a suggestion.
    pub fn ignore_word(mut self, word: &str) -> Self {
        let lower = word.to_lowercase();
        if !lower.is_empty() {
            self.vocabulary.ignored.insert(lower);
        }
        self
    }

    pub fn build(self) -> Vocabulary {
        self.vocabulary
    }

    fn add_known(&mut self, word: &str) {
        let lower = word.to_lowercase();
        if lower.is_empty() {
            return;
        }
        if self.vocabulary.known.insert(lower.clone()) {
            self.vocabulary.suggestible.push(lower);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_insensitive_membership() {
        let vocab = Vocabulary::from_words(["Hello", "world"]);
        assert!(vocab.contains("hello"));
        assert!(vocab.contains("HELLO"));
        assert!(vocab.contains("World"));
        assert!(!vocab.contains("helo"));
    }

    #[test]
    fn every_listed_word_is_contained_lowercased() {
        let list = ["Paris", "caf\u{00E9}", "don't", "\u{00C9}cole"];
        let vocab = Vocabulary::from_words(list);
        for word in list {
            assert!(vocab.contains_lowercase(&word.to_lowercase()), "{word}");
        }
    }

    #[test]
    fn duplicates_collapse() {
        let vocab = Vocabulary::from_words(["a", "A", "a"]);
        assert_eq!(vocab.len(), 1);
        assert_eq!(vocab.suggestible_words(), &["a".to_string()]);
    }

    #[test]
    fn custom_words_are_known_and_suggestible() {
        let vocab = VocabularyBuilder::new()
            .words(["hello"])
            .custom_word("Rustacean")
            .build();
        assert!(vocab.contains("rustacean"));
        assert!(vocab.suggestible_words().contains(&"rustacean".to_string()));
    }

    #[test]
    fn ignored_words_are_known_but_not_suggestible() {
        let vocab = VocabularyBuilder::new()
            .words(["hello"])
            .ignore_word("TODO")
            .build();
        assert!(vocab.contains("todo"));
        assert!(vocab.is_ignored("Todo"));
        assert!(!vocab.suggestible_words().contains(&"todo".to_string()));
        assert_eq!(vocab.len(), 1);
    }

    #[test]
    fn empty_entries_are_skipped() {
        let vocab = Vocabulary::from_words(["", "x"]);
        assert_eq!(vocab.len(), 1);
    }
}
