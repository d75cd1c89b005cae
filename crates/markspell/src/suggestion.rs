// Suggestion engine: SymSpell lookup plus a bounded edit-distance filter

use std::fmt;

use markspell_core::case::restore_case;
use markspell_core::distance::within_distance;
use symspell::{Suggestion, SymSpell, SymSpellBuilder, UnicodeStringStrategy, Verbosity};

use crate::config::SpellCheckConfig;
use crate::vocabulary::Vocabulary;

/// Error type for building the suggestion index.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("failed to configure suggestion index: {0}")]
    Build(String),
}

/// Proposes corrections for words missing from the vocabulary.
///
/// The index is built once over the vocabulary's suggestible words.
/// Whatever the index returns is post-filtered to candidates within
/// `max_edit_distance` (Levenshtein) of the lower-cased query, so index
/// tuning can never widen the set of accepted suggestions.
pub struct SuggestionEngine {
    symspell: SymSpell<UnicodeStringStrategy>,
    depth: i64,
    max_edit_distance: usize,
    restore_case: bool,
}

impl fmt::Debug for SuggestionEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuggestionEngine")
            .field("depth", &self.depth)
            .field("max_edit_distance", &self.max_edit_distance)
            .field("restore_case", &self.restore_case)
            .finish_non_exhaustive()
    }
}

impl SuggestionEngine {
    /// Build a new engine over `vocabulary`.
    ///
    /// `index_depth` becomes the index's maximum dictionary edit distance
    /// and `index_threshold` its count threshold. Every word enters the
    /// index with a count of 1.
    pub fn train(vocabulary: &Vocabulary, config: &SpellCheckConfig) -> Result<Self, IndexError> {
        let depth = config.index_depth as i64;
        let mut symspell: SymSpell<UnicodeStringStrategy> = SymSpellBuilder::default()
            .max_dictionary_edit_distance(depth)
            .count_threshold(i64::from(config.index_threshold))
            .build()
            .map_err(|e| IndexError::Build(e.to_string()))?;

        let mut indexed = 0usize;
        for word in vocabulary.suggestible_words() {
            if symspell.load_dictionary_line(&format!("{word} 1"), 0, 1, " ") {
                indexed += 1;
            }
        }
        log::debug!("built suggestion index: {indexed} terms, depth {depth}");

        Ok(Self {
            symspell,
            depth,
            max_edit_distance: config.max_edit_distance,
            restore_case: config.restore_case,
        })
    }

    /// Filtered suggestions for `word`, closest first.
    ///
    /// An empty result means "no good suggestion"; the caller must not flag
    /// the word in that case.
    pub fn suggestions(&self, word: &str) -> Vec<String> {
        let lower = word.to_lowercase();
        self.suggestions_for_lowercase(word, &lower)
    }

    /// Same as [`suggestions`](Self::suggestions) when the caller already
    /// holds the lower-cased form.
    pub fn suggestions_for_lowercase(&self, word: &str, lower: &str) -> Vec<String> {
        self.candidates(lower)
            .into_iter()
            .filter(|candidate| within_distance(lower, &candidate.term, self.max_edit_distance))
            .map(|candidate| self.present(word, candidate.term))
            .collect()
    }

    /// Unfiltered index candidates for a lower-cased query, ordered by
    /// (index distance, count, term).
    pub fn candidates(&self, lower: &str) -> Vec<Suggestion> {
        let mut found = self.symspell.lookup(lower, Verbosity::All, self.depth);
        found.sort_by(|a, b| {
            a.distance
                .cmp(&b.distance)
                .then(b.count.cmp(&a.count))
                .then_with(|| a.term.cmp(&b.term))
        });
        found
    }

    pub fn max_edit_distance(&self) -> usize {
        self.max_edit_distance
    }

    /// Re-case a vocabulary term after `word`. Case mappings that do not
    /// round-trip ("ß" -> "SS") would change the term itself, so those
    /// keep the vocabulary spelling.
    fn present(&self, word: &str, term: String) -> String {
        if !self.restore_case {
            return term;
        }
        let cased = restore_case(word, &term);
        if cased.to_lowercase() == term { cased } else { term }
    }
}
