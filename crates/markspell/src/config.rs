// Spell check configuration supplied by the caller at start-up

use std::num::NonZeroUsize;

use serde::Deserialize;

/// Default maximum edit distance between a query word and a kept suggestion.
pub const DEFAULT_MAX_EDIT_DISTANCE: usize = 2;

/// Default number of tokens handed to one scan worker.
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Largest deletion depth the suggestion index is built with.
pub const MAX_INDEX_DEPTH: usize = 3;

/// Error type for invalid configuration values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("scan chunk size must be at least 1")]
    ZeroChunkSize,
    #[error("suggestion index depth must be at least 1")]
    ZeroIndexDepth,
    #[error("suggestion index depth {0} is too large (maximum {max})", max = MAX_INDEX_DEPTH)]
    IndexDepthTooLarge(usize),
}

/// Tunables consumed by the core. The core never reads these from the
/// environment; callers build one (or deserialize one) and pass it in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SpellCheckConfig {
    /// Suggestions further than this from the lower-cased query are dropped.
    pub max_edit_distance: usize,

    /// Edit distance the suggestion index is built and queried with.
    pub index_depth: usize,

    /// Minimum word count for a term to be suggested.
    pub index_threshold: u32,

    /// Tokens per scan worker.
    pub chunk_size: usize,

    /// Re-case suggestions after the misspelled word ("Helo" -> "Hello").
    pub restore_case: bool,
}

impl Default for SpellCheckConfig {
    fn default() -> Self {
        Self {
            max_edit_distance: DEFAULT_MAX_EDIT_DISTANCE,
            index_depth: 1,
            index_threshold: 1,
            chunk_size: DEFAULT_CHUNK_SIZE,
            restore_case: true,
        }
    }
}

impl SpellCheckConfig {
    /// Reject values the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scan_chunk_size()?;
        match self.index_depth {
            0 => Err(ConfigError::ZeroIndexDepth),
            depth if depth > MAX_INDEX_DEPTH => Err(ConfigError::IndexDepthTooLarge(depth)),
            _ => Ok(()),
        }
    }

    /// The chunk size as the scanner takes it. Zero is rejected here and
    /// nowhere else.
    pub fn scan_chunk_size(&self) -> Result<NonZeroUsize, ConfigError> {
        NonZeroUsize::new(self.chunk_size).ok_or(ConfigError::ZeroChunkSize)
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_max_edit_distance(mut self, distance: usize) -> Self {
        self.max_edit_distance = distance;
        self
    }
}
