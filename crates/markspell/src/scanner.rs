// Parallel scanner: chunked fan-out over the token stream
//
// The token slice is split into contiguous chunks. Each chunk is checked by
// its own rayon task into a task-local record, which is merged into the
// shared result under a single lock acquisition per chunk. `for_each` returns
// only when every chunk has been merged, which is the join barrier.
//
// Vocabulary and SuggestionEngine are read-only and shared without locking.

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use hashbrown::HashSet;
use markspell_core::MisspellingRecord;
use rayon::prelude::*;

use crate::suggestion::SuggestionEngine;
use crate::vocabulary::Vocabulary;

/// Error type for scans.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The cancellation flag was raised before all chunks were merged.
    #[error("scan cancelled")]
    Cancelled,
}

/// Checks token streams against a shared vocabulary and suggestion engine.
#[derive(Debug, Clone)]
pub struct Scanner {
    vocabulary: Arc<Vocabulary>,
    engine: Arc<SuggestionEngine>,
    chunk_size: NonZeroUsize,
}

impl Scanner {
    /// Create a scanner handing `chunk_size` tokens to each worker.
    pub fn new(vocabulary: Arc<Vocabulary>, engine: Arc<SuggestionEngine>, chunk_size: NonZeroUsize) -> Self {
        Self {
            vocabulary,
            engine,
            chunk_size,
        }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size.get()
    }

    /// Scan `tokens` in parallel chunks and return the merged record.
    pub fn scan<S: AsRef<str> + Sync>(&self, tokens: &[S]) -> MisspellingRecord {
        scan(tokens, &self.vocabulary, &self.engine, self.chunk_size)
    }

    /// Single-threaded scan producing the same record as [`scan`](Self::scan).
    pub fn scan_sequential<S: AsRef<str>>(&self, tokens: &[S]) -> MisspellingRecord {
        scan_sequential(tokens, &self.vocabulary, &self.engine)
    }

    /// Parallel scan that stops early once `cancel` is raised.
    ///
    /// Workers check the flag between tokens. A cancelled scan returns no
    /// partial record.
    pub fn scan_cancellable<S: AsRef<str> + Sync>(
        &self,
        tokens: &[S],
        cancel: &AtomicBool,
    ) -> Result<MisspellingRecord, ScanError> {
        let merged = Mutex::new(MisspellingRecord::new());

        tokens
            .par_chunks(self.chunk_size.get())
            .for_each(|chunk| {
                if let Some(local) = check_chunk(chunk, &self.vocabulary, &self.engine, Some(cancel)) {
                    merge_into(&merged, local);
                }
            });

        if cancel.load(Ordering::Relaxed) {
            log::debug!("scan of {} tokens cancelled", tokens.len());
            return Err(ScanError::Cancelled);
        }
        Ok(merged.into_inner().unwrap_or_else(PoisonError::into_inner))
    }
}

/// Scan `tokens` in parallel chunks of `chunk_size`.
pub fn scan<S: AsRef<str> + Sync>(
    tokens: &[S],
    vocabulary: &Vocabulary,
    engine: &SuggestionEngine,
    chunk_size: NonZeroUsize,
) -> MisspellingRecord {
    let merged = Mutex::new(MisspellingRecord::new());

    tokens
        .par_chunks(chunk_size.get())
        .enumerate()
        .for_each(|(index, chunk)| {
            let Some(local) = check_chunk(chunk, vocabulary, engine, None) else {
                return;
            };
            log::trace!("chunk {index}: {} tokens, {} misspellings", chunk.len(), local.len());
            merge_into(&merged, local);
        });

    merged.into_inner().unwrap_or_else(PoisonError::into_inner)
}

/// Reference single-threaded scan.
pub fn scan_sequential<S: AsRef<str>>(
    tokens: &[S],
    vocabulary: &Vocabulary,
    engine: &SuggestionEngine,
) -> MisspellingRecord {
    check_chunk(tokens, vocabulary, engine, None).unwrap_or_default()
}

/// The one critical section: a whole chunk's results under one lock.
fn merge_into(merged: &Mutex<MisspellingRecord>, local: MisspellingRecord) {
    if local.is_empty() {
        return;
    }
    let mut guard = merged.lock().unwrap_or_else(PoisonError::into_inner);
    guard.merge(local);
}

/// Check every token in `chunk`. Returns `None` if cancelled midway.
fn check_chunk<S: AsRef<str>>(
    chunk: &[S],
    vocabulary: &Vocabulary,
    engine: &SuggestionEngine,
    cancel: Option<&AtomicBool>,
) -> Option<MisspellingRecord> {
    let mut local = MisspellingRecord::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for token in chunk {
        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            return None;
        }
        let word = token.as_ref();
        if !seen.insert(word) {
            continue;
        }
        let lower = word.to_lowercase();
        if vocabulary.contains_lowercase(&lower) {
            continue;
        }
        local.insert(word, engine.suggestions_for_lowercase(word, &lower));
    }

    Some(local)
}
