//! Shared types and text utilities for markspell.
//!
//! - [`token`] -- Unicode-aware word/punctuation tokenizer
//! - [`distance`] -- Levenshtein edit distance
//! - [`case`] -- case pattern detection and restoration
//! - [`record`] -- the per-request misspelling record

pub mod case;
pub mod distance;
pub mod record;
pub mod token;

pub use record::MisspellingRecord;
pub use token::{Token, TokenKind, tokenize};
