//! Markdown spell checking with fuzzy suggestions and HTML annotation.
//!
//! A document is converted to HTML, parsed, reduced to its text, tokenized,
//! scanned for unknown words in parallel chunks, and re-rendered with every
//! misspelled word wrapped in an annotation span.
//!
//! # Architecture
//!
//! - [`vocabulary`] -- the fixed case-insensitive word set and word-list loading
//! - [`suggestion`] -- SymSpell lookup plus the edit-distance filter
//! - [`scanner`] -- chunked parallel scan producing a [`MisspellingRecord`]
//! - [`markup`] -- markdown conversion, plain-text view, HTML annotation
//! - [`pipeline`] -- convert -> tokenize -> scan -> annotate
//! - [`config`] -- caller-supplied tunables
//! - [`upload`], [`store`], [`service`] -- upload validation, document
//!   storage and the check service built on top of the pipeline
//!
//! # Example
//!
//! ```
//! use markspell::{Pipeline, SpellCheckConfig, Vocabulary};
//!
//! let vocabulary = Vocabulary::from_words(["hello", "world"]);
//! let pipeline = Pipeline::new(vocabulary, &SpellCheckConfig::default()).unwrap();
//! let html = pipeline.process(b"helo world").unwrap();
//! assert!(html.contains("data-misspelled-word=\"helo\""));
//! ```

pub mod config;
pub mod markup;
pub mod pipeline;
pub mod scanner;
pub mod service;
pub mod store;
pub mod suggestion;
pub mod upload;
pub mod vocabulary;

pub use config::{ConfigError, SpellCheckConfig};
pub use markspell_core::{MisspellingRecord, Token, TokenKind, tokenize};
pub use markup::{AnnotateError, ConversionError, Converter, MarkdownConverter};
pub use pipeline::{CheckReport, InitError, Pipeline, PipelineError, Stage};
pub use scanner::{ScanError, Scanner};
pub use service::{CheckOutcome, CheckService, ServiceError};
pub use store::{DocumentStore, FileId, MemoryStore, OwnerId, StoreError, StoredFile};
pub use suggestion::{IndexError, SuggestionEngine};
pub use upload::{MarkdownUpload, UploadError};
pub use vocabulary::{Vocabulary, VocabularyBuilder, VocabularyError};
