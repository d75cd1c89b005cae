// Pipeline: top-level integration point for spell checking a document.
//
// Owns the shared read-only components (vocabulary, suggestion engine) and
// the converter, and runs one document through
//
//   convert -> parse -> tokenize text -> parallel scan -> annotate -> render
//
// Design notes:
// - Vocabulary and SuggestionEngine sit behind `Arc` so a Pipeline can be
//   cloned cheaply into request handlers; nothing mutates them after `new`.
// - The converted HTML is parsed once. The scanner reads that tree's text and
//   the annotator rewrites the same tree, so both see identical words with
//   entities decoded, and every non-text structure survives untouched.
// - Each stage failure is wrapped in a PipelineError variant naming the stage.

use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::Instant;

use markspell_core::{MisspellingRecord, tokenize};

use crate::config::{ConfigError, SpellCheckConfig};
use crate::markup::{AnnotateError, ConversionError, Converter, Document, MarkdownConverter, prepare};
use crate::scanner::{ScanError, Scanner};
use crate::suggestion::{IndexError, SuggestionEngine};
use crate::vocabulary::{Vocabulary, VocabularyError};

/// Error type for Pipeline construction. Fatal: a process that hits one of
/// these must not start serving.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("failed to load vocabulary: {0}")]
    Vocabulary(#[from] VocabularyError),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to build suggestion index: {0}")]
    Index(#[from] IndexError),
}

/// Pipeline stage names, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Conversion,
    Scan,
    Annotation,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Conversion => "conversion",
            Stage::Scan => "scan",
            Stage::Annotation => "annotation",
        })
    }
}

/// Error type for a single pipeline run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("conversion stage failed: {0}")]
    Conversion(#[from] ConversionError),

    #[error("scan stage failed: {0}")]
    Scan(#[from] ScanError),

    #[error("annotation stage failed: {0}")]
    Annotation(#[from] AnnotateError),
}

impl PipelineError {
    /// The stage that failed.
    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::Conversion(_) => Stage::Conversion,
            PipelineError::Scan(_) => Stage::Scan,
            PipelineError::Annotation(_) => Stage::Annotation,
        }
    }
}

/// Result of checking one document.
#[derive(Debug, Clone)]
pub struct CheckReport {
    /// The annotated HTML document.
    pub html: String,
    /// Misspelled surface words and their filtered suggestions.
    pub misspellings: MisspellingRecord,
    /// Number of word tokens scanned.
    pub token_count: usize,
}

/// Spell checking pipeline. Cheap to clone; clones share the vocabulary and
/// suggestion index.
#[derive(Clone)]
pub struct Pipeline {
    vocabulary: Arc<Vocabulary>,
    engine: Arc<SuggestionEngine>,
    scanner: Scanner,
    converter: Arc<dyn Converter>,
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("chunk_size", &self.scanner.chunk_size())
            .finish_non_exhaustive()
    }
}

impl Pipeline {
    /// Build a pipeline over an already constructed vocabulary, using the
    /// markdown converter.
    pub fn new(vocabulary: Vocabulary, config: &SpellCheckConfig) -> Result<Self, InitError> {
        Self::with_converter(vocabulary, config, Arc::new(MarkdownConverter))
    }

    /// Load a word list from `path` and build a pipeline over it.
    pub fn from_word_list(path: &Path, config: &SpellCheckConfig) -> Result<Self, InitError> {
        let vocabulary = Vocabulary::load(path)?;
        Self::new(vocabulary, config)
    }

    /// Build a pipeline with a caller-supplied converter.
    pub fn with_converter(
        vocabulary: Vocabulary,
        config: &SpellCheckConfig,
        converter: Arc<dyn Converter>,
    ) -> Result<Self, InitError> {
        config.validate()?;
        let chunk_size = config.scan_chunk_size()?;
        if vocabulary.is_empty() {
            return Err(VocabularyError::Empty {
                source_name: "vocabulary".to_string(),
            }
            .into());
        }

        let start = Instant::now();
        let engine = SuggestionEngine::train(&vocabulary, config)?;
        log::info!(
            "pipeline ready: {} known words, index built in {:?}",
            vocabulary.len(),
            start.elapsed()
        );

        let vocabulary = Arc::new(vocabulary);
        let engine = Arc::new(engine);
        let scanner = Scanner::new(vocabulary.clone(), engine.clone(), chunk_size);
        Ok(Self {
            vocabulary,
            engine,
            scanner,
            converter,
        })
    }

    /// Convert, check and annotate `raw`, returning the annotated HTML.
    pub fn process(&self, raw: &[u8]) -> Result<String, PipelineError> {
        self.check(raw).map(|report| report.html)
    }

    /// Like [`process`](Self::process) but also returns the misspelling
    /// record and token count.
    pub fn check(&self, raw: &[u8]) -> Result<CheckReport, PipelineError> {
        self.run(raw, None)
    }

    /// Like [`check`](Self::check), abandoning the scan once `cancel` is
    /// raised.
    pub fn check_cancellable(&self, raw: &[u8], cancel: &AtomicBool) -> Result<CheckReport, PipelineError> {
        self.run(raw, Some(cancel))
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn engine(&self) -> &SuggestionEngine {
        &self.engine
    }

    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    fn run(&self, raw: &[u8], cancel: Option<&AtomicBool>) -> Result<CheckReport, PipelineError> {
        let start = Instant::now();

        let html = self.converter.convert(raw).inspect_err(|e| log::error!("{e}"))?;
        log::debug!("converted {} bytes to {} bytes of html", raw.len(), html.len());

        let mut document = Document::parse(&prepare(&html)).inspect_err(|e| log::error!("{e}"))?;
        let tokens = tokenize(&document.text());
        let misspellings = match cancel {
            Some(flag) => self.scanner.scan_cancellable(&tokens, flag).inspect_err(|e| log::error!("{e}"))?,
            None => self.scanner.scan(&tokens),
        };
        log::debug!("scanned {} tokens in chunks of {}", tokens.len(), self.scanner.chunk_size());

        let count = document.annotate(&misspellings);
        let annotated = document.render().inspect_err(|e| log::error!("{e}"))?;
        log::debug!("annotated {count} words");

        log::info!("processed markdown in {:?}", start.elapsed());
        log::info!(
            "{} words checked, {} misspelled words found",
            tokens.len(),
            misspellings.len()
        );

        Ok(CheckReport {
            html: annotated,
            misspellings,
            token_count: tokens.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;

    fn pipeline() -> Pipeline {
        let vocab = Vocabulary::from_words(["hello", "world", "this", "is", "a", "test", "spelling"]);
        Pipeline::new(vocab, &SpellCheckConfig::default()).unwrap()
    }

    #[test]
    fn annotates_misspelled_word() {
        let html = pipeline().process(b"helo world").unwrap();
        assert!(html.contains("<span class=\"misspelled-word\" data-misspelled-word=\"helo\">helo</span>"));
        assert!(!html.contains("data-misspelled-word=\"world\""));
    }

    #[test]
    fn report_carries_record_and_count() {
        let report = pipeline().check(b"This is a tset of speling.").unwrap();
        assert_eq!(report.token_count, 6);
        assert_eq!(report.misspellings.suggestions("tset").unwrap(), &["test".to_string()]);
        assert_eq!(report.misspellings.suggestions("speling").unwrap(), &["spelling".to_string()]);
    }

    #[test]
    fn invalid_utf8_is_a_conversion_error() {
        let err = pipeline().process(&[0xff, 0xfe]).unwrap_err();
        assert_eq!(err.stage(), Stage::Conversion);
    }

    #[test]
    fn cancelled_check_is_a_scan_error() {
        let cancel = AtomicBool::new(false);
        cancel.store(true, Ordering::Relaxed);
        let err = pipeline().check_cancellable(b"helo world", &cancel).unwrap_err();
        assert_eq!(err.stage(), Stage::Scan);
    }

    #[test]
    fn empty_document() {
        let report = pipeline().check(b"").unwrap();
        assert_eq!(report.token_count, 0);
        assert!(report.misspellings.is_empty());
        assert!(report.html.contains("span.misspelled-word"));
    }

    #[test]
    fn empty_vocabulary_is_rejected() {
        let err = Pipeline::new(Vocabulary::default(), &SpellCheckConfig::default()).unwrap_err();
        assert!(matches!(err, InitError::Vocabulary(VocabularyError::Empty { .. })));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let vocab = Vocabulary::from_words(["hello"]);
        let config = SpellCheckConfig {
            chunk_size: 0,
            ..SpellCheckConfig::default()
        };
        let err = Pipeline::new(vocab, &config).unwrap_err();
        assert!(matches!(err, InitError::Config(ConfigError::ZeroChunkSize)));
    }

    #[test]
    fn custom_converter_is_used() {
        struct Verbatim;
        impl Converter for Verbatim {
            fn convert(&self, source: &[u8]) -> Result<String, ConversionError> {
                Ok(std::str::from_utf8(source)?.to_string())
            }
        }

        let vocab = Vocabulary::from_words(["hello", "world"]);
        let p = Pipeline::with_converter(vocab, &SpellCheckConfig::default(), Arc::new(Verbatim)).unwrap();
        let html = p.process(b"<div>helo</div>").unwrap();
        assert!(html.contains("<div><span class=\"misspelled-word\""));
    }

    #[test]
    fn entity_encoded_words_are_checked_and_annotated() {
        let vocab = Vocabulary::from_words(["café", "crème", "world"]);
        let p = Pipeline::new(vocab, &SpellCheckConfig::default()).unwrap();
        let report = p.check("<p>caf&eacute; cr&egrave;mme</p>".as_bytes()).unwrap();
        assert_eq!(report.token_count, 2);
        assert_eq!(report.misspellings.len(), 1);
        assert_eq!(report.misspellings.suggestions("crèmme").unwrap(), &["crème".to_string()]);
        assert!(report.html.contains("data-misspelled-word=\"crèmme\">crèmme</span>"));
    }

    #[test]
    fn stage_names() {
        assert_eq!(Stage::Annotation.to_string(), "annotation");
        assert_eq!(Stage::Conversion.to_string(), "conversion");
    }
}
