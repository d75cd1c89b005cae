// Source-to-HTML conversion

use pulldown_cmark::{Options, Parser, html};

/// Error type for the conversion stage.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("document is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("conversion failed: {0}")]
    Failed(String),
}

/// Turns a raw source document into rendered HTML.
///
/// The pipeline treats this as opaque: whatever HTML comes out is parsed,
/// scanned and annotated.
pub trait Converter: Send + Sync {
    fn convert(&self, source: &[u8]) -> Result<String, ConversionError>;
}

/// CommonMark converter with tables and strikethrough enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownConverter;

impl Converter for MarkdownConverter {
    fn convert(&self, source: &[u8]) -> Result<String, ConversionError> {
        let text = std::str::from_utf8(source)?;

        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);

        let mut out = String::with_capacity(text.len() + text.len() / 2);
        html::push_html(&mut out, Parser::new_ext(text, options));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_paragraph() {
        let html = MarkdownConverter.convert(b"hello *world*").unwrap();
        assert_eq!(html, "<p>hello <em>world</em></p>\n");
    }

    #[test]
    fn converts_heading_and_list() {
        let html = MarkdownConverter.convert(b"# Title\n\n- one\n- two\n").unwrap();
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<li>one</li>"));
    }

    #[test]
    fn tables_enabled() {
        let html = MarkdownConverter.convert(b"| a | b |\n|---|---|\n| c | d |\n").unwrap();
        assert!(html.contains("<table>"));
    }

    #[test]
    fn empty_source() {
        assert_eq!(MarkdownConverter.convert(b"").unwrap(), "");
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let err = MarkdownConverter.convert(&[0x66, 0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, ConversionError::InvalidUtf8(_)));
    }
}
