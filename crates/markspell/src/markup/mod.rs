// Markup handling: source conversion, plain-text view, annotation
//
// - `convert`: markdown source -> rendered HTML (the converter seam)
// - `annotate`: HTML tree parsing, misspelling annotation, rendering

pub mod annotate;
pub mod convert;

pub use annotate::{ANNOTATION_ATTR, ANNOTATION_CLASS, AnnotateError, Document, HEADER, annotate_html, prepare};
pub use convert::{ConversionError, Converter, MarkdownConverter};

/// Plain-text view of rendered markup, read from the same html5ever tree the
/// annotator walks. Entities are decoded by the parser and raw-text elements
/// contribute nothing.
pub fn plain_text(html: &str) -> Result<String, AnnotateError> {
    Ok(Document::parse(html)?.text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use markspell_core::tokenize;

    fn words(html: &str) -> Vec<String> {
        tokenize(&plain_text(html).unwrap())
    }

    #[test]
    fn tags_separate_words() {
        assert_eq!(words("<p>hello <em>world</em></p>"), vec!["hello", "world"]);
    }

    #[test]
    fn decodes_named_entities() {
        assert_eq!(words("<p>caf&eacute; na&iuml;ve</p>"), vec!["café", "naïve"]);
        assert_eq!(plain_text("<p>a &amp; b &lt;c&gt;</p>").unwrap().trim(), "a & b <c>");
    }

    #[test]
    fn double_escaped_stays_single_escaped() {
        assert_eq!(plain_text("&amp;lt;").unwrap().trim(), "&lt;");
    }

    #[test]
    fn script_and_style_are_skipped() {
        assert_eq!(words("<style>p { color: red }</style><p>text</p><script>var x;</script>"), vec!["text"]);
    }

    #[test]
    fn no_markup() {
        assert_eq!(words("just text"), vec!["just", "text"]);
    }
}
