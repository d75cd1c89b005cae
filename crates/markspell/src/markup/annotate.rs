// Markup annotator: wraps misspelled words in rendered HTML
//
// The rendered markup is parsed into an rcdom tree. Text nodes are matched
// with the tokenizer's word pattern; a node holding at least one recorded
// word is recomposed as markup, parsed as a fragment in the context of its
// parent, and spliced in where the text node was. Everything else in the tree
// is left alone.

use std::io;
use std::rc::Rc;

use html5ever::serialize::{SerializeOpts, serialize};
use html5ever::tendril::TendrilSink;
use html5ever::{LocalName, Namespace, ParseOpts, QualName, parse_document, parse_fragment};
use markspell_core::MisspellingRecord;
use markspell_core::token::word_spans;
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};

/// Class carried by every annotation span.
pub const ANNOTATION_CLASS: &str = "misspelled-word";

/// Attribute holding the original (case-preserved) word.
pub const ANNOTATION_ATTR: &str = "data-misspelled-word";

/// Header block prepended to every annotated document.
pub const HEADER: &str = concat!(
    "<head><meta charset=\"utf-8\"><style>",
    "span.misspelled-word { text-decoration: underline; text-decoration-style: wavy; ",
    "text-decoration-color: red; text-decoration-thickness: 1px; text-underline-offset: 3px; ",
    "background-color: #fca5a5; }",
    "</style></head>"
);

const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

/// Elements whose text is never annotated.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "textarea", "title"];

/// Error type for the annotation stage.
#[derive(Debug, thiserror::Error)]
pub enum AnnotateError {
    #[error("failed to parse document: {0}")]
    Parse(#[source] io::Error),

    #[error("failed to parse fragment: {0}")]
    Fragment(String),

    #[error("failed to render document: {0}")]
    Render(#[source] io::Error),
}

/// A parsed markup tree, owned by one annotation pass.
pub struct Document {
    dom: RcDom,
}

impl Document {
    /// Parse a whole HTML document. Failure here is fatal for the pass.
    pub fn parse(html: &str) -> Result<Self, AnnotateError> {
        let dom = parse_document(RcDom::default(), ParseOpts::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())
            .map_err(AnnotateError::Parse)?;
        Ok(Self { dom })
    }

    /// Annotate every recorded word in place. Returns the number of words
    /// wrapped.
    pub fn annotate(&mut self, record: &MisspellingRecord) -> usize {
        if record.is_empty() {
            return 0;
        }
        annotate_children(&self.dom.document, record)
    }

    /// Text content of the tree as the scanner sees it: every text node
    /// outside raw-text elements, entities already decoded, separated by
    /// spaces so words never join across element boundaries.
    pub fn text(&self) -> String {
        let mut out = String::new();
        collect_text(&self.dom.document, &mut out);
        out
    }

    /// Serialize the tree back to HTML.
    pub fn render(&self) -> Result<String, AnnotateError> {
        let mut out = Vec::new();
        let handle: SerializableHandle = self.dom.document.clone().into();
        serialize(&mut out, &handle, SerializeOpts::default()).map_err(AnnotateError::Render)?;
        String::from_utf8(out).map_err(|e| AnnotateError::Render(io::Error::new(io::ErrorKind::InvalidData, e)))
    }
}

/// Newlines become `<br>` and the header block goes in front.
pub fn prepare(html: &str) -> String {
    let body = html.replace('\n', "<br>");
    let mut out = String::with_capacity(HEADER.len() + body.len());
    out.push_str(HEADER);
    out.push_str(&body);
    out
}

/// Prepare, parse, annotate and render `html` in one go.
pub fn annotate_html(html: &str, record: &MisspellingRecord) -> Result<String, AnnotateError> {
    let mut document = Document::parse(&prepare(html))?;
    let count = document.annotate(record);
    log::debug!("annotated {count} words");
    document.render()
}

// ============================================================================
// Tree walk
// ============================================================================

fn annotate_children(parent: &Handle, record: &MisspellingRecord) -> usize {
    if is_opaque(parent) {
        return 0;
    }

    let children: Vec<Handle> = parent.children.borrow().clone();
    let mut annotated = 0;
    let mut replacements: Vec<(usize, Vec<Handle>)> = Vec::new();

    for (index, child) in children.iter().enumerate() {
        match &child.data {
            NodeData::Text { contents } => {
                let composed = compose_annotated(&contents.borrow(), record);
                let Some((markup, hits)) = composed else {
                    continue;
                };
                match parse_fragment_nodes(parent, &markup) {
                    Ok(nodes) => {
                        annotated += hits;
                        replacements.push((index, nodes));
                    }
                    Err(err) => log::warn!("leaving text node unannotated: {err}"),
                }
            }
            NodeData::Element { .. } | NodeData::Document => {
                annotated += annotate_children(child, record);
            }
            _ => {}
        }
    }

    if !replacements.is_empty() {
        splice(parent, &children, replacements);
    }
    annotated
}

fn collect_text(node: &Handle, out: &mut String) {
    if is_raw_text(node) {
        return;
    }
    for child in node.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => {
                out.push_str(&contents.borrow());
                out.push(' ');
            }
            NodeData::Element { .. } | NodeData::Document => collect_text(child, out),
            _ => {}
        }
    }
}

/// Replace each listed child with its fragment nodes, keeping order.
fn splice(parent: &Handle, children: &[Handle], replacements: Vec<(usize, Vec<Handle>)>) {
    let mut pending = replacements.into_iter().peekable();
    let mut rebuilt = Vec::with_capacity(children.len());

    for (index, child) in children.iter().enumerate() {
        match pending.next_if(|(at, _)| *at == index) {
            Some((_, nodes)) => {
                for node in nodes {
                    node.parent.set(Some(Rc::downgrade(parent)));
                    rebuilt.push(node);
                }
                child.parent.set(None);
            }
            None => rebuilt.push(child.clone()),
        }
    }

    *parent.children.borrow_mut() = rebuilt;
}

fn is_raw_text(node: &Handle) -> bool {
    match &node.data {
        NodeData::Element { name, .. } => RAW_TEXT_ELEMENTS.contains(&&*name.local),
        _ => false,
    }
}

/// Raw-text elements and existing annotation spans are not descended into.
fn is_opaque(node: &Handle) -> bool {
    if is_raw_text(node) {
        return true;
    }
    let NodeData::Element { name, attrs, .. } = &node.data else {
        return false;
    };
    &*name.local == "span"
        && attrs.borrow().iter().any(|attr| {
            &*attr.name.local == "class" && attr.value.split_ascii_whitespace().any(|c| c == ANNOTATION_CLASS)
        })
}

/// Compose the annotated markup for one text node, or `None` when no word
/// in it is recorded.
fn compose_annotated(text: &str, record: &MisspellingRecord) -> Option<(String, usize)> {
    if text.trim().is_empty() {
        return None;
    }

    let mut out = String::with_capacity(text.len() * 2);
    let mut last = 0;
    let mut hits = 0;

    for (start, word) in word_spans(text) {
        if !record.contains(word) {
            continue;
        }
        escape_text(&text[last..start], &mut out);
        out.push_str("<span class=\"");
        out.push_str(ANNOTATION_CLASS);
        out.push_str("\" ");
        out.push_str(ANNOTATION_ATTR);
        out.push_str("=\"");
        escape_attr(word, &mut out);
        out.push_str("\">");
        escape_text(word, &mut out);
        out.push_str("</span>");
        last = start + word.len();
        hits += 1;
    }

    if hits == 0 {
        return None;
    }
    escape_text(&text[last..], &mut out);
    Some((out, hits))
}

/// Parse `markup` as a fragment in the context of `parent` and detach the
/// resulting top-level nodes.
fn parse_fragment_nodes(parent: &Handle, markup: &str) -> Result<Vec<Handle>, AnnotateError> {
    let context = match &parent.data {
        NodeData::Element { name, .. } => name.clone(),
        _ => QualName::new(None, Namespace::from(XHTML_NS), LocalName::from("body")),
    };

    let dom = parse_fragment(RcDom::default(), ParseOpts::default(), context, Vec::new())
        .from_utf8()
        .read_from(&mut markup.as_bytes())
        .map_err(|e| AnnotateError::Fragment(e.to_string()))?;

    let root = dom
        .document
        .children
        .borrow()
        .first()
        .cloned()
        .ok_or_else(|| AnnotateError::Fragment("fragment produced no root".to_string()))?;

    // Take the nodes out of the fragment root before the fragment dom drops;
    // rcdom's drop empties the children of every node still attached to it.
    let nodes = std::mem::take(&mut *root.children.borrow_mut());
    Ok(nodes)
}

fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
}

fn escape_attr(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
