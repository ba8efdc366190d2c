use std::sync::OnceLock;

use regex::Regex;

use crate::dom::{Document, NodeId};

/// How each resolved node is projected into a comparable value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    /// Normalized text content: trimmed, inner whitespace collapsed.
    Text,
    /// The value of a named attribute; `None` per node when absent.
    Attr(String),
}

/// An ordered sequence of projected values derived from resolved nodes.
///
/// The sequence preserves document order. Projection never mutates the
/// source tree, and an empty match yields an empty sequence rather than a
/// failure: absence is judged by the expectation, not the extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extracted {
    Texts(Vec<String>),
    Attrs(Vec<Option<String>>),
}

impl Extracted {
    pub fn len(&self) -> usize {
        match self {
            Extracted::Texts(items) => items.len(),
            Extracted::Attrs(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Projects each node to the requested shape, in the order given.
pub fn extract(doc: &Document, nodes: &[NodeId], projection: &Projection) -> Extracted {
    match projection {
        Projection::Text => Extracted::Texts(
            nodes
                .iter()
                .map(|&n| normalize_text(&doc.text_content(n)))
                .collect(),
        ),
        Projection::Attr(name) => Extracted::Attrs(
            nodes
                .iter()
                .map(|&n| doc.attr(n, name).map(str::to_string))
                .collect(),
        ),
    }
}

/// Counts descendants of `node` carrying the class marker. Degenerate case
/// of the marker scan for scenarios that assert cardinality only.
pub fn count_marked(doc: &Document, node: NodeId, marker: &str) -> usize {
    doc.descendants(node)
        .filter(|&n| doc.has_class(n, marker))
        .count()
}

/// Trims surrounding whitespace and collapses inner runs to single spaces,
/// matching how a rendered page displays the text.
pub fn normalize_text(text: &str) -> String {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    let ws = WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("invalid whitespace regex"));
    ws.replace_all(text.trim(), " ").into_owned()
}
