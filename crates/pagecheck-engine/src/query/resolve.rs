use crate::dom::{Document, NodeId};

use super::{SelectorPath, Step};

/// A structural lookup failure.
///
/// These are converted into failing verdicts at the expectation boundary
/// rather than aborting a run: a missing element is the test's subject, not
/// an internal fault.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("no element with id \"{0}\"")]
    NotFound(String),
    #[error("ordinal {requested} out of range: {available} node(s) matched")]
    IndexOutOfRange { requested: usize, available: usize },
}

/// Resolves a path against a document, left to right.
///
/// Each step narrows the candidate sequence produced by the previous step;
/// the result preserves document order. An empty marker or tag match is a
/// normal outcome (judged later by the expectation), while a missing id or
/// an out-of-range ordinal is a hard [`ResolveError`]: it signals
/// structural drift the test must surface loudly.
pub fn resolve(doc: &Document, path: &SelectorPath) -> Result<Vec<NodeId>, ResolveError> {
    let mut current = vec![doc.root()];
    for step in path.steps() {
        current = match step {
            Step::Id(id) => {
                let node = doc.by_id(id).ok_or_else(|| ResolveError::NotFound(id.clone()))?;
                vec![node]
            }
            Step::Marker(marker) => scan(doc, &current, |n| doc.has_class(n, marker)),
            Step::Tag(tag) => scan(doc, &current, |n| doc.tag(n) == Some(tag.as_str())),
            Step::Nth(index) => {
                let node =
                    current
                        .get(*index)
                        .copied()
                        .ok_or_else(|| ResolveError::IndexOutOfRange {
                            requested: *index,
                            available: current.len(),
                        })?;
                vec![node]
            }
        };
    }
    Ok(current)
}

fn scan(doc: &Document, candidates: &[NodeId], keep: impl Fn(NodeId) -> bool) -> Vec<NodeId> {
    let mut out = Vec::new();
    for &candidate in candidates {
        for node in doc.descendants(candidate) {
            if keep(node) {
                out.push(node);
            }
        }
    }
    out
}
