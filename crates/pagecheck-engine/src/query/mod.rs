pub mod resolve;

pub use resolve::{ResolveError, resolve};

/// One selection step of a [`SelectorPath`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// O(1) lookup through the document's id index.
    Id(String),
    /// Collect descendants of every current candidate whose class list
    /// contains the marker, in document order.
    Marker(String),
    /// Collect descendants of every current candidate with the given tag
    /// name, in document order.
    Tag(String),
    /// Select the Nth (0-based) node of the current sequence.
    Nth(usize),
}

/// An ordered recipe of selection steps used to locate nodes.
///
/// Paths are plain data: stateless, never mutated by resolution, and
/// reusable across documents and scenarios.
///
/// ```
/// use pagecheck_engine::query::SelectorPath;
///
/// let badges = SelectorPath::id("ai")
///     .marker("project-card")
///     .nth(2)
///     .marker("project-card__tech-badge");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectorPath {
    steps: Vec<Step>,
}

impl SelectorPath {
    /// An empty path; resolution starts (and ends) at the document root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a path with an id lookup.
    pub fn id(id: &str) -> Self {
        Self {
            steps: vec![Step::Id(id.to_string())],
        }
    }

    /// Starts a path with a document-wide marker scan.
    pub fn anywhere(marker: &str) -> Self {
        Self::new().marker(marker)
    }

    /// Appends a class-marker step.
    pub fn marker(mut self, marker: &str) -> Self {
        self.steps.push(Step::Marker(marker.to_string()));
        self
    }

    /// Appends a tag-name step.
    pub fn tag(mut self, tag: &str) -> Self {
        self.steps.push(Step::Tag(tag.to_string()));
        self
    }

    /// Appends an ordinal step.
    pub fn nth(mut self, index: usize) -> Self {
        self.steps.push(Step::Nth(index));
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}
