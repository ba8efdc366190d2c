use std::collections::{BTreeMap, HashMap};

/// Index of a node within its owning [`Document`]'s arena.
///
/// Ids are only meaningful for the document that produced them; documents
/// never share nodes, so an id from one document must not be used with
/// another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// One node of the parsed tree: an element or a run of text.
#[derive(Debug, Clone)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An element with its tag, attributes, and ordered children.
#[derive(Debug, Clone)]
pub struct Element {
    /// Tag name, lowercased at parse time.
    pub tag: String,
    /// Attribute name to value. Boolean attributes carry an empty value.
    pub attrs: BTreeMap<String, String>,
    /// Child node ids in document order.
    pub children: Vec<NodeId>,
}

/// A parsed markup tree plus an id index built once at load time.
///
/// Immutable after parse. The root is a synthetic `#document` element whose
/// children are the top-level nodes of the input.
#[derive(Debug)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
    ids: HashMap<String, NodeId>,
}

impl Document {
    pub(crate) fn new(nodes: Vec<Node>, root: NodeId, ids: HashMap<String, NodeId>) -> Self {
        Self { nodes, root, ids }
    }

    /// The synthetic root element wrapping the whole input.
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// The element data for `id`, or `None` for text nodes.
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match self.node(id) {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    /// O(1) lookup of an element by its `id` attribute.
    pub fn by_id(&self, id: &str) -> Option<NodeId> {
        self.ids.get(id).copied()
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|el| el.tag.as_str())
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)?.attrs.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, id: NodeId, name: &str) -> bool {
        self.attr(id, name).is_some()
    }

    /// Whether the element's `class` attribute contains `marker` as one of
    /// its whitespace-separated entries.
    pub fn has_class(&self, id: NodeId, marker: &str) -> bool {
        self.attr(id, "class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == marker))
    }

    /// Child node ids in document order. Empty for text nodes.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.node(id) {
            Node::Element(el) => &el.children,
            Node::Text(_) => &[],
        }
    }

    /// All descendants of `id` (excluding `id` itself) in pre-order, which
    /// is document order.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let mut stack: Vec<NodeId> = self.children(id).to_vec();
        stack.reverse();
        Descendants { doc: self, stack }
    }

    /// Concatenated text of all text descendants, in document order.
    ///
    /// Entities are already decoded at parse time, so this is the rendered
    /// text as a reader would see it (modulo whitespace, which callers
    /// normalize).
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match self.node(id) {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                for &child in &el.children {
                    self.collect_text(child, out);
                }
            }
        }
    }
}

/// Pre-order iterator over a subtree, excluding the starting node.
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        for &child in self.doc.children(id).iter().rev() {
            self.stack.push(child);
        }
        Some(id)
    }
}
