use std::collections::{BTreeMap, HashMap};

use crate::dom::{Document, Element, Node, NodeId};

use super::ParseError;

/// Assembles a [`Document`] from parsed markup, tracking the stack of
/// currently open elements.
///
/// The builder owns the node arena; [`finish`](Self::finish) hands it to the
/// `Document` once the stack has unwound back to the synthetic root.
pub struct TreeBuilder {
    nodes: Vec<Node>,
    stack: Vec<NodeId>,
    ids: HashMap<String, NodeId>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        let root = Node::Element(Element {
            tag: "#document".to_string(),
            attrs: BTreeMap::new(),
            children: Vec::new(),
        });
        Self {
            nodes: vec![root],
            stack: vec![NodeId(0)],
            ids: HashMap::new(),
        }
    }

    /// Appends a text node to the current open element. Empty text is
    /// dropped.
    pub fn append_text(&mut self, text: String) {
        if text.is_empty() {
            return;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::Text(text));
        self.attach(id);
    }

    /// Opens a new element as a child of the current open element and makes
    /// it the current one. Records the `id` attribute in the index; the
    /// first occurrence of an id wins.
    pub fn open_element(&mut self, tag: String, attrs: BTreeMap<String, String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        if let Some(dom_id) = attrs.get("id") {
            self.ids.entry(dom_id.clone()).or_insert(id);
        }
        self.nodes.push(Node::Element(Element {
            tag,
            attrs,
            children: Vec::new(),
        }));
        self.attach(id);
        self.stack.push(id);
        id
    }

    /// Closes the current element without a matching close tag: void
    /// elements, self-closed tags, and raw-text elements whose close tag
    /// was consumed with their content.
    pub fn close_implicit(&mut self) {
        debug_assert!(self.stack.len() > 1);
        self.stack.pop();
    }

    /// Closes the current element against an explicit `</tag>`, verifying
    /// it matches the innermost open element.
    pub fn close_element(&mut self, tag: &str, pos: usize) -> Result<(), ParseError> {
        if self.stack.len() <= 1 {
            return Err(ParseError::StrayClose {
                tag: tag.to_string(),
                pos,
            });
        }
        let top = *self.stack.last().expect("stack is non-empty");
        let open_tag = match &self.nodes[top.0] {
            Node::Element(el) => el.tag.as_str(),
            Node::Text(_) => unreachable!("only elements are pushed onto the open stack"),
        };
        if open_tag != tag {
            return Err(ParseError::MismatchedClose {
                open: open_tag.to_string(),
                found: tag.to_string(),
                pos,
            });
        }
        self.stack.pop();
        Ok(())
    }

    /// Finalizes the document. Fails if any element is still open.
    pub fn finish(mut self) -> Result<Document, ParseError> {
        if self.stack.len() > 1 {
            let top = *self.stack.last().expect("stack is non-empty");
            let tag = match &self.nodes[top.0] {
                Node::Element(el) => el.tag.clone(),
                Node::Text(_) => unreachable!("only elements are pushed onto the open stack"),
            };
            return Err(ParseError::UnterminatedElement { tag });
        }
        let root = self.stack.pop().expect("root remains on the stack");
        Ok(Document::new(self.nodes, root, self.ids))
    }

    fn attach(&mut self, child: NodeId) {
        let parent = *self.stack.last().expect("root remains on the stack");
        match &mut self.nodes[parent.0] {
            Node::Element(el) => el.children.push(child),
            Node::Text(_) => unreachable!("only elements are pushed onto the open stack"),
        }
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
