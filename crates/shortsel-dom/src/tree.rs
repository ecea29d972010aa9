//! DOM Tree (arena-based allocation)

use crate::{ElementData, InternedString, Node, NodeId, StringInterner};

/// Arena-based DOM tree
///
/// Index 0 always holds the document node.
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
    interner: StringInterner,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
            interner: StringInterner::new(),
        }
    }

    /// The document node
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Element data of a node, if it is an element
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(Node::as_element)
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Resolve an interned string
    #[inline]
    pub fn resolve(&self, id: InternedString) -> &str {
        self.interner.get(id)
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element; the tag name is lowercased
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let name = self.interner.intern(&tag.to_ascii_lowercase());
        self.push(Node::element(ElementData::new(name)))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(Node::text(content.to_string()))
    }

    /// Create a detached comment node
    pub fn create_comment(&mut self, content: &str) -> NodeId {
        self.push(Node::comment(content.to_string()))
    }

    /// Create a detached doctype node
    pub fn create_doctype(&mut self, name: &str) -> NodeId {
        let name = self.interner.intern(name);
        self.push(Node::doctype(name))
    }

    /// Set an attribute on an element; no-op for other nodes
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        let name_id = self.interner.intern(name);
        match self.nodes.get_mut(id.index()).and_then(Node::as_element_mut) {
            Some(elem) => elem.set_attr(name_id, name, value.to_string()),
            None => tracing::warn!("set_attribute on non-element node {:?}", id),
        }
    }

    /// Append `child` as the last child of `parent`
    ///
    /// The child must be detached; attached children and invalid ids are
    /// ignored.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent == child || parent.index() >= self.len() || child.index() >= self.len() {
            tracing::warn!("append_child with invalid ids {:?} -> {:?}", child, parent);
            return;
        }
        if self.nodes[child.index()].parent.is_valid() {
            tracing::warn!("append_child on attached node {:?}", child);
            return;
        }

        let last = self.nodes[parent.index()].last_child;
        {
            let node = &mut self.nodes[child.index()];
            node.parent = parent;
            node.prev_sibling = last;
            node.next_sibling = NodeId::NONE;
        }
        if last.is_valid() {
            self.nodes[last.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        self.nodes[parent.index()].last_child = child;
    }

    /// Iterate over all children of a node
    pub fn children(&self, id: NodeId) -> Children<'_> {
        let next = self.get(id).map(|n| n.first_child).unwrap_or(NodeId::NONE);
        Children { tree: self, next }
    }

    /// Element children of a node, in document order
    pub fn element_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id)
            .filter(|(_, node)| node.is_element())
            .map(|(child, _)| child)
    }

    /// Parent node of any node
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.parent).filter(|p| p.is_valid())
    }

    /// Parent of a node if that parent is an element
    pub fn parent_element(&self, id: NodeId) -> Option<NodeId> {
        self.parent(id).filter(|&p| self.element(p).is_some())
    }

    /// Lowercased tag name of an element
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|e| self.resolve(e.name))
    }

    /// Zero-based position of an element among its element siblings,
    /// together with the number of element siblings (itself included)
    pub fn element_position(&self, id: NodeId) -> Option<(usize, usize)> {
        let parent = self.parent(id)?;
        let mut position = None;
        let mut count = 0;
        for child in self.element_children(parent) {
            if child == id {
                position = Some(count);
            }
            count += 1;
        }
        position.map(|p| (p, count))
    }

    /// All elements below `id`, in document (pre-)order
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).map(|(c, _)| c).collect();
        stack.reverse();
        while let Some(current) = stack.pop() {
            if self.element(current).is_some() {
                out.push(current);
            }
            let mark = stack.len();
            stack.extend(self.children(current).map(|(c, _)| c));
            stack[mark..].reverse();
        }
        out
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the children of a node
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}
