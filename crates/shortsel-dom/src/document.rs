//! Document - High-level document API

use crate::{DomTree, NodeId};

/// HTML Document
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    tree: DomTree,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <head> element
    head_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
}

impl Document {
    /// Create a document holding only the document node
    pub fn new() -> Self {
        Self {
            tree: DomTree::new(),
            html_element: NodeId::NONE,
            head_element: NodeId::NONE,
            body_element: NodeId::NONE,
        }
    }

    /// Locate the html/head/body elements after the tree was built
    pub fn finalize(&mut self) {
        self.html_element = self
            .tree
            .element_children(self.tree.root())
            .find(|&id| self.tree.tag_name(id) == Some("html"))
            .unwrap_or(NodeId::NONE);

        if !self.html_element.is_valid() {
            return;
        }
        for child in self.tree.element_children(self.html_element) {
            match self.tree.tag_name(child) {
                Some("head") if !self.head_element.is_valid() => self.head_element = child,
                Some("body") if !self.body_element.is_valid() => self.body_element = child,
                _ => {}
            }
        }
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <head> element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// First element in document order carrying the given id
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree
            .descendants(self.tree.root())
            .into_iter()
            .find(|&node| {
                self.tree
                    .element(node)
                    .is_some_and(|e| e.id.as_deref() == Some(id))
            })
    }

    /// All elements in document order
    pub fn elements(&self) -> Vec<NodeId> {
        self.tree.descendants(self.tree.root())
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
