//! DOM Node - Compact representation
//!
//! Links to relatives are stored as [`NodeId`]s (4 bytes) instead of
//! pointers, which keeps the tree free of reference counting.

use crate::{InternedString, NodeId};

/// DOM Node - Core structure
#[derive(Debug)]
pub struct Node {
    /// Parent node (NONE if root)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    fn detached(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Create a new element node
    pub fn element(data: ElementData) -> Self {
        Self::detached(NodeData::Element(data))
    }

    /// Create a new text node
    pub fn text(content: String) -> Self {
        Self::detached(NodeData::Text(content))
    }

    /// Create a new comment node
    pub fn comment(content: String) -> Self {
        Self::detached(NodeData::Comment(content))
    }

    /// Create a doctype node
    pub fn doctype(name: InternedString) -> Self {
        Self::detached(NodeData::Doctype { name })
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::detached(NodeData::Document)
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug)]
pub enum NodeData {
    /// Document root
    Document,
    /// DOCTYPE
    Doctype { name: InternedString },
    /// Element
    Element(ElementData),
    /// Text content
    Text(String),
    /// Comment
    Comment(String),
}

/// Element-specific data
#[derive(Debug)]
pub struct ElementData {
    /// Local tag name, lowercased by the parser
    pub name: InternedString,
    /// Attributes in source order
    pub attrs: Vec<Attribute>,
    /// Cached id attribute value
    pub id: Option<String>,
    /// Cached class list, in source order
    pub classes: Vec<String>,
}

impl ElementData {
    pub fn new(name: InternedString) -> Self {
        Self {
            name,
            attrs: Vec::new(),
            id: None,
            classes: Vec::new(),
        }
    }

    /// Set an attribute, keeping the id and class caches in sync
    ///
    /// `name_str` is the resolved form of `name`; it is only used to detect
    /// `id` and `class`.
    pub fn set_attr(&mut self, name: InternedString, name_str: &str, value: String) {
        match name_str {
            "id" => self.id = Some(value.clone()),
            "class" => {
                self.classes = value.split_ascii_whitespace().map(str::to_string).collect();
            }
            _ => {}
        }

        if let Some(attr) = self.attrs.iter_mut().find(|a| a.name == name) {
            attr.value = value;
            return;
        }
        self.attrs.push(Attribute { name, value });
    }

    /// Check whether a class is present
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Attribute
#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: InternedString,
    pub value: String,
}
