//! HTML5 Parser implementation
//!
//! Parses into html5ever's RcDom and converts the result into the arena
//! tree.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};
use shortsel_dom::{Document, DomTree, NodeId};

use crate::ParseError;

/// HTML5 parser
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlParser;

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self
    }

    /// Parse HTML string into a Document
    pub fn parse(&self, html: &str) -> Result<Document, ParseError> {
        tracing::debug!("Parsing HTML document ({} bytes)", html.len());

        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())?;

        let mut document = Document::new();
        let root = document.tree().root();
        self.convert_node(&dom.document, document.tree_mut(), root);
        document.finalize();

        tracing::debug!("Parsed {} nodes", document.tree().len());
        Ok(document)
    }

    /// Convert an RcDom node (and its subtree) into the arena
    fn convert_node(&self, handle: &Handle, tree: &mut DomTree, parent: NodeId) {
        match &handle.data {
            RcNodeData::Document => {
                for child in handle.children.borrow().iter() {
                    self.convert_node(child, tree, parent);
                }
            }
            RcNodeData::Doctype { name, .. } => {
                let id = tree.create_doctype(name);
                tree.append_child(parent, id);
            }
            RcNodeData::Text { contents } => {
                let text = contents.borrow();
                // Whitespace between tags carries no structure
                if !text.trim().is_empty() {
                    let id = tree.create_text(&text);
                    tree.append_child(parent, id);
                }
            }
            RcNodeData::Comment { contents } => {
                let id = tree.create_comment(contents);
                tree.append_child(parent, id);
            }
            RcNodeData::Element { name, attrs, .. } => {
                let id = tree.create_element(&name.local);
                for attr in attrs.borrow().iter() {
                    tree.set_attribute(id, &attr.name.local, &attr.value);
                }
                tree.append_child(parent, id);

                for child in handle.children.borrow().iter() {
                    self.convert_node(child, tree, id);
                }
            }
            RcNodeData::ProcessingInstruction { .. } => {}
        }
    }
}
