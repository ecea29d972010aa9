//! [`SelectorHost`] for shortsel-dom documents

use shortsel_css::{ElementQuery, SelectorError};
use shortsel_dom::{Document, NodeId};

use crate::host::{Scope, SelectorHost};

impl SelectorHost for Document {
    type Element = NodeId;
    type Error = SelectorError;

    fn tag_name(&self, element: NodeId) -> String {
        self.tree().tag_name(element).unwrap_or_default().to_string()
    }

    fn attributes(&self, element: NodeId) -> Vec<(String, String)> {
        let tree = self.tree();
        tree.element(element)
            .map(|e| {
                e.attrs
                    .iter()
                    .map(|a| (tree.resolve(a.name).to_string(), a.value.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn class_list(&self, element: NodeId) -> Vec<String> {
        self.tree()
            .element(element)
            .map(|e| e.classes.clone())
            .unwrap_or_default()
    }

    fn id(&self, element: NodeId) -> Option<String> {
        self.tree().element(element).and_then(|e| e.id.clone())
    }

    fn parent(&self, element: NodeId) -> Option<NodeId> {
        self.tree().parent_element(element)
    }

    fn children(&self, parent: Option<NodeId>) -> Vec<NodeId> {
        let tree = self.tree();
        tree.element_children(parent.unwrap_or(tree.root())).collect()
    }

    fn query(&self, selector: &str, scope: Scope<NodeId>) -> Result<Vec<NodeId>, SelectorError> {
        match scope {
            Scope::Document => self.query_selector_all(self.tree().root(), selector),
            Scope::ChildrenOf(parent) => self.filter_matching(&self.children(parent), selector),
        }
    }
}
