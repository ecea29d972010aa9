//! Element Query
//!
//! querySelector, querySelectorAll, matches, closest.

use shortsel_dom::{Document, NodeId};

use crate::{SelectorError, SelectorList, SelectorParser};

/// Element query trait
pub trait ElementQuery {
    /// First element below `root` matching the selector
    fn query_selector(&self, root: NodeId, selector: &str) -> Result<Option<NodeId>, SelectorError>;

    /// All elements below `root` matching the selector, in document order
    fn query_selector_all(&self, root: NodeId, selector: &str) -> Result<Vec<NodeId>, SelectorError>;

    /// Elements of `candidates` matching the selector, order preserved
    fn filter_matching(&self, candidates: &[NodeId], selector: &str) -> Result<Vec<NodeId>, SelectorError>;

    /// Find the closest inclusive ancestor matching the selector
    fn closest(&self, element: NodeId, selector: &str) -> Result<Option<NodeId>, SelectorError>;

    /// Check if element matches selector
    fn matches(&self, element: NodeId, selector: &str) -> Result<bool, SelectorError>;
}

fn parse(selector: &str) -> Result<SelectorList, SelectorError> {
    SelectorParser::new().parse(selector)
}

impl ElementQuery for Document {
    fn query_selector(&self, root: NodeId, selector: &str) -> Result<Option<NodeId>, SelectorError> {
        let list = parse(selector)?;
        let tree = self.tree();
        Ok(tree
            .descendants(root)
            .into_iter()
            .find(|&node| list.matches(tree, node)))
    }

    fn query_selector_all(&self, root: NodeId, selector: &str) -> Result<Vec<NodeId>, SelectorError> {
        let candidates = self.tree().descendants(root);
        self.filter_matching(&candidates, selector)
    }

    fn filter_matching(&self, candidates: &[NodeId], selector: &str) -> Result<Vec<NodeId>, SelectorError> {
        let list = parse(selector)?;
        let tree = self.tree();
        let found: Vec<NodeId> = candidates
            .iter()
            .copied()
            .filter(|&node| list.matches(tree, node))
            .collect();
        tracing::trace!("{:?} matched {} of {} candidates", selector, found.len(), candidates.len());
        Ok(found)
    }

    fn closest(&self, element: NodeId, selector: &str) -> Result<Option<NodeId>, SelectorError> {
        let list = parse(selector)?;
        let tree = self.tree();
        let mut cursor = tree.element(element).map(|_| element);
        while let Some(node) = cursor {
            if list.matches(tree, node) {
                return Ok(Some(node));
            }
            cursor = tree.parent_element(node);
        }
        Ok(None)
    }

    fn matches(&self, element: NodeId, selector: &str) -> Result<bool, SelectorError> {
        Ok(parse(selector)?.matches(self.tree(), element))
    }
}
