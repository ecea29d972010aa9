//! Uniqueness checks against the host document

use std::collections::HashSet;

use crate::host::{Scope, SelectorHost};

/// Answers whether a selector resolves to exactly the expected elements
pub struct UniquenessOracle<'h, H: SelectorHost> {
    host: &'h H,
}

impl<H: SelectorHost> Clone for UniquenessOracle<'_, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H: SelectorHost> Copy for UniquenessOracle<'_, H> {}

impl<'h, H: SelectorHost> UniquenessOracle<'h, H> {
    pub fn new(host: &'h H) -> Self {
        Self { host }
    }

    /// The whole document resolves `selector` to `element` alone
    pub fn is_unique(&self, element: H::Element, selector: &str) -> bool {
        self.resolve(selector, Scope::Document)
            .is_some_and(|found| found.as_slice() == [element])
    }

    /// The whole document resolves `selector` to exactly `elements`
    ///
    /// Order does not matter; repeated entries in `elements` count once.
    pub fn is_same_set(&self, elements: &[H::Element], selector: &str) -> bool {
        let Some(found) = self.resolve(selector, Scope::Document) else {
            return false;
        };
        let expected: HashSet<H::Element> = elements.iter().copied().collect();
        found.len() == expected.len() && found.iter().all(|e| expected.contains(e))
    }

    /// Among the element's siblings, `selector` matches the element alone
    pub fn is_unique_among_siblings(&self, element: H::Element, selector: &str) -> bool {
        let scope = Scope::ChildrenOf(self.host.parent(element));
        self.resolve(selector, scope)
            .is_some_and(|found| found.as_slice() == [element])
    }

    /// Dispatch to [`Self::is_unique`] or [`Self::is_same_set`]
    pub fn resolves_to(&self, targets: &[H::Element], selector: &str) -> bool {
        match targets {
            [single] => self.is_unique(*single, selector),
            many => self.is_same_set(many, selector),
        }
    }

    fn resolve(&self, selector: &str, scope: Scope<H::Element>) -> Option<Vec<H::Element>> {
        if selector.is_empty() {
            return None;
        }
        match self.host.query(selector, scope) {
            Ok(found) => Some(found),
            Err(err) => {
                tracing::trace!("host rejected {:?}: {}", selector, err);
                None
            }
        }
    }
}
