//! Document access required by the synthesizer
//!
//! The synthesizer never touches a concrete DOM. Everything it needs
//! (names, attributes, tree shape, selector matching) goes through
//! [`SelectorHost`].

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Where a selector query is evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope<E> {
    /// Every element of the document
    Document,
    /// The element children of a parent; `None` means the top-level
    /// elements of the document
    ChildrenOf(Option<E>),
}

/// Capabilities of the document an element lives in
pub trait SelectorHost {
    /// Opaque element handle
    type Element: Copy + Eq + Hash + Debug;

    /// Error reported by [`SelectorHost::query`] for selectors it rejects
    type Error: Display;

    /// Tag name of the element
    fn tag_name(&self, element: Self::Element) -> String;

    /// Attribute name/value pairs in document order
    fn attributes(&self, element: Self::Element) -> Vec<(String, String)>;

    /// Class list in document order
    fn class_list(&self, element: Self::Element) -> Vec<String>;

    /// Parent element, `None` for the document element
    fn parent(&self, element: Self::Element) -> Option<Self::Element>;

    /// Element children of `parent` in document order
    fn children(&self, parent: Option<Self::Element>) -> Vec<Self::Element>;

    /// Elements of `scope` matched by `selector`, in document order
    fn query(
        &self,
        selector: &str,
        scope: Scope<Self::Element>,
    ) -> Result<Vec<Self::Element>, Self::Error>;

    /// Value of the `id` attribute
    fn id(&self, element: Self::Element) -> Option<String> {
        self.attributes(element)
            .into_iter()
            .find(|(name, _)| name == "id")
            .map(|(_, value)| value)
    }

    /// Zero-based ordinal among element siblings and the sibling count
    ///
    /// `None` for an element without a parent.
    fn position(&self, element: Self::Element) -> Option<(usize, usize)> {
        let siblings = self.children(Some(self.parent(element)?));
        let index = siblings.iter().position(|&s| s == element)?;
        Some((index, siblings.len()))
    }

    /// The element followed by its ancestors, innermost first
    fn lineage(&self, element: Self::Element) -> Vec<Self::Element> {
        let mut out = vec![element];
        let mut cursor = self.parent(element);
        while let Some(parent) = cursor {
            out.push(parent);
            cursor = self.parent(parent);
        }
        out
    }
}
