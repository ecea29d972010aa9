//! shortsel DOM - Document Object Model
//!
//! Arena-backed DOM tree. Nodes are addressed by [`NodeId`] and never move,
//! so ids stay valid for the lifetime of the tree.

mod document;
mod interner;
mod node;
mod tree;

pub use document::Document;
pub use interner::{InternedString, StringInterner};
pub use node::{Attribute, ElementData, Node, NodeData};
pub use tree::{Children, DomTree};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root (document) node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check whether this id refers to a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Arena index of the node
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
