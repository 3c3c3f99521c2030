//! Parse result wrapper.

use std::fmt;

use serde::Serialize;

use crate::node::Node;
use crate::ordered::OrderedNode;

/// The tree produced by [`parse`](crate::parse).
///
/// Which variant comes back depends on [`ParseOptions::ordered`](crate::ParseOptions::ordered).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Stylesheet {
    /// Keyed tree, the default.
    Tree(Node),
    /// Source ordered slots.
    Ordered(OrderedNode),
}

impl Stylesheet {
    /// The keyed tree, if this is one.
    pub fn as_tree(&self) -> Option<&Node> {
        match self {
            Self::Tree(node) => Some(node),
            Self::Ordered(_) => None,
        }
    }

    /// The ordered tree, if this is one.
    pub fn as_ordered(&self) -> Option<&OrderedNode> {
        match self {
            Self::Ordered(node) => Some(node),
            Self::Tree(_) => None,
        }
    }

    /// Take the keyed tree.
    pub fn into_tree(self) -> Option<Node> {
        match self {
            Self::Tree(node) => Some(node),
            Self::Ordered(_) => None,
        }
    }

    /// Take the ordered tree.
    pub fn into_ordered(self) -> Option<OrderedNode> {
        match self {
            Self::Ordered(node) => Some(node),
            Self::Tree(_) => None,
        }
    }

    /// Serialize back to CSS.
    pub fn to_css(&self, depth: usize, breaks: bool) -> String {
        match self {
            Self::Tree(node) => crate::serializer::to_css(node, depth, breaks),
            Self::Ordered(node) => crate::serializer::ordered_to_css(node, depth, breaks),
        }
    }
}

impl From<Node> for Stylesheet {
    fn from(node: Node) -> Self {
        Self::Tree(node)
    }
}

impl From<OrderedNode> for Stylesheet {
    fn from(node: OrderedNode) -> Self {
        Self::Ordered(node)
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css(0, false))
    }
}
