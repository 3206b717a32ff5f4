//! Polymorphic children arguments and their normalization.
//!
//! Factory functions accept children in one of four shapes; normalization
//! flattens whichever shape was given into a concrete ordered `Vec<Node>`.

use std::fmt;

use crate::ast::Node;

/// A children argument in one of its accepted shapes.
///
/// Conversions exist for the common spellings, so callers pass a node, a
/// vector, an array, or `()` directly; deferred producers go through
/// [`Children::lazy`].
pub enum Children {
    /// No children
    Empty,
    /// One child node
    Single(Node),
    /// An ordered sequence of child nodes
    Many(Vec<Node>),
    /// A deferred producer, invoked exactly once during normalization
    Lazy(Box<dyn FnOnce() -> Children>),
}

impl Children {
    /// Wrap a zero-argument producer.
    ///
    /// The producer may return any children shape, including another
    /// producer; normalization keeps unwrapping until it reaches nodes.
    pub fn lazy<F, C>(producer: F) -> Self
    where
        F: FnOnce() -> C + 'static,
        C: Into<Children>,
    {
        Children::Lazy(Box::new(move || producer().into()))
    }

    /// Flatten this argument into a concrete ordered sequence.
    ///
    /// Total over all four shapes. Results are not memoized; a producer runs
    /// once per normalization, and a panic inside one propagates to the
    /// caller.
    pub fn normalize(self) -> Vec<Node> {
        match self {
            Children::Empty => Vec::new(),
            Children::Single(node) => vec![node],
            Children::Many(nodes) => nodes,
            Children::Lazy(producer) => producer().normalize(),
        }
    }
}

impl Default for Children {
    fn default() -> Self {
        Children::Empty
    }
}

impl fmt::Debug for Children {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Children::Empty => f.write_str("Empty"),
            Children::Single(node) => f.debug_tuple("Single").field(node).finish(),
            Children::Many(nodes) => f.debug_tuple("Many").field(nodes).finish(),
            Children::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

impl From<Node> for Children {
    fn from(node: Node) -> Self {
        Children::Single(node)
    }
}

impl From<Vec<Node>> for Children {
    fn from(nodes: Vec<Node>) -> Self {
        Children::Many(nodes)
    }
}

impl<const N: usize> From<[Node; N]> for Children {
    fn from(nodes: [Node; N]) -> Self {
        Children::Many(nodes.into())
    }
}

/// The "no children" spelling, as in `paragraph(())`
impl From<()> for Children {
    fn from(_: ()) -> Self {
        Children::Empty
    }
}
