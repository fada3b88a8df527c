use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::graph::store::{Node, NodeId};

/// Trait representing a weighted directed graph with stable node identifiers
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of registered nodes
    fn node_count(&self) -> usize;

    /// Returns the number of directed edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns all nodes in insertion order.
    ///
    /// A node's position in this slice is its dense index, used by the search
    /// tables and as the frontier tie-break order.
    fn nodes(&self) -> &[Node];

    /// Returns the node at a dense index, if any
    fn node(&self, index: usize) -> Option<&Node>;

    /// Resolves a node identifier to its dense index
    fn index_of(&self, id: &NodeId) -> Option<usize>;

    /// Returns an iterator over the outgoing edges of a node as
    /// `(target index, weight)` pairs, in edge insertion order.
    ///
    /// A node without outgoing edges yields an empty iterator, never an
    /// error. The iterator is restartable: each call walks the full list
    /// again from the front.
    fn outgoing_edges(&self, index: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;
}
