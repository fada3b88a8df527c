use log::error;
use num_traits::{Float, Zero};
use std::fmt;
use std::fmt::Debug;

use crate::graph::{Graph, NodeId};

/// Final product of a search: the route in source -> target order.
///
/// An unreachable target is a normal outcome, not an error: the path is
/// empty, the distance infinite and `reachable` false.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult<W> {
    /// Nodes along the shortest path, source first; empty if unreachable
    pub nodes: Vec<NodeId>,

    /// Total path distance; infinite if unreachable
    pub total_distance: W,

    /// Whether the target can be reached from the source
    pub reachable: bool,
}

impl<W> PathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub(crate) fn unreachable() -> Self {
        PathResult {
            nodes: Vec::new(),
            total_distance: W::infinity(),
            reachable: false,
        }
    }
}

impl<W> fmt::Display for PathResult<W>
where
    W: Float + Zero + Debug + Copy + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.reachable || self.nodes.is_empty() {
            return write!(f, "target is not reachable from the source");
        }

        writeln!(f, "Total distance: {}", self.total_distance)?;
        write!(f, "Path sequence ({} nodes): ", self.nodes.len())?;
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", node)?;
        }
        Ok(())
    }
}

/// Distinguishes an ordinary unreachable result from one degraded by a
/// corrupt predecessor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathIntegrity {
    /// The tables were consistent; `reachable` reflects true connectivity
    Intact,

    /// The predecessor walk cycled or terminated away from the source. The
    /// result was forced to unreachable and the violation logged.
    BrokenPredecessorChain,
}

/// Walks the predecessor table from target back to source and validates the
/// resulting sequence.
///
/// `source == target` with a zero distance yields the one-node path
/// `[source]`. A walk that does not start at the source is an internal
/// invariant violation, reported as unreachable with
/// [`PathIntegrity::BrokenPredecessorChain`] so callers and tests can tell
/// it apart from genuine unreachability.
pub fn reconstruct<W, G>(
    graph: &G,
    distances: &[W],
    predecessors: &[Option<usize>],
    source: usize,
    target: usize,
) -> (PathResult<W>, PathIntegrity)
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    if distances[target].is_infinite() {
        return (PathResult::unreachable(), PathIntegrity::Intact);
    }

    let mut indices = Vec::new();
    let mut current = Some(target);
    while let Some(node) = current {
        indices.push(node);
        // A chain longer than the node count can only mean a cycle.
        if indices.len() > graph.node_count() {
            error!(
                "path reconstruction aborted: predecessor cycle through {}",
                graph.nodes()[node].id()
            );
            return (
                PathResult::unreachable(),
                PathIntegrity::BrokenPredecessorChain,
            );
        }
        current = predecessors[node];
    }
    indices.reverse();

    if indices.first() != Some(&source) {
        error!(
            "path reconstruction error: walk to {} did not end at the source",
            graph.nodes()[target].id()
        );
        return (
            PathResult::unreachable(),
            PathIntegrity::BrokenPredecessorChain,
        );
    }

    let nodes = indices
        .iter()
        .map(|&dense| graph.nodes()[dense].id().clone())
        .collect();

    (
        PathResult {
            nodes,
            total_distance: distances[target],
            reachable: true,
        },
        PathIntegrity::Intact,
    )
}
