use crate::graph::NodeId;

/// One record of the search's internal decisions.
///
/// Events are emitted in decision order and the sequence for a run is itself
/// a value: replaying it reconstructs the exact visualization state the
/// engine reached. The set of variants is closed; consumers match on all
/// three.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepEvent<W> {
    /// A node was removed from the frontier and finalized. Its distance is
    /// definitive from this point on.
    NodeVisited { node: NodeId, distance: W },

    /// One outgoing edge of the newly finalized node was examined.
    ///
    /// Emitted for every edge visited, whether or not it improved the
    /// neighbor, so a consumer can show rejected relaxations too. `candidate`
    /// is the tentative distance offered through this edge.
    EdgeRelaxed {
        from: NodeId,
        to: NodeId,
        weight: W,
        candidate: W,
        updated: bool,
    },

    /// A node entered the frontier, or re-entered it with an improved
    /// distance.
    QueueUpdate { node: NodeId, distance: W },
}
