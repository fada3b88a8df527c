//! Pathtrace - instrumented shortest path search over weighted directed graphs.
//!
//! The engine runs Dijkstra's algorithm between a single source and a single
//! target and records every internal decision it makes - node finalizations,
//! edge relaxations (accepted or rejected), frontier refreshes - as an ordered
//! [`StepEvent`] sequence. A rendering layer replays that sequence to animate
//! the search; the engine itself performs no I/O and produces byte-identical
//! traces for the same graph construction order and endpoint pair.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod viz;

pub use algorithm::{
    dijkstra::TracedDijkstra, run_batch, PathIntegrity, PathResult, SearchOutcome, SearchState,
    StepEvent,
};
pub use data_structures::Frontier;
/// Re-export main types for convenient use
pub use graph::{Graph, GraphStore, Node, NodeId};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Duplicate node id: {0}")]
    DuplicateNode(NodeId),

    #[error("Unknown node id: {0}")]
    UnknownNode(NodeId),

    #[error("Source node not registered in graph: {0}")]
    InvalidSource(NodeId),

    #[error("Negative edge weight {weight} on {from} -> {to}")]
    NegativeWeight {
        from: NodeId,
        to: NodeId,
        weight: f64,
    },

    #[error("Frontier unexpectedly empty")]
    EmptyFrontier,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
