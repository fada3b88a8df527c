pub mod dijkstra;
pub mod events;
pub mod reconstruct;

pub use dijkstra::{SearchOutcome, SearchState, TracedDijkstra};
pub use events::StepEvent;
pub use reconstruct::{reconstruct, PathIntegrity, PathResult};

use num_traits::{Float, Zero};
use rayon::prelude::*;
use std::fmt::Debug;

use crate::graph::{Graph, NodeId};
use crate::Result;

/// Runs one isolated search per (source, target) pair.
///
/// The graph is shared read-only; every run owns its own tables and
/// frontier, so the pairs can be searched in parallel without touching each
/// other's state. Results come back in input order.
pub fn run_batch<W, G>(graph: &G, pairs: &[(NodeId, NodeId)]) -> Vec<Result<SearchOutcome<W>>>
where
    W: Float + Zero + Debug + Copy + Ord + Send,
    G: Graph<W> + Sync,
{
    pairs
        .par_iter()
        .map(|(source, target)| TracedDijkstra::new().run(graph, Some(source), target))
        .collect()
}
