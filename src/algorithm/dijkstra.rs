use log::{debug, warn};
use num_traits::{Float, ToPrimitive, Zero};
use std::fmt::Debug;

use crate::algorithm::events::StepEvent;
use crate::algorithm::reconstruct::{reconstruct, PathIntegrity, PathResult};
use crate::data_structures::Frontier;
use crate::graph::{Graph, NodeId};
use crate::{Error, Result};

/// States a search run moves through.
///
/// `Initializing -> Running -> Found | Exhausted`; the terminal state is
/// reported on the [`SearchOutcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// Tables and frontier are being seeded
    Initializing,

    /// The main loop is popping and relaxing
    Running,

    /// The target was finalized; remaining frontier entries were abandoned
    Found,

    /// The frontier drained, or surfaced only unreachable entries, without
    /// finalizing the target
    Exhausted,
}

/// Everything a single run produces: the final path, the ordered decision
/// trace, the terminal state and the reconstruction integrity flag.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<W> {
    /// The reconstructed shortest path
    pub result: PathResult<W>,

    /// The full decision trace, in emission order
    pub events: Vec<StepEvent<W>>,

    /// How the run terminated
    pub state: SearchState,

    /// Whether path reconstruction found the tables consistent
    pub integrity: PathIntegrity,
}

/// Dijkstra's algorithm instrumented with a step trace
#[derive(Debug, Default)]
pub struct TracedDijkstra;

impl TracedDijkstra {
    /// Creates a new engine instance
    pub fn new() -> Self {
        TracedDijkstra
    }

    /// Computes the shortest path from `source` to `target` together with
    /// the full decision trace.
    ///
    /// An unset source short-circuits to an unreachable result with an empty
    /// trace. A source id outside the graph is an error; an unreachable or
    /// unregistered target is not - it is reported through the result. Edge
    /// weights are checked during relaxation so a negative weight is raised
    /// at the exact edge responsible.
    pub fn run<W, G>(
        &self,
        graph: &G,
        source: Option<&NodeId>,
        target: &NodeId,
    ) -> Result<SearchOutcome<W>>
    where
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<W>,
    {
        let Some(source_id) = source else {
            warn!("search requested without a source node");
            return Ok(SearchOutcome {
                result: PathResult::unreachable(),
                events: Vec::new(),
                state: SearchState::Exhausted,
                integrity: PathIntegrity::Intact,
            });
        };

        let source_idx = graph
            .index_of(source_id)
            .ok_or_else(|| Error::InvalidSource(source_id.clone()))?;

        // A target outside the graph can never be finalized; the run plays
        // out and reports it as unreachable.
        let target_idx = graph.index_of(target);

        let n = graph.node_count();
        let mut state = SearchState::Initializing;

        let mut distances: Vec<W> = vec![W::infinity(); n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut frontier = Frontier::new();
        let mut events: Vec<StepEvent<W>> = Vec::new();

        distances[source_idx] = W::zero();
        frontier.push(source_idx, W::zero());
        events.push(StepEvent::QueueUpdate {
            node: id_at(graph, source_idx),
            distance: W::zero(),
        });

        debug!("search {} -> {} leaving {:?}", source_id, target, state);
        state = SearchState::Running;

        while !frontier.is_empty() {
            let (current, popped_distance) = frontier.pop_min()?;

            // Lazy deletion: a better path was recorded after this entry was
            // pushed. Stale entries carry no event.
            if popped_distance > distances[current] {
                continue;
            }

            let current_distance = distances[current];
            events.push(StepEvent::NodeVisited {
                node: id_at(graph, current),
                distance: current_distance,
            });

            // Early exit: the target's distance is final, its outgoing edges
            // are never relaxed.
            if Some(current) == target_idx {
                state = SearchState::Found;
                break;
            }

            // Everything still in the frontier is unreachable.
            if current_distance.is_infinite() {
                state = SearchState::Exhausted;
                break;
            }

            for (neighbor, weight) in graph.outgoing_edges(current) {
                if weight < W::zero() {
                    return Err(Error::NegativeWeight {
                        from: id_at(graph, current),
                        to: id_at(graph, neighbor),
                        weight: weight.to_f64().unwrap_or(f64::NAN),
                    });
                }

                let candidate = current_distance + weight;
                let updated = candidate < distances[neighbor];

                if updated {
                    distances[neighbor] = candidate;
                    predecessors[neighbor] = Some(current);
                    frontier.push(neighbor, candidate);
                    events.push(StepEvent::QueueUpdate {
                        node: id_at(graph, neighbor),
                        distance: candidate,
                    });
                }

                events.push(StepEvent::EdgeRelaxed {
                    from: id_at(graph, current),
                    to: id_at(graph, neighbor),
                    weight,
                    candidate,
                    updated,
                });
            }
        }

        if state == SearchState::Running {
            debug!("frontier drained before reaching {}", target);
            state = SearchState::Exhausted;
        }

        let (result, integrity) = match target_idx {
            Some(t) => reconstruct(graph, &distances, &predecessors, source_idx, t),
            None => (PathResult::unreachable(), PathIntegrity::Intact),
        };

        Ok(SearchOutcome {
            result,
            events,
            state,
            integrity,
        })
    }
}

fn id_at<W, G>(graph: &G, index: usize) -> NodeId
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    graph.nodes()[index].id().clone()
}
