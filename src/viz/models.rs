use chrono::{DateTime, Utc};
use num_traits::{Float, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use uuid::Uuid;

use crate::algorithm::{SearchOutcome, SearchState, StepEvent};
use crate::graph::NodeId;

/// A search trace flattened for the rendering layer.
///
/// Distances are widened to plain `f64` and node references become id
/// strings, so the consumer needs none of the engine's generics. The
/// envelope carries a fresh run id and timestamp; the `steps` themselves are
/// a pure function of the graph and the endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceDocument {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub target: String,
    pub reachable: bool,
    /// Absent when the target is unreachable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_distance: Option<f64>,
    pub path: Vec<String>,
    pub found: bool,
    pub steps: Vec<TraceStep>,
}

/// One step of the replay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TraceStep {
    NodeVisited {
        node: String,
        distance: f64,
    },
    EdgeRelaxed {
        from: String,
        to: String,
        weight: f64,
        candidate: f64,
        updated: bool,
    },
    QueueUpdate {
        node: String,
        distance: f64,
    },
}

impl TraceDocument {
    /// Builds an export document from a finished run
    pub fn from_outcome<W>(
        outcome: &SearchOutcome<W>,
        source: Option<&NodeId>,
        target: &NodeId,
    ) -> Self
    where
        W: Float + Zero + Debug + Copy,
    {
        let total_distance = if outcome.result.reachable {
            Some(widen(outcome.result.total_distance))
        } else {
            None
        };

        TraceDocument {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            source: source.map(|id| id.to_string()),
            target: target.to_string(),
            reachable: outcome.result.reachable,
            total_distance,
            path: outcome.result.nodes.iter().map(|id| id.to_string()).collect(),
            found: outcome.state == SearchState::Found,
            steps: outcome.events.iter().map(TraceStep::from_event).collect(),
        }
    }
}

impl TraceStep {
    fn from_event<W>(event: &StepEvent<W>) -> Self
    where
        W: Float + Zero + Debug + Copy,
    {
        match event {
            StepEvent::NodeVisited { node, distance } => TraceStep::NodeVisited {
                node: node.to_string(),
                distance: widen(*distance),
            },
            StepEvent::EdgeRelaxed {
                from,
                to,
                weight,
                candidate,
                updated,
            } => TraceStep::EdgeRelaxed {
                from: from.to_string(),
                to: to.to_string(),
                weight: widen(*weight),
                candidate: widen(*candidate),
                updated: *updated,
            },
            StepEvent::QueueUpdate { node, distance } => TraceStep::QueueUpdate {
                node: node.to_string(),
                distance: widen(*distance),
            },
        }
    }
}

fn widen<W>(value: W) -> f64
where
    W: Float + Zero + Debug + Copy,
{
    value.to_f64().unwrap_or(f64::INFINITY)
}
