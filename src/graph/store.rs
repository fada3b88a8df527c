use num_traits::{Float, Zero};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};

use crate::graph::traits::Graph;
use crate::{Error, Result};

/// Stable node identifier.
///
/// Identity lives here and nowhere else: two nodes are the same node exactly
/// when their ids compare equal, regardless of payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        NodeId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        NodeId(id.to_owned())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        NodeId(id)
    }
}

/// A graph node: an identifier plus display payload (coordinates for the
/// rendering layer) the algorithm never reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    id: NodeId,
    latitude: f64,
    longitude: f64,
}

impl Node {
    pub fn new(id: impl Into<NodeId>, latitude: f64, longitude: f64) -> Self {
        Node {
            id: id.into(),
            latitude,
            longitude,
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

// Equality and hashing are by id only; payload is opaque to the algorithm.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.4}, {:.4})",
            self.id, self.latitude, self.longitude
        )
    }
}

/// Adjacency structure over identified nodes, immutable once loaded.
///
/// Nodes and the per-node outgoing edge lists keep insertion order; that
/// order is the only defined order and it determines both relaxation order
/// and the frontier tie-break, so a given construction sequence always
/// replays to the same trace.
#[derive(Debug, Clone)]
pub struct GraphStore<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Nodes in insertion order; positions double as dense indices
    nodes: Vec<Node>,

    /// Node id -> dense index
    index: HashMap<NodeId, usize>,

    /// Outgoing edges per node: (target index, weight), insertion order
    outgoing: Vec<Vec<(usize, W)>>,
}

impl<W> GraphStore<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty graph store
    pub fn new() -> Self {
        GraphStore {
            nodes: Vec::new(),
            index: HashMap::new(),
            outgoing: Vec::new(),
        }
    }

    /// Registers a node with an empty outgoing-edge list and returns its
    /// dense index. Fails if a node with the same id is already registered.
    pub fn add_node(&mut self, node: Node) -> Result<usize> {
        if self.index.contains_key(node.id()) {
            return Err(Error::DuplicateNode(node.id().clone()));
        }

        let dense = self.nodes.len();
        self.index.insert(node.id().clone(), dense);
        self.nodes.push(node);
        self.outgoing.push(Vec::new());
        Ok(dense)
    }

    /// Appends a directed edge to the source's outgoing list.
    ///
    /// Both endpoints must already be registered. Parallel edges between the
    /// same ordered pair are kept as independent entries, and no reverse
    /// edge is created; callers wanting an undirected link add both
    /// directions explicitly. The weight is not validated here - a negative
    /// weight is reported by the engine at the exact relaxation that
    /// touches it.
    pub fn add_edge(&mut self, from: &NodeId, to: &NodeId, weight: W) -> Result<()> {
        let from_idx = self
            .index
            .get(from)
            .copied()
            .ok_or_else(|| Error::UnknownNode(from.clone()))?;
        let to_idx = self
            .index
            .get(to)
            .copied()
            .ok_or_else(|| Error::UnknownNode(to.clone()))?;

        self.outgoing[from_idx].push((to_idx, weight));
        Ok(())
    }

    /// Returns true if a node with this id is registered
    pub fn contains(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }

    /// Looks up a node by id
    pub fn node_by_id(&self, id: &NodeId) -> Option<&Node> {
        self.index.get(id).map(|&dense| &self.nodes[dense])
    }
}

impl<W> Default for GraphStore<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        GraphStore::new()
    }
}

impl<W> Graph<W> for GraphStore<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing.iter().map(|edges| edges.len()).sum()
    }

    fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    fn index_of(&self, id: &NodeId) -> Option<usize> {
        self.index.get(id).copied()
    }

    fn outgoing_edges(&self, index: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.outgoing.get(index) {
            Box::new(edges.iter().copied())
        } else {
            Box::new(std::iter::empty())
        }
    }
}
