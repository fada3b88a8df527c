use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

use crate::{Error, Result};

/// Min-priority frontier over (node, tentative distance) pairs.
///
/// Decrease-key is handled lazily: when a node's distance improves, a fresh
/// entry is pushed without looking for the old one, and the search loop
/// discards the stale entry when it eventually surfaces. This keeps every
/// operation at O(log n) instead of paying O(n) for in-heap removal.
///
/// Nodes are dense insertion indices; ties on distance are broken by
/// ascending index so pop order is reproducible across runs.
#[derive(Debug)]
pub struct Frontier<W>
where
    W: PartialOrd + Copy + Debug + Ord,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(W, usize)>>,
}

impl<W> Frontier<W>
where
    W: PartialOrd + Copy + Debug + Ord,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the frontier holds no entries
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an entry for a node at the given distance.
    ///
    /// Prior entries for the same node are left in place.
    pub fn push(&mut self, node: usize, distance: W) {
        self.heap.push(Reverse((distance, node)));
    }

    /// Removes and returns the entry with the smallest distance, breaking
    /// ties by node insertion index.
    ///
    /// Popping an empty frontier is a logic error in the calling loop and
    /// is reported as such rather than panicking.
    pub fn pop_min(&mut self) -> Result<(usize, W)> {
        match self.heap.pop() {
            Some(Reverse((distance, node))) => Ok((node, distance)),
            None => Err(Error::EmptyFrontier),
        }
    }

    /// Returns the smallest entry without removing it
    pub fn peek(&self) -> Option<(usize, W)> {
        self.heap
            .peek()
            .map(|Reverse((distance, node))| (*node, *distance))
    }

    /// Clears the frontier
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}
