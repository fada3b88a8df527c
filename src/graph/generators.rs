use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::graph::{GraphStore, Node, NodeId};
use crate::Result;

/// Generates a random directed graph with `n` nodes and up to
/// `edges_per_node` outgoing edges each.
///
/// Seeded so the same seed always builds the same graph in the same
/// insertion order, which in turn pins down the trace a search over it
/// produces.
pub fn generate_random_graph(
    n: usize,
    edges_per_node: usize,
    seed: u64,
) -> Result<GraphStore<OrderedFloat<f64>>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = GraphStore::new();

    for i in 0..n {
        let latitude = rng.gen_range(-90.0..90.0);
        let longitude = rng.gen_range(-180.0..180.0);
        graph.add_node(Node::new(format!("n{}", i), latitude, longitude))?;
    }

    for i in 0..n {
        let from = NodeId::new(format!("n{}", i));
        for _ in 0..edges_per_node {
            let j = rng.gen_range(0..n);
            if i == j {
                continue;
            }
            let to = NodeId::new(format!("n{}", j));
            let weight = OrderedFloat(rng.gen_range(1.0..100.0));
            graph.add_edge(&from, &to, weight)?;
        }
    }

    Ok(graph)
}

/// Generates a width x height grid with unit-weight edges in the four
/// cardinal directions, both ways. Node ids are `x_y`.
pub fn generate_grid_graph(width: usize, height: usize) -> Result<GraphStore<OrderedFloat<f64>>> {
    let mut graph = GraphStore::new();

    for y in 0..height {
        for x in 0..width {
            graph.add_node(Node::new(format!("{}_{}", x, y), x as f64, y as f64))?;
        }
    }

    for y in 0..height {
        for x in 0..width {
            let from = NodeId::new(format!("{}_{}", x, y));
            let directions = [(0i32, -1i32), (1, 0), (0, 1), (-1, 0)];

            for (dx, dy) in directions {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i32 && ny < height as i32 {
                    let to = NodeId::new(format!("{}_{}", nx, ny));
                    graph.add_edge(&from, &to, OrderedFloat(1.0))?;
                }
            }
        }
    }

    Ok(graph)
}
