use ordered_float::OrderedFloat;
use pathtrace::graph::generators::generate_random_graph;
use pathtrace::{Graph, NodeId, TracedDijkstra};

type W = OrderedFloat<f64>;

/// Exhaustive simple-path search. With non-negative weights a shortest walk
/// never needs to repeat a node, so enumerating simple paths is enough.
fn brute_force<G: Graph<W>>(graph: &G, source: usize, target: usize) -> Option<f64> {
    fn dfs<G: Graph<W>>(
        graph: &G,
        node: usize,
        target: usize,
        acc: f64,
        visited: &mut Vec<bool>,
        best: &mut Option<f64>,
    ) {
        if node == target {
            *best = Some(best.map_or(acc, |current| current.min(acc)));
            return;
        }
        visited[node] = true;
        for (next, weight) in graph.outgoing_edges(node) {
            if !visited[next] {
                dfs(graph, next, target, acc + weight.into_inner(), visited, best);
            }
        }
        visited[node] = false;
    }

    let mut visited = vec![false; graph.node_count()];
    let mut best = None;
    dfs(graph, source, target, 0.0, &mut visited, &mut best);
    best
}

#[test]
fn test_engine_agrees_with_brute_force_on_small_graphs() {
    for seed in [3, 11, 27, 58, 101] {
        let graph = generate_random_graph(8, 2, seed).unwrap();
        let engine = TracedDijkstra::new();

        for s in 0..8 {
            for t in 0..8 {
                let source = NodeId::new(format!("n{}", s));
                let target = NodeId::new(format!("n{}", t));
                let outcome = engine.run(&graph, Some(&source), &target).unwrap();

                match brute_force(&graph, s, t) {
                    Some(expected) => {
                        assert!(
                            outcome.result.reachable,
                            "seed {}: {} -> {} should be reachable",
                            seed, source, target
                        );
                        let got = outcome.result.total_distance.into_inner();
                        assert!(
                            (got - expected).abs() < 1e-9,
                            "seed {}: {} -> {} expected {}, got {}",
                            seed,
                            source,
                            target,
                            expected,
                            got
                        );
                    }
                    None => {
                        assert!(
                            !outcome.result.reachable,
                            "seed {}: {} -> {} should be unreachable",
                            seed, source, target
                        );
                    }
                }
            }
        }
    }
}
