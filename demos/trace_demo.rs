use colored::*;
use ordered_float::OrderedFloat;

use pathtrace::viz::TraceDocument;
use pathtrace::{GraphStore, Node, NodeId, StepEvent, TracedDijkstra};

type W = OrderedFloat<f64>;

fn link(graph: &mut GraphStore<W>, a: &str, b: &str, km: f64) -> pathtrace::Result<()> {
    let a = NodeId::from(a);
    let b = NodeId::from(b);
    graph.add_edge(&a, &b, OrderedFloat(km))?;
    graph.add_edge(&b, &a, OrderedFloat(km))
}

fn build_city() -> pathtrace::Result<GraphStore<W>> {
    let mut graph = GraphStore::new();

    // Landmarks in Addis Ababa
    let landmarks = [
        ("Meskel Square", 9.0107, 38.7613),
        ("Arat Kilo", 9.0300, 38.7620),
        ("Piazza", 9.0336, 38.7500),
        ("Bole", 8.9806, 38.7998),
        ("Mexico", 9.0097, 38.7440),
        ("Saris", 8.9500, 38.7600),
        ("Summit", 8.9900, 38.8300),
        ("Gotera", 8.9790, 38.7470),
        ("Legehar", 9.0100, 38.7530),
        ("Kebena", 9.0280, 38.7700),
    ];
    for (name, lat, lon) in landmarks {
        graph.add_node(Node::new(name, lat, lon))?;
    }

    // Road segments, both directions, distances in km
    link(&mut graph, "Meskel Square", "Arat Kilo", 2.1)?;
    link(&mut graph, "Meskel Square", "Bole", 5.6)?;
    link(&mut graph, "Meskel Square", "Kebena", 2.4)?;
    link(&mut graph, "Arat Kilo", "Piazza", 1.8)?;
    link(&mut graph, "Arat Kilo", "Kebena", 1.2)?;
    link(&mut graph, "Piazza", "Summit", 9.5)?;
    link(&mut graph, "Piazza", "Saris", 10.2)?;
    link(&mut graph, "Bole", "Gotera", 4.8)?;
    link(&mut graph, "Bole", "Mexico", 6.3)?;
    link(&mut graph, "Mexico", "Legehar", 1.1)?;
    link(&mut graph, "Mexico", "Saris", 6.8)?;
    link(&mut graph, "Saris", "Legehar", 7.0)?;
    link(&mut graph, "Saris", "Summit", 8.9)?;
    link(&mut graph, "Gotera", "Legehar", 3.9)?;

    Ok(graph)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let graph = build_city()?;
    let source = NodeId::from("Meskel Square");
    let target = NodeId::from("Saris");

    let outcome = TracedDijkstra::new().run(&graph, Some(&source), &target)?;

    println!(
        "{}",
        format!("Search {} -> {}", source, target).bright_white()
    );
    for event in &outcome.events {
        match event {
            StepEvent::NodeVisited { node, distance } => {
                println!("{} {} at {:.1} km", "visit".yellow(), node, distance);
            }
            StepEvent::QueueUpdate { node, distance } => {
                println!("{} {} at {:.1} km", "queue".bright_blue(), node, distance);
            }
            StepEvent::EdgeRelaxed {
                from,
                to,
                candidate,
                updated,
                ..
            } => {
                let verdict = if *updated {
                    "improved".green()
                } else {
                    "rejected".red()
                };
                println!("  relax {} -> {}: {} at {:.1} km", from, to, verdict, candidate);
            }
        }
    }

    println!();
    println!("{}", outcome.result);

    let document = TraceDocument::from_outcome(&outcome, Some(&source), &target);
    println!();
    println!("{}", serde_json::to_string_pretty(&document)?);

    Ok(())
}
