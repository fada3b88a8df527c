use ordered_float::OrderedFloat;
use pathtrace::{Error, Graph, GraphStore, Node, NodeId};

type W = OrderedFloat<f64>;

fn node(id: &str) -> Node {
    Node::new(id, 0.0, 0.0)
}

#[test]
fn test_add_node_assigns_dense_indices_in_insertion_order() {
    let mut graph: GraphStore<W> = GraphStore::new();
    assert_eq!(graph.add_node(node("a")).unwrap(), 0);
    assert_eq!(graph.add_node(node("b")).unwrap(), 1);
    assert_eq!(graph.add_node(node("c")).unwrap(), 2);

    let ids: Vec<&str> = graph.nodes().iter().map(|n| n.id().as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.index_of(&NodeId::from("b")), Some(1));
}

#[test]
fn test_duplicate_node_is_rejected() {
    let mut graph: GraphStore<W> = GraphStore::new();
    graph.add_node(node("a")).unwrap();

    let err = graph.add_node(Node::new("a", 9.0, 38.0)).unwrap_err();
    assert!(matches!(err, Error::DuplicateNode(id) if id.as_str() == "a"));

    // The failed insert must not disturb the registered node
    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.node_by_id(&NodeId::from("a")).unwrap().latitude(), 0.0);
}

#[test]
fn test_add_edge_rejects_unknown_endpoints() {
    let mut graph: GraphStore<W> = GraphStore::new();
    graph.add_node(node("a")).unwrap();

    let err = graph
        .add_edge(&NodeId::from("a"), &NodeId::from("zz"), OrderedFloat(1.0))
        .unwrap_err();
    assert!(matches!(err, Error::UnknownNode(id) if id.as_str() == "zz"));

    let err = graph
        .add_edge(&NodeId::from("zz"), &NodeId::from("a"), OrderedFloat(1.0))
        .unwrap_err();
    assert!(matches!(err, Error::UnknownNode(id) if id.as_str() == "zz"));

    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_outgoing_edges_preserve_insertion_order_and_parallels() {
    let mut graph: GraphStore<W> = GraphStore::new();
    graph.add_node(node("a")).unwrap();
    graph.add_node(node("b")).unwrap();
    graph.add_node(node("c")).unwrap();

    let a = NodeId::from("a");
    let b = NodeId::from("b");
    let c = NodeId::from("c");
    graph.add_edge(&a, &b, OrderedFloat(5.0)).unwrap();
    graph.add_edge(&a, &c, OrderedFloat(1.0)).unwrap();
    // Parallel edge to b with a different weight stays a separate entry
    graph.add_edge(&a, &b, OrderedFloat(2.0)).unwrap();

    let edges: Vec<(usize, W)> = graph.outgoing_edges(0).collect();
    assert_eq!(
        edges,
        vec![
            (1, OrderedFloat(5.0)),
            (2, OrderedFloat(1.0)),
            (1, OrderedFloat(2.0)),
        ]
    );
    assert_eq!(graph.edge_count(), 3);

    // The iterator restarts from the front on every call
    let again: Vec<(usize, W)> = graph.outgoing_edges(0).collect();
    assert_eq!(edges, again);
}

#[test]
fn test_no_implicit_reverse_edge() {
    let mut graph: GraphStore<W> = GraphStore::new();
    graph.add_node(node("a")).unwrap();
    graph.add_node(node("b")).unwrap();
    graph
        .add_edge(&NodeId::from("a"), &NodeId::from("b"), OrderedFloat(3.0))
        .unwrap();

    assert_eq!(graph.outgoing_edges(0).count(), 1);
    assert_eq!(graph.outgoing_edges(1).count(), 0);
}

#[test]
fn test_missing_node_yields_empty_edge_iterator() {
    let graph: GraphStore<W> = GraphStore::new();
    assert_eq!(graph.outgoing_edges(7).count(), 0);
}

#[test]
fn test_node_equality_is_by_id_only() {
    let left = Node::new("a", 1.0, 2.0);
    let right = Node::new("a", -3.0, 4.5);
    assert_eq!(left, right);

    let other = Node::new("b", 1.0, 2.0);
    assert_ne!(left, other);
}

#[test]
fn test_lookup_helpers() {
    let mut graph: GraphStore<W> = GraphStore::new();
    graph.add_node(Node::new("a", 9.01, 38.76)).unwrap();

    assert!(graph.contains(&NodeId::from("a")));
    assert!(!graph.contains(&NodeId::from("b")));
    assert_eq!(graph.node(0).unwrap().id().as_str(), "a");
    assert!(graph.node(1).is_none());
    assert_eq!(
        graph.node_by_id(&NodeId::from("a")).unwrap().longitude(),
        38.76
    );
}
