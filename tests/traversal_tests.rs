// Integration tests for the traversal trace generator

use algotty::traversal::{
    generate_traversal_trace, generate_traversal_trace_from, Graph, GraphNode, TraversalError,
    TraversalMode,
};

fn labels(graph: &Graph, snapshot: &[algotty::traversal::VisitedState]) -> String {
    snapshot
        .iter()
        .map(|s| graph.label(s.node_id).unwrap_or("?"))
        .collect()
}

#[test]
fn test_bfs_orders_and_layers() {
    let graph = Graph::default_graph();
    let trace = generate_traversal_trace(&graph, TraversalMode::Bfs).unwrap();

    assert_eq!(labels(&graph, trace.visited()), "ABCDEFGH");
    let orders: Vec<_> = trace.visited().iter().map(|s| s.order).collect();
    assert_eq!(orders, (0..8).collect::<Vec<_>>());
    let layers: Vec<_> = trace.visited().iter().map(|s| s.layer).collect();
    assert_eq!(layers, [0, 1, 1, 1, 2, 2, 2, 2]);
}

#[test]
fn test_dfs_goes_deep_first() {
    let graph = Graph::default_graph();
    let trace = generate_traversal_trace(&graph, TraversalMode::Dfs).unwrap();

    assert_eq!(labels(&graph, trace.visited()), "ABEFCGDH");
    let layers: Vec<_> = trace.visited().iter().map(|s| s.layer).collect();
    assert_eq!(layers, [0, 1, 2, 2, 1, 2, 1, 2]);
}

#[test]
fn test_snapshots_grow_one_node_at_a_time() {
    let graph = Graph::default_graph();
    for mode in [TraversalMode::Bfs, TraversalMode::Dfs] {
        let trace = generate_traversal_trace(&graph, mode).unwrap();

        assert_eq!(trace.len(), graph.len());
        for (idx, snapshot) in trace.steps.iter().enumerate() {
            assert_eq!(snapshot.len(), idx + 1);
            if idx > 0 {
                assert_eq!(&snapshot[..idx], trace.steps[idx - 1].as_slice());
            }
        }
    }
}

#[test]
fn test_only_reachable_component_is_visited() {
    let graph = Graph::new(vec![
        GraphNode::new(0, "A", vec![1]),
        GraphNode::new(1, "B", vec![0]),
        GraphNode::new(2, "C", vec![3]),
        GraphNode::new(3, "D", vec![2]),
    ]);

    let trace = generate_traversal_trace(&graph, TraversalMode::Bfs).unwrap();
    assert_eq!(labels(&graph, trace.visited()), "AB");

    let trace = generate_traversal_trace_from(&graph, TraversalMode::Dfs, 3).unwrap();
    assert_eq!(labels(&graph, trace.visited()), "DC");
    assert_eq!(trace.visited()[0].parent, None);
    assert_eq!(trace.visited()[1].parent, Some(3));
}

#[test]
fn test_cycles_are_visited_once() {
    let graph = Graph::new(vec![
        GraphNode::new(0, "A", vec![1, 2]),
        GraphNode::new(1, "B", vec![0, 2]),
        GraphNode::new(2, "C", vec![0, 1]),
    ]);

    let bfs = generate_traversal_trace(&graph, TraversalMode::Bfs).unwrap();
    assert_eq!(labels(&graph, bfs.visited()), "ABC");
    assert_eq!(bfs.max_layer, 1);

    let dfs = generate_traversal_trace(&graph, TraversalMode::Dfs).unwrap();
    assert_eq!(labels(&graph, dfs.visited()), "ABC");
    assert_eq!(dfs.visited()[2].parent, Some(1));
    assert_eq!(dfs.max_layer, 2);
}

#[test]
fn test_errors() {
    let graph = Graph::default_graph();
    let err = generate_traversal_trace_from(&graph, TraversalMode::Bfs, 99).unwrap_err();
    assert_eq!(err, TraversalError::UnknownStartNode { id: 99 });
    assert!(err.to_string().contains("99"));

    let empty = Graph::new(Vec::new());
    assert_eq!(
        generate_traversal_trace(&empty, TraversalMode::Dfs),
        Err(TraversalError::EmptyGraph)
    );
}

#[test]
fn test_generation_is_deterministic() {
    let graph = Graph::default_graph();
    for mode in [TraversalMode::Bfs, TraversalMode::Dfs] {
        assert_eq!(
            generate_traversal_trace(&graph, mode),
            generate_traversal_trace(&graph, mode)
        );
    }
}
