//! Breadth-first and depth-first traversal traces
//!
//! The generator walks a [`Graph`] from a start node and records, for every
//! newly discovered node, a snapshot of *all* nodes discovered so far. Step 0
//! holds the start node alone and every later step adds exactly one node.
//!
//! Neighbors are always considered in ascending label order, so the trace does
//! not depend on how adjacency lists happen to be ordered.
//!
//! - [`graph`]: the static labeled graph
//! - [`errors`]: [`TraversalError`]

pub mod errors;
pub mod graph;

pub use errors::TraversalError;
pub use graph::{Graph, GraphNode};

use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use std::fmt;
use tracing::debug;

/// Frontier discipline of a traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TraversalMode {
    #[default]
    Bfs,
    Dfs,
}

impl TraversalMode {
    pub fn name(self) -> &'static str {
        match self {
            TraversalMode::Bfs => "bfs",
            TraversalMode::Dfs => "dfs",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            TraversalMode::Bfs => "Breadth-First Search",
            TraversalMode::Dfs => "Depth-First Search",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            TraversalMode::Bfs => TraversalMode::Dfs,
            TraversalMode::Dfs => TraversalMode::Bfs,
        }
    }
}

impl fmt::Display for TraversalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A node at the moment it was discovered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisitedState {
    pub node_id: usize,
    /// Hops from the start node along the discovery tree
    pub layer: usize,
    /// Discovering node; `None` only for the start node
    pub parent: Option<usize>,
    /// Global discovery sequence number, starting at 0
    pub order: usize,
}

/// A complete traversal: one accumulated snapshot per discovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalTrace {
    pub mode: TraversalMode,
    pub steps: Vec<Vec<VisitedState>>,
    /// Deepest layer reached
    pub max_layer: usize,
}

impl TraversalTrace {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The final snapshot, containing every reachable node
    pub fn visited(&self) -> &[VisitedState] {
        self.steps.last().map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Group a snapshot into layers, each sorted by visit order
pub fn nodes_by_layer(snapshot: &[VisitedState]) -> Vec<Vec<VisitedState>> {
    let depth = snapshot.iter().map(|s| s.layer + 1).max().unwrap_or(0);
    let mut layers = vec![Vec::new(); depth];

    for state in snapshot {
        layers[state.layer].push(*state);
    }
    for layer in &mut layers {
        layer.sort_by_key(|s| s.order);
    }

    layers
}

/// Traverse `graph` from its first node
pub fn generate_traversal_trace(
    graph: &Graph,
    mode: TraversalMode,
) -> Result<TraversalTrace, TraversalError> {
    let start = graph.first_id().ok_or(TraversalError::EmptyGraph)?;
    generate_traversal_trace_from(graph, mode, start)
}

/// Traverse `graph` from the node with id `start`
pub fn generate_traversal_trace_from(
    graph: &Graph,
    mode: TraversalMode,
    start: usize,
) -> Result<TraversalTrace, TraversalError> {
    if graph.is_empty() {
        return Err(TraversalError::EmptyGraph);
    }
    if !graph.contains(start) {
        return Err(TraversalError::UnknownStartNode { id: start });
    }

    let mut walk = Walk::new(start);
    match mode {
        TraversalMode::Bfs => walk.breadth_first(graph)?,
        TraversalMode::Dfs => walk.depth_first(graph)?,
    }

    debug!(
        mode = mode.name(),
        start,
        steps = walk.steps.len(),
        max_layer = walk.max_layer,
        "generated traversal trace"
    );

    Ok(TraversalTrace {
        mode,
        steps: walk.steps,
        max_layer: walk.max_layer,
    })
}

/// Neighbors of `id`, sorted by label (ties by id)
fn sorted_neighbors(graph: &Graph, id: usize) -> Result<Vec<usize>, TraversalError> {
    let node = graph
        .node(id)
        .ok_or(TraversalError::UnknownStartNode { id })?;

    let mut labeled = Vec::with_capacity(node.neighbors.len());
    for &neighbor in &node.neighbors {
        let label = graph
            .label(neighbor)
            .ok_or(TraversalError::UnknownNeighbor { node: id, neighbor })?;
        labeled.push((label, neighbor));
    }
    labeled.sort();

    Ok(labeled.into_iter().map(|(_, neighbor)| neighbor).collect())
}

/// Scratch state of one traversal
struct Walk {
    visited: Vec<VisitedState>,
    seen: FxHashMap<usize, usize>, // node id -> index into `visited`
    steps: Vec<Vec<VisitedState>>,
    max_layer: usize,
    start: usize,
}

impl Walk {
    fn new(start: usize) -> Self {
        Walk {
            visited: Vec::new(),
            seen: FxHashMap::default(),
            steps: Vec::new(),
            max_layer: 0,
            start,
        }
    }

    fn is_visited(&self, id: usize) -> bool {
        self.seen.contains_key(&id)
    }

    fn layer_of(&self, id: usize) -> usize {
        self.seen
            .get(&id)
            .map_or(0, |&idx| self.visited[idx].layer)
    }

    /// Mark `id` discovered and record the accumulated snapshot
    fn discover(&mut self, id: usize, parent: Option<usize>) {
        let layer = parent.map_or(0, |p| self.layer_of(p) + 1);
        let state = VisitedState {
            node_id: id,
            layer,
            parent,
            order: self.visited.len(),
        };

        self.seen.insert(id, self.visited.len());
        self.visited.push(state);
        self.steps.push(self.visited.clone());
    }

    fn breadth_first(&mut self, graph: &Graph) -> Result<(), TraversalError> {
        let mut queue = VecDeque::from([self.start]);
        self.discover(self.start, None);

        while let Some(current) = queue.pop_front() {
            self.max_layer = self.max_layer.max(self.layer_of(current));

            for neighbor in sorted_neighbors(graph, current)? {
                if !self.is_visited(neighbor) {
                    self.discover(neighbor, Some(current));
                    queue.push_back(neighbor);
                }
            }
        }

        Ok(())
    }

    /// Preorder walk: a node is discovered when it is popped, and its
    /// unvisited neighbors are pushed in reverse label order so the
    /// smallest label is explored first.
    fn depth_first(&mut self, graph: &Graph) -> Result<(), TraversalError> {
        let mut stack: Vec<(usize, Option<usize>)> = vec![(self.start, None)];

        while let Some((current, parent)) = stack.pop() {
            if self.is_visited(current) {
                continue;
            }
            self.discover(current, parent);
            self.max_layer = self.max_layer.max(self.layer_of(current));

            let unvisited: Vec<usize> = sorted_neighbors(graph, current)?
                .into_iter()
                .filter(|&id| !self.is_visited(id))
                .collect();

            for &neighbor in unvisited.iter().rev() {
                stack.push((neighbor, Some(current)));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(graph: &Graph, trace: &TraversalTrace) -> Vec<String> {
        trace
            .visited()
            .iter()
            .map(|s| graph.label(s.node_id).unwrap_or("?").to_string())
            .collect()
    }

    #[test]
    fn test_bfs_default_graph() {
        let graph = Graph::default_graph();
        let trace = generate_traversal_trace(&graph, TraversalMode::Bfs).unwrap();

        assert_eq!(labels(&graph, &trace), ["A", "B", "C", "D", "E", "F", "G", "H"]);
        let layers: Vec<_> = trace.visited().iter().map(|s| s.layer).collect();
        assert_eq!(layers, [0, 1, 1, 1, 2, 2, 2, 2]);
        assert_eq!(trace.max_layer, 2);
    }

    #[test]
    fn test_dfs_default_graph() {
        let graph = Graph::default_graph();
        let trace = generate_traversal_trace(&graph, TraversalMode::Dfs).unwrap();

        assert_eq!(labels(&graph, &trace), ["A", "B", "E", "F", "C", "G", "D", "H"]);
        let parents: Vec<_> = trace.visited().iter().map(|s| s.parent).collect();
        assert_eq!(
            parents,
            [None, Some(0), Some(1), Some(1), Some(0), Some(2), Some(0), Some(3)]
        );
    }

    #[test]
    fn test_adjacency_order_does_not_matter() {
        let graph = Graph::new(vec![
            GraphNode::new(0, "A", vec![3, 2, 1]),
            GraphNode::new(1, "C", vec![0]),
            GraphNode::new(2, "B", vec![0]),
            GraphNode::new(3, "D", vec![0]),
        ]);
        let trace = generate_traversal_trace(&graph, TraversalMode::Bfs).unwrap();

        assert_eq!(labels(&graph, &trace), ["A", "B", "C", "D"]);
    }

    #[test]
    fn test_nodes_by_layer_buckets() {
        let graph = Graph::default_graph();
        let trace = generate_traversal_trace(&graph, TraversalMode::Dfs).unwrap();
        let layers = nodes_by_layer(trace.visited());

        assert_eq!(layers.len(), 3);
        let first: Vec<_> = layers[1].iter().map(|s| s.node_id).collect();
        assert_eq!(first, [1, 2, 3]);
        assert!(nodes_by_layer(&[]).is_empty());
    }

    #[test]
    fn test_invalid_graphs_fail_loudly() {
        let empty = Graph::new(Vec::new());
        assert_eq!(
            generate_traversal_trace(&empty, TraversalMode::Bfs),
            Err(TraversalError::EmptyGraph)
        );

        let graph = Graph::default_graph();
        assert_eq!(
            generate_traversal_trace_from(&graph, TraversalMode::Dfs, 42),
            Err(TraversalError::UnknownStartNode { id: 42 })
        );

        let dangling = Graph::new(vec![GraphNode::new(0, "A", vec![9])]);
        assert_eq!(
            generate_traversal_trace(&dangling, TraversalMode::Bfs),
            Err(TraversalError::UnknownNeighbor { node: 0, neighbor: 9 })
        );
    }
}
