//! Static labeled graph walked by the traversal generator

use rustc_hash::FxHashMap;

/// A labeled node with its adjacency list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub id: usize,
    pub label: String,
    pub neighbors: Vec<usize>,
}

impl GraphNode {
    pub fn new(id: usize, label: impl Into<String>, neighbors: Vec<usize>) -> Self {
        GraphNode {
            id,
            label: label.into(),
            neighbors,
        }
    }
}

/// An immutable set of nodes, looked up by id
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Vec<GraphNode>,
    index: FxHashMap<usize, usize>, // node id -> position in `nodes`
}

impl Graph {
    pub fn new(nodes: Vec<GraphNode>) -> Self {
        let index = nodes
            .iter()
            .enumerate()
            .map(|(pos, node)| (node.id, pos))
            .collect();
        Graph { nodes, index }
    }

    /// The eight-node tree rooted at `A` shown by default
    ///
    /// ```text
    ///          A
    ///       /  |  \
    ///      B   C   D
    ///     / \  |   |
    ///    E   F G   H
    /// ```
    pub fn default_graph() -> Self {
        Graph::new(vec![
            GraphNode::new(0, "A", vec![1, 2, 3]),
            GraphNode::new(1, "B", vec![0, 4, 5]),
            GraphNode::new(2, "C", vec![0, 6]),
            GraphNode::new(3, "D", vec![0, 7]),
            GraphNode::new(4, "E", vec![1]),
            GraphNode::new(5, "F", vec![1]),
            GraphNode::new(6, "G", vec![2]),
            GraphNode::new(7, "H", vec![3]),
        ])
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn node(&self, id: usize) -> Option<&GraphNode> {
        self.index.get(&id).map(|&pos| &self.nodes[pos])
    }

    pub fn label(&self, id: usize) -> Option<&str> {
        self.node(id).map(|node| node.label.as_str())
    }

    pub fn contains(&self, id: usize) -> bool {
        self.index.contains_key(&id)
    }

    /// Id of the first node, the default traversal start
    pub fn first_id(&self) -> Option<usize> {
        self.nodes.first().map(|node| node.id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::default_graph()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_id_not_position() {
        let graph = Graph::new(vec![
            GraphNode::new(10, "X", vec![20]),
            GraphNode::new(20, "Y", vec![10]),
        ]);

        assert_eq!(graph.label(20), Some("Y"));
        assert_eq!(graph.first_id(), Some(10));
        assert!(graph.node(0).is_none());
    }
}
