//! Errors raised by the traversal generator

use thiserror::Error;

/// Graph shapes the traversal generator refuses to walk
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraversalError {
    /// There is no node to start from
    #[error("graph has no nodes")]
    EmptyGraph,

    /// The requested start node does not exist
    #[error("start node {id} is not in the graph")]
    UnknownStartNode { id: usize },

    /// An adjacency list refers to a node that does not exist
    #[error("node {node} lists unknown neighbor {neighbor}")]
    UnknownNeighbor { node: usize, neighbor: usize },
}
