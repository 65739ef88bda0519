use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A graph needs at least one vertex to hold the start vertex.
    #[error("Graph must contain at least one vertex.")]
    EmptyGraph,

    /// The start vertex does not name a vertex of the graph.
    #[error("Start vertex {start} is out of bounds for a graph of {num_vertices} vertices.")]
    StartOutOfBounds { start: usize, num_vertices: usize },

    /// Indicates an edge endpoint that exceeds the graph size (V).
    #[error("Node index {0} is out of bounds.")]
    NodeIndexOutOfBounds(usize),
}
