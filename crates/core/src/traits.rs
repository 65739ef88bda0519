use common::{error::Error, types::ComputationResult, types::Graph};

/// Trait for single-source shortest-path solvers that report negative cycles.
pub trait ShortestPathSolver {
    /// Computes distances from `graph.start()` to every vertex.
    ///
    /// Returns `Ok(ComputationResult::Distances(_))` when no negative cycle is
    /// reachable from the start vertex, `Ok(ComputationResult::NegativeCycle)`
    /// when one is, or `Err(e)` if the graph violates its own bounds.
    fn compute(&self, graph: &Graph) -> Result<ComputationResult, Error>;
}
