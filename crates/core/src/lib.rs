pub mod solver;
pub mod traits;

pub use solver::{BellmanFordSolver, compute_shortest_paths};
pub use traits::ShortestPathSolver;
