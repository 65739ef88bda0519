use super::error::Error;

/// Type alias for a single edge: (source, dest, weight)
pub type Edge = (usize, usize, i64);

/// Tentative distance from the start vertex to some vertex.
///
/// `Unreached` is its own variant rather than a reserved integer, so no sum
/// of weights can ever be mistaken for it. The derived ordering places every
/// finite distance below `Unreached`.
///
/// Finite distances are `i128`: a walk of `k` edges with `i64` weights has
/// magnitude at most `k * 2^63`, so sums stay exact for any edge list that
/// fits in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Finite(i128),
    Unreached,
}

impl Distance {
    /// Returns the finite value, or `None` for an unreached vertex.
    pub fn finite(self) -> Option<i128> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::Unreached => None,
        }
    }
}

/// Outcome of a single shortest-path computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComputationResult {
    /// One entry per vertex, index `i` holding the distance to vertex `i`.
    Distances(Vec<Distance>),
    /// A negative cycle is reachable from the start vertex; no distances are meaningful.
    NegativeCycle,
}

impl ComputationResult {
    pub fn is_negative_cycle(&self) -> bool {
        matches!(self, ComputationResult::NegativeCycle)
    }

    /// Returns the distance vector, or `None` when a negative cycle was found.
    pub fn distances(&self) -> Option<&[Distance]> {
        match self {
            ComputationResult::Distances(dist) => Some(dist),
            ComputationResult::NegativeCycle => None,
        }
    }
}

/// A validated single-source shortest-path problem.
///
/// Construction through [`Graph::new`] guarantees `num_vertices >= 1`,
/// `start < num_vertices` and that every edge endpoint lies in
/// `0..num_vertices`, so solvers can index distance arrays directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    num_vertices: usize,
    start: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Builds a graph after checking the vertex count, the start vertex and every edge.
    ///
    /// # Errors
    /// - `Error::EmptyGraph` if `num_vertices` is zero.
    /// - `Error::StartOutOfBounds` if `start >= num_vertices`.
    /// - `Error::NodeIndexOutOfBounds` for the first edge endpoint outside the graph.
    pub fn new(num_vertices: usize, start: usize, edges: Vec<Edge>) -> Result<Self, Error> {
        validate(num_vertices, start, &edges)?;
        Ok(Self {
            num_vertices,
            start,
            edges,
        })
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// Checks a raw `(V, start, edges)` triple against the graph invariants.
pub fn validate(num_vertices: usize, start: usize, edges: &[Edge]) -> Result<(), Error> {
    if num_vertices == 0 {
        return Err(Error::EmptyGraph);
    }
    if start >= num_vertices {
        return Err(Error::StartOutOfBounds {
            start,
            num_vertices,
        });
    }
    for &(u, v, _) in edges {
        if u >= num_vertices {
            return Err(Error::NodeIndexOutOfBounds(u));
        }
        if v >= num_vertices {
            return Err(Error::NodeIndexOutOfBounds(v));
        }
    }
    Ok(())
}
