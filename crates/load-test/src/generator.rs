use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

use super::error::Error;
use common::types::Edge;
use graph_protocol::format_result;
use sssp_core::compute_shortest_paths;

/// Bounds for randomly generated graphs.
#[derive(Debug, Clone)]
pub struct GeneratorSettings {
    pub vertices: RangeInclusive<usize>,
    pub weights: RangeInclusive<i64>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            vertices: 5..=20,
            weights: -100..=100,
        }
    }
}

impl GeneratorSettings {
    pub fn validate(&self) -> Result<(), Error> {
        if *self.vertices.start() == 0 || self.vertices.is_empty() {
            return Err(Error::InvalidSettings(format!(
                "vertex range {:?} must be non-empty and start at 1 or more",
                self.vertices
            )));
        }
        if self.weights.is_empty() {
            return Err(Error::InvalidSettings(format!(
                "weight range {:?} is empty",
                self.weights
            )));
        }
        Ok(())
    }
}

/// A request together with the response a correct server must send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphCase {
    pub request: String,
    pub expected: String,
}

/// Produces random graph requests.
///
/// Each graph draws `V` from the vertex range, a uniform start vertex, and
/// between `V` and `max(V, V*(V-1)/2)` candidate edges with uniform
/// endpoints and weights. Self-loop candidates are dropped.
pub struct GraphGenerator {
    rng: SmallRng,
    settings: GeneratorSettings,
}

impl GraphGenerator {
    pub fn new(settings: GeneratorSettings) -> Result<Self, Error> {
        settings.validate()?;
        Ok(Self {
            rng: SmallRng::from_os_rng(),
            settings,
        })
    }

    /// Deterministic generator for reproducible runs.
    pub fn with_seed(settings: GeneratorSettings, seed: u64) -> Result<Self, Error> {
        settings.validate()?;
        Ok(Self {
            rng: SmallRng::seed_from_u64(seed),
            settings,
        })
    }

    /// Generates the next case, computing the expected response locally.
    pub fn next_case(&mut self) -> Result<GraphCase, Error> {
        let num_vertices = self.rng.random_range(self.settings.vertices.clone());
        let start = self.rng.random_range(0..num_vertices);
        let max_edges = (num_vertices * (num_vertices - 1) / 2).max(num_vertices);
        let num_candidates = self.rng.random_range(num_vertices..=max_edges);

        let edges: Vec<Edge> = (0..num_candidates)
            .filter_map(|_| {
                let src = self.rng.random_range(0..num_vertices);
                let dest = self.rng.random_range(0..num_vertices);
                let weight = self.rng.random_range(self.settings.weights.clone());
                (src != dest).then_some((src, dest, weight))
            })
            .collect();

        let request = encode_request(num_vertices, start, &edges);

        let result = compute_shortest_paths(&edges, num_vertices, start)?;

        Ok(GraphCase {
            request,
            expected: format_result(&result),
        })
    }
}

/// Writes a graph in the request wire format.
pub fn encode_request(num_vertices: usize, start: usize, edges: &[Edge]) -> String {
    let mut request = format!("{} {}", num_vertices, start);
    for (src, dest, weight) in edges {
        request.push_str(&format!(" {},{},{}", src, dest, weight));
    }
    request
}
