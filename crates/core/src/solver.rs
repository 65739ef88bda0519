use super::traits::ShortestPathSolver;
use common::{
    error::Error,
    types::{self, ComputationResult, Distance, Edge, Graph},
};

/// Solver implementing the classic Bellman-Ford algorithm for single-source
/// shortest paths and negative cycle detection.
///
/// Distances are accumulated exactly in `i128`. Every tentative distance is
/// the weight of a walk of at most `V * E` edges, each weight within `i64`,
/// so no sum can leave the `i128` range and no negative cycle is masked by
/// clamping.
pub struct BellmanFordSolver;

impl BellmanFordSolver {
    /// Runs the relaxation and detection phases on an already validated edge list.
    ///
    /// Callers guarantee `start < num_vertices` and that every edge endpoint
    /// lies in `0..num_vertices`.
    fn run(&self, edges: &[Edge], num_vertices: usize, start: usize) -> ComputationResult {
        let mut distance = vec![Distance::Unreached; num_vertices];
        distance[start] = Distance::Finite(0);

        // A shortest path without a negative cycle uses at most V-1 edges.
        for _ in 1..num_vertices {
            for &(u, v, weight) in edges {
                if let Some(candidate) = relaxed(&distance, u, v, weight) {
                    distance[v] = Distance::Finite(candidate);
                }
            }
        }

        // Any edge that still relaxes after V-1 passes lies on, or is fed by,
        // a negative cycle reachable from `start`.
        let has_negative_cycle = edges
            .iter()
            .any(|&(u, v, weight)| relaxed(&distance, u, v, weight).is_some());

        if has_negative_cycle {
            ComputationResult::NegativeCycle
        } else {
            ComputationResult::Distances(distance)
        }
    }
}

/// Returns the improved distance for `v` through the edge `u -> v`, if any.
#[inline]
fn relaxed(distance: &[Distance], u: usize, v: usize, weight: i64) -> Option<i128> {
    let candidate = distance[u].finite()? + i128::from(weight);
    (Distance::Finite(candidate) < distance[v]).then_some(candidate)
}

impl ShortestPathSolver for BellmanFordSolver {
    /// Computes shortest distances from the graph's start vertex.
    ///
    /// # Returns
    /// - `Ok(ComputationResult::Distances(dist))` with exactly `V` entries.
    /// - `Ok(ComputationResult::NegativeCycle)` if a negative cycle is reachable.
    fn compute(&self, graph: &Graph) -> Result<ComputationResult, Error> {
        Ok(self.run(graph.edges(), graph.num_vertices(), graph.start()))
    }
}

/// Computes single-source shortest paths over a raw edge list.
///
/// Unlike [`BellmanFordSolver::compute`], this entry point takes an
/// unvalidated `(edges, V, start)` triple and bounds-checks it first.
///
/// # Errors
/// Returns `Error::EmptyGraph`, `Error::StartOutOfBounds` or
/// `Error::NodeIndexOutOfBounds` instead of indexing outside the distance vector.
pub fn compute_shortest_paths(
    edges: &[Edge],
    num_vertices: usize,
    start: usize,
) -> Result<ComputationResult, Error> {
    types::validate(num_vertices, start, edges)?;
    Ok(BellmanFordSolver.run(edges, num_vertices, start))
}

#[cfg(test)]
mod bellman_ford_tests {
    use super::*;
    use common::types::Distance::{Finite, Unreached};

    fn solve(num_vertices: usize, start: usize, edges: Vec<Edge>) -> ComputationResult {
        let graph = Graph::new(num_vertices, start, edges).unwrap();
        BellmanFordSolver.compute(&graph).unwrap()
    }

    #[test]
    fn single_vertex_without_edges() {
        assert_eq!(solve(1, 0, vec![]), ComputationResult::Distances(vec![Finite(0)]));
    }

    #[test]
    fn three_vertex_graph_with_negative_edge() {
        let result = solve(3, 0, vec![(0, 1, 4), (1, 2, -2), (0, 2, 5)]);
        assert_eq!(
            result,
            ComputationResult::Distances(vec![Finite(0), Finite(4), Finite(2)])
        );
    }

    #[test]
    fn two_vertex_negative_cycle_is_detected() {
        let result = solve(2, 0, vec![(0, 1, 1), (1, 0, -3)]);
        assert!(result.is_negative_cycle());
    }

    #[test]
    fn negative_self_loop_on_reachable_vertex_is_a_cycle() {
        let result = solve(3, 0, vec![(0, 1, 2), (1, 1, -1)]);
        assert!(result.is_negative_cycle());
    }

    #[test]
    fn zero_weight_cycle_is_not_negative() {
        let result = solve(3, 0, vec![(0, 1, 3), (1, 2, -1), (2, 1, 1)]);
        assert_eq!(
            result,
            ComputationResult::Distances(vec![Finite(0), Finite(3), Finite(2)])
        );
    }

    #[test]
    fn unreachable_vertex_stays_unreached() {
        let result = solve(4, 0, vec![(0, 1, 1), (2, 3, 1)]);
        assert_eq!(
            result,
            ComputationResult::Distances(vec![Finite(0), Finite(1), Unreached, Unreached])
        );
    }

    #[test]
    fn negative_cycle_unreachable_from_start_is_ignored() {
        // Vertices 2 and 3 form a negative cycle, but 0 cannot reach them.
        let result = solve(4, 0, vec![(0, 1, 5), (2, 3, -4), (3, 2, 1), (3, 1, 1)]);
        assert_eq!(
            result,
            ComputationResult::Distances(vec![Finite(0), Finite(5), Unreached, Unreached])
        );
    }

    #[test]
    fn start_vertex_other_than_zero() {
        let result = solve(3, 2, vec![(2, 0, 7), (0, 1, -3), (2, 1, 5)]);
        assert_eq!(
            result,
            ComputationResult::Distances(vec![Finite(7), Finite(4), Finite(0)])
        );
    }

    #[test]
    fn duplicate_edges_keep_the_cheapest() {
        let result = solve(2, 0, vec![(0, 1, 9), (0, 1, 2), (0, 1, 5)]);
        assert_eq!(
            result,
            ComputationResult::Distances(vec![Finite(0), Finite(2)])
        );
    }

    #[test]
    fn reverse_edge_order_still_converges() {
        // Worst case for a single pass: the chain is listed back to front.
        let n = 50;
        let edges: Vec<Edge> = (0..n - 1).rev().map(|i| (i, i + 1, -1)).collect();
        let result = solve(n, 0, edges);

        let expected: Vec<Distance> = (0..n as i128).map(|i| Finite(-i)).collect();
        assert_eq!(result, ComputationResult::Distances(expected));
    }

    #[test]
    fn extreme_positive_weights_sum_exactly() {
        let max = i128::from(i64::MAX);
        let result = solve(3, 0, vec![(0, 1, i64::MAX), (1, 2, i64::MAX)]);
        assert_eq!(
            result,
            ComputationResult::Distances(vec![Finite(0), Finite(max), Finite(2 * max)])
        );
    }

    #[test]
    fn extreme_negative_weights_sum_exactly() {
        let min = i128::from(i64::MIN);
        let result = solve(3, 0, vec![(0, 1, i64::MIN), (1, 2, i64::MIN)]);
        assert_eq!(
            result,
            ComputationResult::Distances(vec![Finite(0), Finite(min), Finite(2 * min)])
        );
    }

    #[test]
    fn path_beyond_i64_range_comes_back_exactly() {
        let max = i128::from(i64::MAX);
        let edges = vec![(0, 1, i64::MAX), (1, 2, i64::MAX), (2, 3, -i64::MAX)];
        let result = solve(4, 0, edges);
        assert_eq!(
            result,
            ComputationResult::Distances(vec![Finite(0), Finite(max), Finite(2 * max), Finite(max)])
        );
    }

    #[test]
    fn negative_cycle_behind_minimum_weight_edge_is_detected() {
        let result = solve(2, 0, vec![(0, 1, i64::MIN), (1, 1, -1)]);
        assert!(result.is_negative_cycle());

        let result = solve(3, 0, vec![(0, 1, i64::MIN), (1, 2, i64::MIN), (2, 1, 0)]);
        assert!(result.is_negative_cycle());
    }

    #[test]
    fn repeated_computation_is_identical() {
        let graph = Graph::new(4, 1, vec![(1, 2, 3), (2, 3, -1), (1, 3, 4), (3, 0, 2)]).unwrap();
        let first = BellmanFordSolver.compute(&graph).unwrap();
        let second = BellmanFordSolver.compute(&graph).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn raw_entry_point_rejects_out_of_range_indices() {
        assert_eq!(
            compute_shortest_paths(&[(0, 3, 1)], 3, 0),
            Err(Error::NodeIndexOutOfBounds(3))
        );
        assert_eq!(
            compute_shortest_paths(&[], 2, 4),
            Err(Error::StartOutOfBounds {
                start: 4,
                num_vertices: 2
            })
        );
        assert_eq!(compute_shortest_paths(&[], 0, 0), Err(Error::EmptyGraph));
    }

    #[test]
    fn raw_entry_point_matches_solver() {
        let edges = vec![(0, 1, 4), (1, 2, -2), (0, 2, 5)];
        let graph = Graph::new(3, 0, edges.clone()).unwrap();
        assert_eq!(
            compute_shortest_paths(&edges, 3, 0).unwrap(),
            BellmanFordSolver.compute(&graph).unwrap()
        );
    }

    // ----------------------------
    // Stress and edge-case tests
    // ----------------------------

    #[test]
    fn large_linear_graph_no_cycle() {
        let n = 1000;
        let edges: Vec<Edge> = (0..n - 1).map(|i| (i, i + 1, 1)).collect();
        let result = solve(n, 0, edges);

        let dist = result.distances().expect("no cycle expected");
        assert_eq!(dist.len(), n);
        assert_eq!(dist[n - 1], Finite(n as i128 - 1));
    }

    #[test]
    fn large_circular_graph_negative_cycle() {
        let n = 500;
        let edges: Vec<Edge> = (0..n).map(|i| (i, (i + 1) % n, -1)).collect();
        assert!(solve(n, 0, edges).is_negative_cycle());
    }
}
