//! Text wire format of the shortest-path service.
//!
//! A request is `<V> <start> <src>,<dest>,<weight> ...`; a response is either a
//! space-terminated list of `<vertex>:<distance>` tokens or one of the fixed
//! literals below.

pub mod codec;
pub mod error;

pub use codec::{EdgePolicy, ParseOptions, Response, format_result, parse_request, parse_response};
pub use error::ProtocolError;

/// Response text for a negative cycle reachable from the start vertex.
pub const NEGATIVE_CYCLE_RESPONSE: &str = "Graph contains negative cycle!";

/// Response text for any request that cannot be turned into a valid graph.
pub const INVALID_INPUT_RESPONSE: &str = "Invalid input format";

/// Token printed in place of a distance for a vertex the start cannot reach.
pub const UNREACHED_TOKEN: &str = "INF";

/// Default upper bound on the vertex count of a single request.
pub const DEFAULT_MAX_VERTICES: usize = 100_000;
