use serde::Deserialize;

use super::error::ProtocolError;
use super::{
    DEFAULT_MAX_VERTICES, INVALID_INPUT_RESPONSE, NEGATIVE_CYCLE_RESPONSE, UNREACHED_TOKEN,
};
use common::types::{ComputationResult, Distance, Edge, Graph};

/// What to do with an edge token that is not `<int>,<int>,<int>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgePolicy {
    /// Stop reading edges at the first bad token and keep the ones parsed so far.
    #[default]
    Truncate,
    /// Reject the whole request.
    Strict,
}

/// Request parsing knobs, deserialized from the `[protocol]` config section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub edge_policy: EdgePolicy,
    /// Largest vertex count accepted; bounds the distance vector allocation.
    pub max_vertices: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            edge_policy: EdgePolicy::Truncate,
            max_vertices: DEFAULT_MAX_VERTICES,
        }
    }
}

impl ParseOptions {
    pub fn with_edge_policy(mut self, edge_policy: EdgePolicy) -> Self {
        self.edge_policy = edge_policy;
        self
    }
}

/// A decoded server response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Distances(Vec<Distance>),
    NegativeCycle,
    InvalidInput,
}

impl From<ComputationResult> for Response {
    fn from(result: ComputationResult) -> Self {
        match result {
            ComputationResult::Distances(dist) => Response::Distances(dist),
            ComputationResult::NegativeCycle => Response::NegativeCycle,
        }
    }
}

/// Parses a request payload into a validated [`Graph`].
///
/// The payload is split on whitespace. The first two tokens are the vertex
/// count and the start vertex; every further token is an edge
/// `<source>,<dest>,<weight>`. Unparsable edge tokens are handled according
/// to `options.edge_policy`.
///
/// # Errors
/// - `ProtocolError::MalformedRequest` if the header is missing or not
///   numeric, if `V` is zero or above `options.max_vertices`, or (under
///   `EdgePolicy::Strict`) if any edge token is malformed.
/// - `ProtocolError::OutOfRangeIndex` if the start vertex or any parsed edge
///   endpoint lies outside `0..V`.
pub fn parse_request(payload: &str, options: &ParseOptions) -> Result<Graph, ProtocolError> {
    let mut tokens = payload.split_whitespace();

    let num_vertices = parse_header_token(tokens.next(), "vertex count")?;
    if num_vertices <= 0 {
        return Err(ProtocolError::MalformedRequest(format!(
            "vertex count must be positive, got {}",
            num_vertices
        )));
    }
    let num_vertices = to_index(num_vertices)?;
    if num_vertices > options.max_vertices {
        return Err(ProtocolError::MalformedRequest(format!(
            "vertex count {} exceeds limit {}",
            num_vertices, options.max_vertices
        )));
    }
    let start = to_index(parse_header_token(tokens.next(), "start vertex")?)?;

    let mut edges: Vec<Edge> = Vec::new();
    for token in tokens {
        match parse_edge_token(token) {
            Some((u, v, weight)) => edges.push((to_index(u)?, to_index(v)?, weight)),
            None => match options.edge_policy {
                EdgePolicy::Truncate => break,
                EdgePolicy::Strict => {
                    return Err(ProtocolError::MalformedRequest(format!(
                        "invalid edge token {:?}",
                        token
                    )));
                }
            },
        }
    }

    Ok(Graph::new(num_vertices, start, edges)?)
}

fn parse_header_token(token: Option<&str>, what: &str) -> Result<i64, ProtocolError> {
    let token =
        token.ok_or_else(|| ProtocolError::MalformedRequest(format!("missing {}", what)))?;
    token
        .parse::<i64>()
        .map_err(|_| ProtocolError::MalformedRequest(format!("invalid {} {:?}", what, token)))
}

/// Splits `<int>,<int>,<int>` into its three fields.
fn parse_edge_token(token: &str) -> Option<(i64, i64, i64)> {
    let mut fields = token.split(',');
    let u = fields.next()?.parse().ok()?;
    let v = fields.next()?.parse().ok()?;
    let weight = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some((u, v, weight))
}

fn to_index(value: i64) -> Result<usize, ProtocolError> {
    usize::try_from(value)
        .map_err(|_| ProtocolError::OutOfRangeIndex(format!("negative vertex index {}", value)))
}

/// Serializes a computation result into the wire text.
///
/// Distances are written as `<i>:<dist>` followed by a single space, in
/// ascending vertex order, so the text always ends with a space. Unreached
/// vertices print [`UNREACHED_TOKEN`].
pub fn format_result(result: &ComputationResult) -> String {
    match result {
        ComputationResult::NegativeCycle => NEGATIVE_CYCLE_RESPONSE.to_string(),
        ComputationResult::Distances(dist) => {
            let mut out = String::with_capacity(dist.len() * 8);
            for (i, d) in dist.iter().enumerate() {
                let token = match d {
                    Distance::Finite(d) => format!("{}:{} ", i, d),
                    Distance::Unreached => format!("{}:{} ", i, UNREACHED_TOKEN),
                };
                out.push_str(&token);
            }
            out
        }
    }
}

/// Decodes the text written by the server back into a [`Response`].
///
/// Vertex labels must appear in ascending order starting at zero.
pub fn parse_response(text: &str) -> Result<Response, ProtocolError> {
    let trimmed = text.trim();
    if trimmed == NEGATIVE_CYCLE_RESPONSE {
        return Ok(Response::NegativeCycle);
    }
    if trimmed == INVALID_INPUT_RESPONSE {
        return Ok(Response::InvalidInput);
    }
    if trimmed.is_empty() {
        return Err(ProtocolError::MalformedResponse("empty response".to_string()));
    }

    let mut dist = Vec::new();
    for (expected_vertex, token) in trimmed.split_whitespace().enumerate() {
        let (vertex, value) = token
            .split_once(':')
            .ok_or_else(|| ProtocolError::MalformedResponse(format!("bad token {:?}", token)))?;

        if vertex.parse::<usize>().ok() != Some(expected_vertex) {
            return Err(ProtocolError::MalformedResponse(format!(
                "expected vertex {}, found {:?}",
                expected_vertex, vertex
            )));
        }

        let distance = if value == UNREACHED_TOKEN {
            Distance::Unreached
        } else {
            value.parse().map(Distance::Finite).map_err(|_| {
                ProtocolError::MalformedResponse(format!("bad distance {:?}", value))
            })?
        };
        dist.push(distance);
    }

    Ok(Response::Distances(dist))
}
