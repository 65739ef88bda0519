use common::types::ComputationResult;
use graph_protocol::{
    INVALID_INPUT_RESPONSE, ParseOptions, ProtocolError, format_result, parse_request,
};
use sssp_core::{BellmanFordSolver, ShortestPathSolver};

/// How a request was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Distances,
    NegativeCycle,
    /// The payload could not be turned into a valid graph.
    Rejected(String),
}

/// Response text for one request, plus what produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub body: String,
    pub outcome: Outcome,
}

impl Reply {
    /// The invalid-input reply, carrying the reason for logging.
    pub fn rejected(reason: impl Into<String>) -> Self {
        Reply {
            body: INVALID_INPUT_RESPONSE.to_string(),
            outcome: Outcome::Rejected(reason.into()),
        }
    }
}

/// Turns raw request payloads into response text.
///
/// Holds no per-request state, so one instance can be shared by every
/// connection task.
pub struct RequestHandler<S> {
    solver: S,
    options: ParseOptions,
}

impl<S> RequestHandler<S>
where
    S: ShortestPathSolver,
{
    pub fn new(solver: S, options: ParseOptions) -> Self {
        RequestHandler { solver, options }
    }

    /// Parses, solves and formats a single request.
    ///
    /// Never fails: every parse or range error becomes the invalid-input reply.
    pub fn handle(&self, payload: &[u8]) -> Reply {
        let Ok(text) = std::str::from_utf8(payload) else {
            return Reply::rejected("payload is not valid UTF-8");
        };

        let graph = match parse_request(text, &self.options) {
            Ok(graph) => graph,
            Err(e) => return Reply::rejected(e.to_string()),
        };

        match self.solver.compute(&graph) {
            Ok(result) => {
                let outcome = match result {
                    ComputationResult::Distances(_) => Outcome::Distances,
                    ComputationResult::NegativeCycle => Outcome::NegativeCycle,
                };
                Reply {
                    body: format_result(&result),
                    outcome,
                }
            }
            Err(e) => Reply::rejected(ProtocolError::from(e).to_string()),
        }
    }
}

impl Default for RequestHandler<BellmanFordSolver> {
    fn default() -> Self {
        RequestHandler::new(BellmanFordSolver, ParseOptions::default())
    }
}

/// Resolves one request payload to its response text with default options.
pub fn handle_request(payload: &str) -> String {
    RequestHandler::default().handle(payload.as_bytes()).body
}
