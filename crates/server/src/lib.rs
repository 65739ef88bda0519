//! TCP front end of the Bellman-Ford shortest-path service.
//!
//! One request per connection: read a line, compute, write the answer, close.

pub mod config;
pub mod error;
pub mod frame;
pub mod handler;
pub mod server;

pub use config::{Config, ServerConfig};
pub use error::Error;
pub use handler::{Outcome, Reply, RequestHandler, handle_request};
pub use server::{Server, ServerStats};
