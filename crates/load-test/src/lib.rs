//! Client-side tooling for the shortest-path server: a one-shot TCP client,
//! a random graph generator with locally computed expectations, and the
//! append-only test log used by the mass test.

pub mod client;
pub mod error;
pub mod generator;
pub mod test_log;

pub use client::send_request;
pub use error::Error;
pub use generator::{GeneratorSettings, GraphCase, GraphGenerator};
pub use test_log::TestLog;
