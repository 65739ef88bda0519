use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to connect to {addr}: {source}")]
    ConnectFailed {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Generated graph is invalid: {0}")]
    GraphError(#[from] common::Error),

    #[error("Invalid generator settings: {0}")]
    InvalidSettings(String),
}
