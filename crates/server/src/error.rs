use std::net::SocketAddr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to load configuration: {0}")]
    ConfigLoadError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Bind address {0} did not resolve to any socket address.")]
    AddressResolution(String),

    #[error("Timed out reading request from {0}.")]
    ReadTimeout(SocketAddr),
}
