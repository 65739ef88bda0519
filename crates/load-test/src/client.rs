use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use super::error::Error;

/// Sends one request and returns the server's full response.
///
/// The request is newline-terminated and the write side is half-closed, so
/// the server sees the end of the request either way. The response is read
/// until the server closes the connection.
pub async fn send_request(addr: &str, request: &str) -> Result<String, Error> {
    let mut stream = TcpStream::connect(addr)
        .await
        .map_err(|source| Error::ConnectFailed {
            addr: addr.to_string(),
            source,
        })?;

    let mut payload = String::with_capacity(request.len() + 1);
    payload.push_str(request.trim_end_matches(['\r', '\n']));
    payload.push('\n');

    stream.write_all(payload.as_bytes()).await?;
    stream.shutdown().await?;
    tracing::debug!("Sent {} bytes to {}", payload.len(), addr);

    let mut response = String::new();
    stream.read_to_string(&mut response).await?;
    tracing::debug!("Received {} bytes from {}", response.len(), addr);

    Ok(response)
}
