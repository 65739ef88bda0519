//! Request framing.
//!
//! A request ends at the first newline or when the peer half-closes its
//! write side, whichever comes first. Anything after the newline is ignored.

use tokio::io::{AsyncRead, AsyncReadExt};

/// Result of reading one request off a connection.
#[derive(Debug, PartialEq, Eq)]
pub enum Frame {
    /// The request bytes, without the terminating newline.
    Complete(Vec<u8>),
    /// The peer sent more than the configured limit before finishing.
    TooLarge,
}

/// Reads a single request, `buffer_size` bytes at a time.
pub async fn read_request<R>(
    reader: &mut R,
    buffer_size: usize,
    max_request_bytes: usize,
) -> std::io::Result<Frame>
where
    R: AsyncRead + Unpin,
{
    let mut request = Vec::new();
    let mut buffer = vec![0u8; buffer_size];

    loop {
        let n = reader.read(&mut buffer).await?;
        if n == 0 {
            break;
        }

        let chunk = &buffer[..n];
        let newline = chunk.iter().position(|&b| b == b'\n');
        request.extend_from_slice(&chunk[..newline.unwrap_or(n)]);

        if request.len() > max_request_bytes {
            return Ok(Frame::TooLarge);
        }
        if newline.is_some() {
            break;
        }
    }

    Ok(Frame::Complete(request))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_until_eof() {
        let mut input: &[u8] = b"3 0 0,1,4 1,2,-2";
        let frame = read_request(&mut input, 4, 1024).await.unwrap();
        assert_eq!(frame, Frame::Complete(b"3 0 0,1,4 1,2,-2".to_vec()));
    }

    #[tokio::test]
    async fn test_stops_at_newline() {
        let mut input: &[u8] = b"1 0\ntrailing garbage";
        let frame = read_request(&mut input, 1024, 1024).await.unwrap();
        assert_eq!(frame, Frame::Complete(b"1 0".to_vec()));
    }

    #[tokio::test]
    async fn test_newline_split_across_reads() {
        let mut input: &[u8] = b"2 0 0,1,5\n";
        let frame = read_request(&mut input, 3, 1024).await.unwrap();
        assert_eq!(frame, Frame::Complete(b"2 0 0,1,5".to_vec()));
    }

    #[tokio::test]
    async fn test_empty_stream() {
        let mut input: &[u8] = b"";
        let frame = read_request(&mut input, 16, 1024).await.unwrap();
        assert_eq!(frame, Frame::Complete(Vec::new()));
    }

    #[tokio::test]
    async fn test_oversized_request() {
        let mut input: &[u8] = b"0123456789abcdef";
        let frame = read_request(&mut input, 4, 10).await.unwrap();
        assert_eq!(frame, Frame::TooLarge);
    }

    #[tokio::test]
    async fn test_request_at_limit_is_accepted() {
        let mut input: &[u8] = b"0123456789\n";
        let frame = read_request(&mut input, 4, 10).await.unwrap();
        assert_eq!(frame, Frame::Complete(b"0123456789".to_vec()));
    }
}
