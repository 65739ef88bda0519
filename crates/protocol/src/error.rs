use thiserror::Error;

/// Codec errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// The payload does not follow `<V> <start> <edge>...`.
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    /// A start vertex or edge endpoint lies outside `0..V`.
    #[error("vertex index out of range: {0}")]
    OutOfRangeIndex(String),

    /// Response text that is neither a literal nor a distance list.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl ProtocolError {
    /// Whether the error is answered with the invalid-input literal.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            ProtocolError::MalformedRequest(_) | ProtocolError::OutOfRangeIndex(_)
        )
    }
}

impl From<common::Error> for ProtocolError {
    fn from(err: common::Error) -> Self {
        match err {
            common::Error::EmptyGraph => ProtocolError::MalformedRequest(err.to_string()),
            common::Error::StartOutOfBounds { .. } | common::Error::NodeIndexOutOfBounds(_) => {
                ProtocolError::OutOfRangeIndex(err.to_string())
            }
        }
    }
}
