use crate::cursor::codec::CursorDecodeError;
use thiserror::Error as ThisError;

///
/// CursorError
///
/// Continuation token and boundary validation failures.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum CursorError {
    /// Token text is not a valid transport token.
    #[error("malformed cursor token: {0}")]
    MalformedToken(#[from] CursorDecodeError),

    /// Token payload could not be encoded.
    #[error("failed to encode continuation token: {reason}")]
    Encode { reason: String },

    /// Token payload could not be decoded after transport decoding.
    #[error("invalid continuation token payload: {reason}")]
    InvalidPayload { reason: String },

    /// Token wire version is unsupported.
    #[error("unsupported continuation token version: {version}")]
    UnsupportedVersion { version: u8 },

    /// Token does not belong to this canonical query shape.
    #[error(
        "continuation token does not match the query signature: expected={expected}, actual={actual}"
    )]
    SignatureMismatch { expected: String, actual: String },
}
