use crate::cursor::CursorError;
use thiserror::Error as ThisError;

///
/// StoreError
///
/// Query-boundary failures surfaced to navigation callers. These carry
/// no paginator state; a failed request may be retried verbatim.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum StoreError {
    /// The store rejected or timed out the request. Backend network
    /// timeouts surface here too, not as a separate kind.
    #[error("store query failed: {message}")]
    QueryFailed { message: String },

    /// A previously issued resume token no longer resolves, typically
    /// because the anchor document was deleted.
    #[error("continuation cursor no longer resolves to a stored document")]
    StaleCursor,

    /// The resume token failed validation against this request shape.
    #[error(transparent)]
    Cursor(#[from] CursorError),
}
