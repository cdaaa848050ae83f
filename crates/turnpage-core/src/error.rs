use crate::{cursor::CursorError, store::StoreError};
use thiserror::Error as ThisError;

///
/// FetchError
///
/// Navigation failures surfaced to the presentation layer. Paginator
/// state is unchanged whenever one of these is returned, so the caller
/// may retry the same navigation action verbatim.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum FetchError {
    /// The underlying store rejected the page query.
    #[error("page fetch failed: {0}")]
    Store(#[from] StoreError),

    /// Boundary token bookkeeping failed while recording a page.
    #[error("page cursor bookkeeping failed: {0}")]
    Cursor(#[from] CursorError),
}
