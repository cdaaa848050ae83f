mod boundary;
pub(crate) mod codec;
mod error;
pub(crate) mod order;
mod token;


pub(crate) use boundary::{CursorBoundary, CursorBoundarySlot};
pub use codec::CursorDecodeError;
pub use error::CursorError;
pub(crate) use token::ContinuationToken;

use crate::query::ContinuationSignature;

/// Validate and decode one continuation token against a query signature.
///
/// Signature validation happens here, at the protocol boundary, so store
/// backends never see a boundary minted under a different query shape.
pub(crate) fn prepare_cursor(
    token: &str,
    expected_signature: ContinuationSignature,
) -> Result<CursorBoundary, CursorError> {
    let token = ContinuationToken::decode_token(token)?;

    if token.signature() != expected_signature {
        return Err(CursorError::SignatureMismatch {
            expected: expected_signature.as_hex(),
            actual: token.signature().as_hex(),
        });
    }

    Ok(token.into_boundary())
}
