use crate::{
    cursor::{boundary::CursorBoundary, codec, error::CursorError},
    query::ContinuationSignature,
    serialize::{deserialize_bounded, serialize},
};
use serde::{Deserialize, Serialize};

const MAX_CONTINUATION_TOKEN_BYTES: usize = 8 * 1024;

///
/// ContinuationToken
/// Opaque cursor payload bound to a continuation signature.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct ContinuationToken {
    signature: ContinuationSignature,
    boundary: CursorBoundary,
}

impl ContinuationToken {
    pub(crate) const fn new(signature: ContinuationSignature, boundary: CursorBoundary) -> Self {
        Self {
            signature,
            boundary,
        }
    }

    pub(crate) const fn signature(&self) -> ContinuationSignature {
        self.signature
    }

    pub(crate) const fn boundary(&self) -> &CursorBoundary {
        &self.boundary
    }

    pub(crate) fn into_boundary(self) -> CursorBoundary {
        self.boundary
    }

    /// Encode this token into its opaque hex transport form.
    pub(crate) fn encode(&self) -> Result<String, CursorError> {
        let wire = ContinuationTokenWire {
            version: TokenVersion::V1.encode(),
            signature: self.signature.into_bytes(),
            boundary: self.boundary.clone(),
        };

        let bytes = serialize(&wire).map_err(|err| CursorError::Encode {
            reason: err.to_string(),
        })?;

        Ok(codec::encode_cursor(&bytes))
    }

    /// Decode one transport token back into a validated payload.
    pub(crate) fn decode_token(token: &str) -> Result<Self, CursorError> {
        let bytes = codec::decode_cursor(token)?;
        Self::decode(&bytes)
    }

    fn decode(bytes: &[u8]) -> Result<Self, CursorError> {
        let wire: ContinuationTokenWire =
            deserialize_bounded(bytes, MAX_CONTINUATION_TOKEN_BYTES).map_err(|err| {
                CursorError::InvalidPayload {
                    reason: err.to_string(),
                }
            })?;

        // Decode the wire version first so compatibility behavior stays
        // centralized in TokenVersion. V1 is the only shipped layout, so
        // the payload needs no per-version fixups yet.
        TokenVersion::decode(wire.version)?;

        Ok(Self::new(
            ContinuationSignature::from_bytes(wire.signature),
            wire.boundary,
        ))
    }

    #[cfg(test)]
    pub(crate) fn encode_with_version_for_test(&self, version: u8) -> Result<String, CursorError> {
        let wire = ContinuationTokenWire {
            version,
            signature: self.signature.into_bytes(),
            boundary: self.boundary.clone(),
        };

        let bytes = serialize(&wire).map_err(|err| CursorError::Encode {
            reason: err.to_string(),
        })?;

        Ok(codec::encode_cursor(&bytes))
    }
}

///
/// TokenVersion
///
/// Wire-level token version owned by the cursor protocol boundary.
/// This keeps version parsing and compatibility behavior centralized.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum TokenVersion {
    V1,
}

impl TokenVersion {
    const V1_TAG: u8 = 1;

    const fn decode(raw: u8) -> Result<Self, CursorError> {
        match raw {
            Self::V1_TAG => Ok(Self::V1),
            version => Err(CursorError::UnsupportedVersion { version }),
        }
    }

    const fn encode(self) -> u8 {
        match self {
            Self::V1 => Self::V1_TAG,
        }
    }
}

///
/// ContinuationTokenWire
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
struct ContinuationTokenWire {
    version: u8,
    signature: [u8; 32],
    boundary: CursorBoundary,
}
