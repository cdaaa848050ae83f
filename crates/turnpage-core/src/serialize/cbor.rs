use crate::serialize::SerializeError;
use serde::{Serialize, de::DeserializeOwned};
use serde_cbor::{from_slice, to_vec};
use std::panic::{AssertUnwindSafe, catch_unwind};

/// Serialize a value into CBOR bytes.
pub(super) fn serialize<T>(t: &T) -> Result<Vec<u8>, SerializeError>
where
    T: Serialize,
{
    to_vec(t).map_err(|e| SerializeError::Serialize(e.to_string()))
}

/// Deserialize CBOR bytes into a value.
///
/// Safety guarantees:
/// - Input size is bounded before decode.
/// - Any panic during decode is caught and reported as a deserialize error.
/// - No panic escapes this function.
pub(super) fn deserialize_bounded<T>(bytes: &[u8], max_bytes: usize) -> Result<T, SerializeError>
where
    T: DeserializeOwned,
{
    if bytes.len() > max_bytes {
        return Err(SerializeError::DeserializeSizeLimitExceeded {
            len: bytes.len(),
            max_bytes,
        });
    }

    let result = catch_unwind(AssertUnwindSafe(|| from_slice(bytes)));

    match result {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(SerializeError::Deserialize(err.to_string())),
        Err(_) => Err(SerializeError::Deserialize(
            "panic during CBOR deserialization".into(),
        )),
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::{deserialize_bounded, serialize};
    use crate::serialize::SerializeError;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Deserialize, Eq, PartialEq, Serialize)]
    struct Sample {
        version: u8,
        label: String,
    }

    #[test]
    fn round_trip_preserves_fields() {
        let sample = Sample {
            version: 3,
            label: "boundary".to_string(),
        };

        let bytes = serialize(&sample).expect("sample should encode");
        let decoded: Sample =
            deserialize_bounded(&bytes, 1024).expect("sample should decode within limit");

        assert_eq!(decoded, sample);
    }

    #[test]
    fn decode_rejects_payload_over_limit() {
        let sample = Sample {
            version: 1,
            label: "x".repeat(64),
        };

        let bytes = serialize(&sample).expect("sample should encode");
        let err = deserialize_bounded::<Sample>(&bytes, 8)
            .expect_err("oversized payload must be rejected");

        assert!(matches!(
            err,
            SerializeError::DeserializeSizeLimitExceeded { max_bytes: 8, .. }
        ));
    }
}
