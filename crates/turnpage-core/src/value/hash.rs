use crate::value::{Value, tag::canonical_tag};
use xxhash_rust::xxh3::Xxh3;

pub(crate) const VALUE_HASH_SEED: u64 = 0;
pub(crate) const VALUE_HASH_VERSION: u8 = 1;

/// Stable digest used for continuation-signature fingerprinting.
///
/// Seed and version are frozen; changing either invalidates every cursor
/// token in the wild.
pub(crate) fn hash_value(value: &Value) -> [u8; 16] {
    let mut hasher = Xxh3::with_seed(VALUE_HASH_SEED);
    hasher.update(&[VALUE_HASH_VERSION]);
    feed_value(&mut hasher, value);

    hasher.digest128().to_be_bytes()
}

fn feed_value(hasher: &mut Xxh3, value: &Value) {
    hasher.update(&[canonical_tag(value).to_u8()]);

    match value {
        Value::Blob(bytes) => {
            feed_len(hasher, bytes.len());
            hasher.update(bytes);
        }
        Value::Bool(b) => hasher.update(&[u8::from(*b)]),
        Value::Int(i) => hasher.update(&i.to_be_bytes()),
        Value::Null => {
            // No payload beyond the canonical tag.
        }
        Value::Text(s) => {
            feed_len(hasher, s.len());
            hasher.update(s.as_bytes());
        }
        Value::Timestamp(ts) => hasher.update(&ts.millis().to_be_bytes()),
        Value::Uint(u) => hasher.update(&u.to_be_bytes()),
        Value::Ulid(u) => hasher.update(&u.to_bytes()),
    }
}

// Lengths feed as u32 with deterministic saturation.
fn feed_len(hasher: &mut Xxh3, len: usize) {
    let len = u32::try_from(len).unwrap_or(u32::MAX);
    hasher.update(&len.to_be_bytes());
}
