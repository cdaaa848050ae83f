use crate::{
    cursor::codec::encode_cursor,
    query::{FilterSet, OrderSpec},
    value::hash_value,
};
use sha2::{Digest, Sha256};

// Bump on any change to the signature encoding below.
const SIGNATURE_VERSION: u8 = 1;

///
/// ContinuationSignature
///
/// Stable, deterministic hash of continuation-relevant query shape:
/// collection, equality filters in declared order, and ordering.
/// Excludes windowing state (`limit`) and cursor boundaries, so one
/// signature covers every page of the same listing.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ContinuationSignature([u8; 32]);

impl ContinuationSignature {
    pub(crate) const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub(crate) const fn into_bytes(self) -> [u8; 32] {
        self.0
    }

    #[must_use]
    pub fn as_hex(&self) -> String {
        encode_cursor(&self.0)
    }
}

impl std::fmt::Display for ContinuationSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_hex())
    }
}

/// Compute the continuation signature for one canonical query shape.
pub(crate) fn continuation_signature(
    collection: &str,
    filters: &FilterSet,
    order: &OrderSpec,
) -> ContinuationSignature {
    let mut hasher = Sha256::new();
    write_tag(&mut hasher, SIGNATURE_VERSION);

    write_str(&mut hasher, collection);

    write_len_u32(&mut hasher, filters.len());
    for filter in filters.iter() {
        write_str(&mut hasher, filter.field());
        hasher.update(hash_value(filter.value()));
    }

    write_str(&mut hasher, order.field());
    write_tag(&mut hasher, order.direction().signature_tag());

    ContinuationSignature(hasher.finalize().into())
}

fn write_tag(hasher: &mut Sha256, tag: u8) {
    hasher.update([tag]);
}

// Encode one string with a length prefix into the hash stream.
fn write_str(hasher: &mut Sha256, value: &str) {
    write_len_u32(hasher, value.len());
    hasher.update(value.as_bytes());
}

// Encode a platform-sized length as u32 with deterministic saturation.
fn write_len_u32(hasher: &mut Sha256, len: usize) {
    let len = u32::try_from(len).unwrap_or(u32::MAX);
    hasher.update(len.to_be_bytes());
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::continuation_signature;
    use crate::query::{Filter, FilterSet, OrderSpec};

    fn tenant_filters() -> FilterSet {
        FilterSet::new(vec![
            Filter::new("tenant", "acme"),
            Filter::new("status", "active"),
        ])
    }

    #[test]
    fn signature_is_stable_for_identical_shapes() {
        let left =
            continuation_signature("bookings", &tenant_filters(), &OrderSpec::desc("created_at"));
        let right =
            continuation_signature("bookings", &tenant_filters(), &OrderSpec::desc("created_at"));

        assert_eq!(left, right);
        assert_eq!(left.as_hex(), right.as_hex());
    }

    #[test]
    fn signature_differs_by_collection_filters_and_order() {
        let base =
            continuation_signature("bookings", &tenant_filters(), &OrderSpec::desc("created_at"));

        let other_collection =
            continuation_signature("quotations", &tenant_filters(), &OrderSpec::desc("created_at"));
        assert_ne!(base, other_collection);

        let other_filters = continuation_signature(
            "bookings",
            &FilterSet::new(vec![Filter::new("tenant", "globex")]),
            &OrderSpec::desc("created_at"),
        );
        assert_ne!(base, other_filters);

        let other_field =
            continuation_signature("bookings", &tenant_filters(), &OrderSpec::desc("updated_at"));
        assert_ne!(base, other_field);

        let other_direction =
            continuation_signature("bookings", &tenant_filters(), &OrderSpec::asc("created_at"));
        assert_ne!(base, other_direction);
    }

    #[test]
    fn signature_hashes_filters_in_declared_order() {
        let forward = FilterSet::new(vec![
            Filter::new("tenant", "acme"),
            Filter::new("status", "active"),
        ]);
        let reversed = FilterSet::new(vec![
            Filter::new("status", "active"),
            Filter::new("tenant", "acme"),
        ]);

        let left = continuation_signature("bookings", &forward, &OrderSpec::desc("created_at"));
        let right = continuation_signature("bookings", &reversed, &OrderSpec::desc("created_at"));

        // Declared order is canonical; a reordered set is a distinct shape.
        assert_ne!(left, right);
    }

    #[test]
    fn signature_hex_form_is_sixty_four_chars() {
        let signature =
            continuation_signature("bookings", &FilterSet::default(), &OrderSpec::desc("created_at"));

        assert_eq!(signature.as_hex().len(), 64);
    }
}
