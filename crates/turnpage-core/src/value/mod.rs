mod compare;
mod hash;
mod tag;

#[cfg(test)]
mod tests;

pub use compare::{canonical_cmp, strict_order_cmp};
pub(crate) use hash::hash_value;

use crate::types::Timestamp;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

///
/// Value
/// can be used in equality filters and cursor boundaries
///
/// Null → the field is present with an explicit "no value".
/// A field that is absent from a document is *missing*, not Null; the
/// distinction matters for both filtering and boundary slots.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Value {
    Blob(Vec<u8>),
    Bool(bool),
    Int(i64),
    Null,
    Text(String),
    Timestamp(Timestamp),
    Uint(u64),
    Ulid(Ulid),
}

impl Value {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Stable 0-based rank used for cross-variant ordering.
    pub(crate) const fn canonical_rank(&self) -> u8 {
        tag::canonical_tag(self).to_u8() - 1
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::Uint(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Timestamp> for Value {
    fn from(value: Timestamp) -> Self {
        Self::Timestamp(value)
    }
}

impl From<Ulid> for Value {
    fn from(value: Ulid) -> Self {
        Self::Ulid(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Self::Blob(value)
    }
}
