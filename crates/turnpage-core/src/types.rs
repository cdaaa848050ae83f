use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

///
/// Timestamp
///
/// Millisecond UNIX timestamp used for recency ordering.
/// Listings sort on these descending ("most recent first").
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, From, Hash, Ord, PartialEq, PartialOrd,
    Serialize,
)]
pub struct Timestamp(u64);

impl Timestamp {
    #[must_use]
    pub const fn new(millis: u64) -> Self {
        Self(millis)
    }

    #[must_use]
    pub const fn millis(self) -> u64 {
        self.0
    }
}

///
/// DocumentId
///
/// Stable identity of one stored document.
/// Doubles as the pagination tie-break key, so its ordering is part of
/// deterministic cursor behavior.
///

#[derive(Clone, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for DocumentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}
