mod signature;

pub use signature::ContinuationSignature;
pub(crate) use signature::continuation_signature;

use crate::{store::Document, value::Value};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, num::NonZeroU32};

///
/// OrderDirection
///
/// Canonical traversal direction shared by query shape, store ordering,
/// and cursor boundary comparison. Listings default to descending
/// ("most recent first").
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum OrderDirection {
    Asc,
    #[default]
    Desc,
}

impl OrderDirection {
    /// Apply this direction to an ascending base ordering.
    #[must_use]
    pub(crate) const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }

    // Stable tag fed into the continuation signature.
    pub(crate) const fn signature_tag(self) -> u8 {
        match self {
            Self::Asc => 1,
            Self::Desc => 2,
        }
    }
}

///
/// OrderSpec
///
/// Single-field total ordering. The sort field alone may not be unique;
/// the document id is always applied as a tie-break in the same
/// direction, so the compound order is total and deterministic.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderSpec {
    field: String,
    direction: OrderDirection,
}

impl OrderSpec {
    pub fn new(field: impl Into<String>, direction: OrderDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Descending order on `field`, newest-style listings.
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, OrderDirection::Desc)
    }

    /// Ascending order on `field`.
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, OrderDirection::Asc)
    }

    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    #[must_use]
    pub const fn direction(&self) -> OrderDirection {
        self.direction
    }
}

///
/// Filter
/// One equality predicate; a document matches when the named field is
/// present and equal to the filter value.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Filter {
    field: String,
    value: Value,
}

impl Filter {
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    // A missing field never matches, not even against Value::Null.
    pub(crate) fn matches(&self, document: &Document) -> bool {
        document.field(&self.field) == Some(&self.value)
    }
}

///
/// FilterSet
///
/// Ordered equality predicates, all of which must match. The declared
/// order is part of the canonical query shape: the continuation
/// signature hashes filters in order, so a reordered set is a different
/// shape with different cursors.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FilterSet {
    filters: Vec<Filter>,
}

impl FilterSet {
    #[must_use]
    pub fn new(filters: Vec<Filter>) -> Self {
        Self { filters }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Filter> {
        self.filters.iter()
    }

    pub(crate) fn matches(&self, document: &Document) -> bool {
        self.filters.iter().all(|filter| filter.matches(document))
    }
}

impl FromIterator<Filter> for FilterSet {
    fn from_iter<I: IntoIterator<Item = Filter>>(iter: I) -> Self {
        Self {
            filters: iter.into_iter().collect(),
        }
    }
}

///
/// ListQuery
///
/// The immutable request shape one paginator instance is bound to.
/// Changing filters or ordering means a new shape, a new signature, and
/// therefore fresh cursors.
///

#[derive(Clone, Debug)]
pub struct ListQuery {
    collection: String,
    filters: FilterSet,
    order: OrderSpec,
    page_size: NonZeroU32,
}

impl ListQuery {
    pub fn new(collection: impl Into<String>, order: OrderSpec, page_size: NonZeroU32) -> Self {
        Self {
            collection: collection.into(),
            filters: FilterSet::default(),
            order,
            page_size,
        }
    }

    /// Append one equality filter.
    #[must_use]
    pub fn filter(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.filters.push(Filter::new(field, value));
        self
    }

    /// Replace the whole filter set.
    #[must_use]
    pub fn with_filters(mut self, filters: FilterSet) -> Self {
        self.filters = filters;
        self
    }

    #[must_use]
    pub fn collection(&self) -> &str {
        &self.collection
    }

    #[must_use]
    pub const fn filters(&self) -> &FilterSet {
        &self.filters
    }

    #[must_use]
    pub const fn order(&self) -> &OrderSpec {
        &self.order
    }

    #[must_use]
    pub const fn page_size(&self) -> NonZeroU32 {
        self.page_size
    }

    /// Compute the continuation signature for this query shape.
    #[must_use]
    pub fn signature(&self) -> ContinuationSignature {
        continuation_signature(&self.collection, &self.filters, &self.order)
    }

    // Filter replacement is owned by paginator reset; cursors minted under
    // the old shape stop validating once the signature is recomputed.
    pub(crate) fn replace_filters(&mut self, filters: FilterSet) {
        self.filters = filters;
    }
}
