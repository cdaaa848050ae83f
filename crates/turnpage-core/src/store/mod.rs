mod error;
mod memory;

pub use error::StoreError;
pub use memory::MemoryStore;

use crate::{
    cursor::CursorBoundarySlot,
    query::{ContinuationSignature, FilterSet, OrderSpec, continuation_signature},
    types::DocumentId,
    value::Value,
};
use std::{collections::BTreeMap, num::NonZeroU32};

///
/// Document
///
/// One stored document: stable identity plus named scalar fields.
/// Field storage is an ordered map; documents are schemaless and two
/// documents in one collection may carry different fields.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Document {
    id: DocumentId,
    fields: BTreeMap<String, Value>,
}

impl Document {
    pub fn new(id: impl Into<DocumentId>) -> Self {
        Self {
            id: id.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Attach one named field.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub const fn id(&self) -> &DocumentId {
        &self.id
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    // Boundary slot for a sort field; absent fields are Missing, which is
    // distinct from an explicit Null value.
    pub(crate) fn sort_slot(&self, field: &str) -> CursorBoundarySlot {
        match self.field(field) {
            Some(value) => CursorBoundarySlot::Present(value.clone()),
            None => CursorBoundarySlot::Missing,
        }
    }
}

///
/// QueryRequest
///
/// One forward query against a collection: equality filters, compound
/// order, bounded limit, and an optional exclusive resume token. This is
/// the only request shape a [`DocumentStore`] understands.
///

#[derive(Clone, Debug)]
pub struct QueryRequest {
    collection: String,
    filters: FilterSet,
    order: OrderSpec,
    limit: NonZeroU32,
    start_after: Option<String>,
}

impl QueryRequest {
    #[must_use]
    pub fn new(
        collection: impl Into<String>,
        filters: FilterSet,
        order: OrderSpec,
        limit: NonZeroU32,
    ) -> Self {
        Self {
            collection: collection.into(),
            filters,
            order,
            limit,
            start_after: None,
        }
    }

    /// Resume strictly after the boundary the token encodes.
    #[must_use]
    pub fn start_after(mut self, token: impl Into<String>) -> Self {
        self.start_after = Some(token.into());
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
    pub const fn limit(&self) -> NonZeroU32 {
        self.limit
    }

    #[must_use]
    pub fn start_after_token(&self) -> Option<&str> {
        self.start_after.as_deref()
    }

    /// Compute the continuation signature for this request's query shape.
    #[must_use]
    pub fn signature(&self) -> ContinuationSignature {
        continuation_signature(&self.collection, &self.filters, &self.order)
    }
}

///
/// QueryResult
/// Ordered result rows for one forward query.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct QueryResult {
    documents: Vec<Document>,
}

impl QueryResult {
    #[must_use]
    pub const fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    #[must_use]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    #[must_use]
    pub fn into_documents(self) -> Vec<Document> {
        self.documents
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

///
/// DocumentStore
///
/// Forward-seek query boundary. Backends only support "strictly after a
/// boundary" seeking; backward paging is reconstructed above this trait,
/// never inside it.
///

pub trait DocumentStore {
    fn query(&self, request: &QueryRequest) -> Result<QueryResult, StoreError>;
}
