use crate::{
    cursor::{self, order},
    store::{Document, DocumentStore, QueryRequest, QueryResult, StoreError},
    types::DocumentId,
};
use std::collections::BTreeMap;

///
/// MemoryStore
///
/// In-memory reference backend with the same forward-seek contract as a
/// remote document store: equality filtering, canonical compound
/// ordering, strict boundary seeking, and limit truncation. Collections
/// hold documents in insertion order; ordering is applied per query.
///

#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: BTreeMap<String, Vec<Document>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one document, replacing any existing document with the
    /// same id in the collection.
    pub fn insert(&mut self, collection: impl Into<String>, document: Document) {
        let rows = self.collections.entry(collection.into()).or_default();

        match rows.iter().position(|row| row.id() == document.id()) {
            Some(slot) => rows[slot] = document,
            None => rows.push(document),
        }
    }

    /// Remove one document; returns whether it was present.
    pub fn remove(&mut self, collection: &str, id: &DocumentId) -> bool {
        let Some(rows) = self.collections.get_mut(collection) else {
            return false;
        };

        let before = rows.len();
        rows.retain(|row| row.id() != id);

        rows.len() != before
    }

    /// Number of documents currently stored in one collection.
    #[must_use]
    pub fn collection_len(&self, collection: &str) -> usize {
        self.collections.get(collection).map_or(0, Vec::len)
    }
}

impl DocumentStore for MemoryStore {
    fn query(&self, request: &QueryRequest) -> Result<QueryResult, StoreError> {
        // Token validation happens before any row work so a foreign or
        // corrupt cursor fails without partial evaluation.
        let boundary = match request.start_after_token() {
            Some(token) => Some(cursor::prepare_cursor(token, request.signature())?),
            None => None,
        };

        let mut rows: Vec<Document> = self
            .collections
            .get(request.collection())
            .map(|rows| {
                rows.iter()
                    .filter(|row| request.filters().matches(row))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        order::sort_documents(&mut rows, request.order());

        if let Some(boundary) = &boundary {
            order::apply_cursor_boundary(&mut rows, boundary, request.order());
        }

        rows.truncate(request.limit().get() as usize);

        Ok(QueryResult::new(rows))
    }
}

///
/// TESTS
///
