//! Core runtime for Turnpage: canonical values, query shapes, the cursor
//! token protocol, the reference in-memory store, and the bidirectional
//! paginator exported via the `prelude`.
//!
//! The underlying store model only seeks forward ("give me N rows
//! strictly after this boundary"). Page numbering, cursor history, and
//! backward reconstruction all live above that seam in
//! [`paginator::CursorPaginator`].
#![warn(unreachable_pub)]

pub mod cursor;
pub mod error;
pub mod paginator;
pub mod query;
pub mod serialize;
pub mod store;
pub mod trace;
pub mod types;
pub mod value;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// Errors, codecs, and serializers are imported from their owning modules.
///

pub mod prelude {
    pub use crate::{
        paginator::{CursorPaginator, Page},
        query::{Filter, FilterSet, ListQuery, OrderDirection, OrderSpec},
        store::{Document, DocumentStore, MemoryStore},
        types::{DocumentId, Timestamp},
        value::Value,
    };
}
