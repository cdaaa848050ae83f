use crate::{
    query::OrderSpec,
    store::Document,
    types::DocumentId,
    value::{Value, canonical_cmp},
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

///
/// CursorBoundarySlot
///
/// Sort-field value captured at a page boundary. Missing fields are a
/// first-class slot so the boundary ordering stays total even when some
/// documents lack the sort field.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub(crate) enum CursorBoundarySlot {
    Missing,
    Present(Value),
}

///
/// CursorBoundary
///
/// Exclusive resume point: the sort slot and identity of the last
/// document of a previously returned page. Seeking after a boundary
/// returns documents strictly beyond it in the compound order.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub(crate) struct CursorBoundary {
    pub(crate) slot: CursorBoundarySlot,
    pub(crate) document_id: DocumentId,
}

impl CursorBoundary {
    pub(crate) const fn new(slot: CursorBoundarySlot, document_id: DocumentId) -> Self {
        Self { slot, document_id }
    }

    /// Capture the boundary of one returned document under an ordering.
    pub(crate) fn from_document(document: &Document, order: &OrderSpec) -> Self {
        Self {
            slot: document.sort_slot(order.field()),
            document_id: document.id().clone(),
        }
    }
}

/// Compare two boundary slots in ascending base order.
///
/// Missing sorts before any present value; present values compare under
/// the canonical comparator.
pub(crate) fn compare_slots(left: &CursorBoundarySlot, right: &CursorBoundarySlot) -> Ordering {
    match (left, right) {
        (CursorBoundarySlot::Missing, CursorBoundarySlot::Missing) => Ordering::Equal,
        (CursorBoundarySlot::Missing, CursorBoundarySlot::Present(_)) => Ordering::Less,
        (CursorBoundarySlot::Present(_), CursorBoundarySlot::Missing) => Ordering::Greater,
        (CursorBoundarySlot::Present(left), CursorBoundarySlot::Present(right)) => {
            canonical_cmp(left, right)
        }
    }
}
