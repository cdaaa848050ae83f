//! Canonical compound ordering shared by store sorting and boundary
//! comparison. Both sides must agree exactly, or continuation would skip
//! or duplicate rows at page seams.

use crate::{
    cursor::boundary::{CursorBoundary, compare_slots},
    query::OrderSpec,
    store::Document,
};
use std::cmp::Ordering;

/// Compare two documents under the compound directed order.
///
/// The sort field compares first; ties fall through to the document id
/// in the same direction, so equality only occurs for the same document.
pub(crate) fn compare_documents(left: &Document, right: &Document, order: &OrderSpec) -> Ordering {
    let ordering = compare_slots(
        &left.sort_slot(order.field()),
        &right.sort_slot(order.field()),
    );
    let ordering = order.direction().apply(ordering);
    if ordering != Ordering::Equal {
        return ordering;
    }

    order.direction().apply(left.id().cmp(right.id()))
}

/// Compare one document against a continuation boundary under the
/// compound directed order.
pub(crate) fn compare_document_to_boundary(
    document: &Document,
    boundary: &CursorBoundary,
    order: &OrderSpec,
) -> Ordering {
    let ordering = compare_slots(&document.sort_slot(order.field()), &boundary.slot);
    let ordering = order.direction().apply(ordering);
    if ordering != Ordering::Equal {
        return ordering;
    }

    order.direction().apply(document.id().cmp(&boundary.document_id))
}

/// Sort rows into the canonical compound order.
pub(crate) fn sort_documents(rows: &mut [Document], order: &OrderSpec) {
    rows.sort_by(|left, right| compare_documents(left, right, order));
}

/// Apply a strict continuation boundary: keep only rows strictly after
/// the boundary under the compound order.
pub(crate) fn apply_cursor_boundary(
    rows: &mut Vec<Document>,
    boundary: &CursorBoundary,
    order: &OrderSpec,
) {
    rows.retain(|row| compare_document_to_boundary(row, boundary, order) == Ordering::Greater);
}
