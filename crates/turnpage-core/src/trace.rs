//! Navigation tracing boundary.
//!
//! Tracing is optional, injected by the caller, and must not affect
//! navigation semantics.

///
/// TraceSink
///

pub trait TraceSink: Send + Sync {
    fn on_event(&self, event: TraceEvent);
}

///
/// FetchKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FetchKind {
    First,
    Next,
    Previous,
}

///
/// TraceEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TraceEvent {
    FetchStart {
        kind: FetchKind,
        page_number: u32,
    },
    FetchFinish {
        kind: FetchKind,
        page_number: u32,
        rows_read: u32,
        has_more: bool,
    },
    /// A guarded navigation action resolved as a no-op without a query.
    NavigationIgnored {
        kind: FetchKind,
        page_number: u32,
    },
    /// A stale cursor forced a restart from the first page.
    CursorFallback {
        page_number: u32,
    },
}
