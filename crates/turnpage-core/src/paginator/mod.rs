mod page;


pub use page::Page;

use crate::{
    cursor::{ContinuationToken, CursorBoundary},
    error::FetchError,
    query::{ContinuationSignature, FilterSet, ListQuery},
    store::{Document, DocumentStore, QueryRequest, QueryResult, StoreError},
    trace::{FetchKind, TraceEvent, TraceSink},
};
use std::num::NonZeroU32;

///
/// CursorPaginator
///
/// Produces the correct page for "first"/"next"/"previous" navigation
/// over a store that only seeks forward. Forward navigation is cheap
/// cursor seeking; backward navigation re-walks the collection from the
/// start and slices the target page out of the window, trading redundant
/// reads for exact agreement with a fresh forward walk.
///
/// One instance is bound to one query shape and owns its navigation
/// state exclusively. Navigation takes `&mut self`, so overlapping
/// fetches against the same instance cannot be expressed; serializing
/// user-driven navigation is therefore structural, not a caller
/// convention.
///

pub struct CursorPaginator<'a, S: DocumentStore> {
    store: &'a S,
    query: ListQuery,
    signature: ContinuationSignature,
    trace: Option<&'a dyn TraceSink>,
    state: PageState,
}

///
/// PageState
///
/// Mutable navigation state owned by one paginator instance. Every
/// navigation action builds a full replacement state first and commits
/// it only on success, so a failed fetch never leaves partial history.
///

#[derive(Clone, Debug)]
struct PageState {
    // 1-based page currently displayed.
    page_number: u32,
    // Boundary token per fully visited page; entry `k` resumes strictly
    // after page `k + 1`. Every entry derives from the last document of a
    // page as actually returned, never from a speculative fetch.
    cursor_history: Vec<String>,
    has_more: bool,
    current: Vec<Document>,
}

impl PageState {
    const fn fresh() -> Self {
        Self {
            page_number: 1,
            cursor_history: Vec::new(),
            has_more: false,
            current: Vec::new(),
        }
    }
}

impl<'a, S: DocumentStore> CursorPaginator<'a, S> {
    #[must_use]
    pub fn new(store: &'a S, query: ListQuery) -> Self {
        let signature = query.signature();

        Self {
            store,
            query,
            signature,
            trace: None,
            state: PageState::fresh(),
        }
    }

    /// Attach an optional trace sink; tracing never affects navigation.
    #[must_use]
    pub fn with_trace_sink(mut self, sink: &'a dyn TraceSink) -> Self {
        self.trace = Some(sink);
        self
    }

    #[must_use]
    pub const fn page_number(&self) -> u32 {
        self.state.page_number
    }

    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.state.has_more
    }

    #[must_use]
    pub const fn query(&self) -> &ListQuery {
        &self.query
    }

    /// Load page 1, discarding all recorded navigation history.
    pub fn fetch_first(&mut self) -> Result<Page, FetchError> {
        self.emit(TraceEvent::FetchStart {
            kind: FetchKind::First,
            page_number: 1,
        });

        let result = self
            .store
            .query(&self.request(self.probe_limit(), None))?;

        self.commit_forward_page(result, 1, Vec::new(), FetchKind::First)
    }

    /// Advance one page.
    ///
    /// A no-op returning the current page when no further page was
    /// detected: the guard tolerates presentation races around disabled
    /// controls instead of erroring.
    pub fn fetch_next(&mut self) -> Result<Page, FetchError> {
        if !self.state.has_more {
            self.emit(TraceEvent::NavigationIgnored {
                kind: FetchKind::Next,
                page_number: self.state.page_number,
            });
            return Ok(self.current_page());
        }

        let page_number = self.state.page_number;
        self.emit(TraceEvent::FetchStart {
            kind: FetchKind::Next,
            page_number: page_number + 1,
        });

        // `has_more` is only ever set from a non-empty page, so the
        // boundary for the current page is always recorded; a missing
        // entry means there is nothing to advance past.
        let Some(token) = self
            .state
            .cursor_history
            .get(page_number as usize - 1)
            .cloned()
        else {
            return Ok(self.current_page());
        };

        let result = match self
            .store
            .query(&self.request(self.probe_limit(), Some(token)))
        {
            Ok(result) => result,
            Err(StoreError::StaleCursor) => {
                // The anchor document is gone; exact continuation is
                // undefined, so restart from the first page.
                self.emit(TraceEvent::CursorFallback { page_number });
                return self.fetch_first();
            }
            Err(err) => return Err(err.into()),
        };

        let mut history = self.state.cursor_history.clone();
        history.truncate(page_number as usize);

        self.commit_forward_page(result, page_number + 1, history, FetchKind::Next)
    }

    /// Step back one page; a no-op returning the current page at page 1.
    ///
    /// The store cannot seek backward, so the target page is rebuilt by
    /// re-querying from the start of the collection through the target
    /// and discarding the surplus. Reads cost O(page number × page size);
    /// in exchange the result always matches what a fresh forward walk
    /// would show for that page.
    pub fn fetch_previous(&mut self) -> Result<Page, FetchError> {
        if self.state.page_number <= 1 {
            self.emit(TraceEvent::NavigationIgnored {
                kind: FetchKind::Previous,
                page_number: self.state.page_number,
            });
            return Ok(self.current_page());
        }

        let target = self.state.page_number - 1;
        self.emit(TraceEvent::FetchStart {
            kind: FetchKind::Previous,
            page_number: target,
        });

        // One surplus row past the target page proves a further page
        // exists, which keeps `has_more` exact after the jump.
        let window_limit = checked_limit(target.saturating_mul(self.page_size()).saturating_add(1));
        let window = self
            .store
            .query(&self.request(window_limit, None))?
            .into_documents();

        let page_size = self.page_size() as usize;
        let target_index = target as usize;
        let start = (target_index - 1) * page_size;
        let end = (target_index * page_size).min(window.len());
        let documents = if start < window.len() {
            window[start..end].to_vec()
        } else {
            Vec::new()
        };
        let has_more = window.len() > target_index * page_size;

        // The window re-derives the boundary of every full page it
        // covers; anything recorded past the target is stale after a
        // backward jump and is dropped.
        let mut history = Vec::with_capacity(target_index);
        for page in 1..=target_index {
            let Some(last) = window.get(page * page_size - 1) else {
                break;
            };
            history.push(self.boundary_token(last)?);
        }

        let rows_read = documents.len();
        self.state = PageState {
            page_number: target,
            cursor_history: history,
            has_more,
            current: documents,
        };

        self.emit(TraceEvent::FetchFinish {
            kind: FetchKind::Previous,
            page_number: target,
            rows_read: saturating_u32(rows_read),
            has_more,
        });

        Ok(self.current_page())
    }

    /// Replace the filter set and discard all navigation state.
    ///
    /// Cursors are not portable across filter changes; the recomputed
    /// signature invalidates every token minted under the old shape.
    pub fn reset(&mut self, filters: FilterSet) {
        self.query.replace_filters(filters);
        self.signature = self.query.signature();
        self.state = PageState::fresh();
    }

    // Truncate to the page size, detect the probe surplus, record the
    // boundary of the returned page, then commit the replacement state.
    fn commit_forward_page(
        &mut self,
        result: QueryResult,
        page_number: u32,
        mut history: Vec<String>,
        kind: FetchKind,
    ) -> Result<Page, FetchError> {
        let mut documents = result.into_documents();
        let page_size = self.page_size() as usize;
        let has_more = documents.len() > page_size;
        documents.truncate(page_size);

        if let Some(last) = documents.last() {
            history.push(self.boundary_token(last)?);
        }

        let rows_read = documents.len();
        self.state = PageState {
            page_number,
            cursor_history: history,
            has_more,
            current: documents,
        };

        self.emit(TraceEvent::FetchFinish {
            kind,
            page_number,
            rows_read: saturating_u32(rows_read),
            has_more,
        });

        Ok(self.current_page())
    }

    fn current_page(&self) -> Page {
        Page::new(
            self.state.current.clone(),
            self.state.page_number,
            self.state.has_more,
        )
    }

    fn boundary_token(&self, document: &Document) -> Result<String, FetchError> {
        let boundary = CursorBoundary::from_document(document, self.query.order());
        let token = ContinuationToken::new(self.signature, boundary);

        Ok(token.encode()?)
    }

    fn request(&self, limit: NonZeroU32, start_after: Option<String>) -> QueryRequest {
        let request = QueryRequest::new(
            self.query.collection(),
            self.query.filters().clone(),
            self.query.order().clone(),
            limit,
        );

        match start_after {
            Some(token) => request.start_after(token),
            None => request,
        }
    }

    const fn page_size(&self) -> u32 {
        self.query.page_size().get()
    }

    // Request one row past the page window to detect a further page
    // without a separate count query.
    fn probe_limit(&self) -> NonZeroU32 {
        checked_limit(self.page_size().saturating_add(1))
    }

    fn emit(&self, event: TraceEvent) {
        if let Some(sink) = self.trace {
            sink.on_event(event);
        }
    }
}

// Window limits derive from non-zero page sizes, so zero is unreachable;
// saturate instead of panicking anyway.
fn checked_limit(limit: u32) -> NonZeroU32 {
    NonZeroU32::new(limit).unwrap_or(NonZeroU32::MAX)
}

fn saturating_u32(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}
