//! Paginated list state: one query value plus a reducer-style transition
//! function, shared by the attendee and event views.

use passin_api::types::ListResult;

/// Fixed page length used to derive the page count.
pub const PAGE_SIZE: i64 = 10;

/// Derives the page count from a collection total. Never less than 1, so a
/// zero-row collection still has a current page.
pub fn total_pages(total: i64) -> i64 {
    std::cmp::max(1, (total + PAGE_SIZE - 1) / PAGE_SIZE)
}

/// The `(search, page)` pair driving a list fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub search: String,
    /// 1-indexed page.
    pub page: i64,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
        }
    }
}

/// Render state of a list view. A failed fetch is collapsed into `Empty`,
/// indistinguishable from a genuinely empty result set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListState<T> {
    /// A fetch for the current query is in flight.
    Loading,
    /// The fetch settled with zero rows, or failed.
    Empty,
    /// The fetch settled with at least one row.
    Populated(Vec<T>),
}

/// Inputs to the list reducer.
pub enum ListEvent<T> {
    /// The search term changed. Resets the page to 1.
    SearchChanged(String),
    /// A pagination action requested this 1-indexed page.
    PageRequested(i64),
    /// The fetch issued with the given sequence number settled.
    FetchSettled {
        seq: u64,
        outcome: Result<ListResult<T>, passin_api::Error>,
    },
}

/// Side effect requested by a transition: issue a fetch for `query` and
/// report back with `seq`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchEffect {
    pub seq: u64,
    pub query: ListQuery,
}

/// A paginated, searchable list view.
///
/// Every accepted query change transitions to [`ListState::Loading`]
/// synchronously and yields a [`FetchEffect`] carrying a fresh sequence
/// number. Settled fetches whose sequence number has been superseded are
/// discarded, so a slow early response can never overwrite a later one.
pub struct ListView<T> {
    query: ListQuery,
    state: ListState<T>,
    total: i64,
    seq: u64,
}

impl<T> ListView<T> {
    /// Creates a view for the given initial query, with its first fetch
    /// already pending.
    pub fn new(query: ListQuery) -> (Self, FetchEffect) {
        let view = Self {
            query: query.clone(),
            state: ListState::Loading,
            total: 0,
            seq: 1,
        };
        let effect = FetchEffect { seq: 1, query };
        (view, effect)
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn state(&self) -> &ListState<T> {
        &self.state
    }

    /// Collection-wide row count from the last settled fetch.
    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn total_pages(&self) -> i64 {
        total_pages(self.total)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ListState::Loading)
    }

    /// Whether a pagination control targeting `page` should be enabled.
    pub fn can_go_to(&self, page: i64) -> bool {
        page >= 1 && page <= self.total_pages() && page != self.query.page
    }

    /// Applies one event, returning the fetch effect it demands, if any.
    ///
    /// Out-of-range page requests are rejected rather than clamped: the
    /// query, state, and sequence number are left untouched. Fetches are
    /// issued once per distinct `(search, page)` pair, so requesting the
    /// current page or re-setting the current search is also a no-op.
    pub fn apply(&mut self, event: ListEvent<T>) -> Option<FetchEffect> {
        match event {
            ListEvent::SearchChanged(search) => {
                if search == self.query.search {
                    return None;
                }
                self.query = ListQuery { search, page: 1 };
                Some(self.start_fetch())
            }
            ListEvent::PageRequested(page) => {
                if !self.can_go_to(page) {
                    return None;
                }
                self.query.page = page;
                Some(self.start_fetch())
            }
            ListEvent::FetchSettled { seq, outcome } => {
                if seq != self.seq {
                    // A newer fetch has been issued; this response is stale.
                    return None;
                }
                let result = outcome.unwrap_or_else(|e| {
                    tracing::error!("List fetch failed: {}", e);
                    ListResult::empty()
                });
                self.total = result.total;
                self.state = if result.items.is_empty() {
                    ListState::Empty
                } else {
                    ListState::Populated(result.items)
                };
                None
            }
        }
    }

    /// Pagination actions. Each computes a candidate page and is a no-op
    /// when the candidate falls outside `[1, total_pages]`.
    pub fn first_page(&mut self) -> Option<FetchEffect> {
        self.apply(ListEvent::PageRequested(1))
    }

    pub fn previous_page(&mut self) -> Option<FetchEffect> {
        self.apply(ListEvent::PageRequested(self.query.page - 1))
    }

    pub fn next_page(&mut self) -> Option<FetchEffect> {
        self.apply(ListEvent::PageRequested(self.query.page + 1))
    }

    pub fn last_page(&mut self) -> Option<FetchEffect> {
        self.apply(ListEvent::PageRequested(self.total_pages()))
    }

    fn start_fetch(&mut self) -> FetchEffect {
        self.seq += 1;
        self.state = ListState::Loading;
        FetchEffect {
            seq: self.seq,
            query: self.query.clone(),
        }
    }
}
