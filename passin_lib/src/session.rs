//! Binds a list view to a location store and the remote fetcher.

use passin_api::types::ListResult;
use passin_api::Error;

use crate::list::{FetchEffect, ListEvent, ListQuery, ListView};
use crate::location::LocationStore;

/// Query-string parameter holding the search term.
pub const PARAM_SEARCH: &str = "search";
/// Query-string parameter holding the 1-indexed page.
pub const PARAM_PAGE: &str = "page";

/// A list view bound to a location store.
///
/// Accepted search and page changes are written back to the location, one
/// history entry per change, so a later session over the same location
/// resumes exactly where this one left off.
pub struct ListSession<T, L: LocationStore> {
    view: ListView<T>,
    location: L,
    pending: Option<FetchEffect>,
}

impl<T, L: LocationStore> ListSession<T, L> {
    /// Creates a session from the location's current `search` and `page`
    /// parameters. A missing, unparseable, or non-positive `page` defaults
    /// to 1; the initial fetch is pending immediately.
    pub fn mount(location: L) -> Self {
        let search = location.get_param(PARAM_SEARCH).unwrap_or_default();
        let page = location
            .get_param(PARAM_PAGE)
            .and_then(|p| p.parse::<i64>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1);
        let (view, effect) = ListView::new(ListQuery { search, page });
        Self {
            view,
            location,
            pending: Some(effect),
        }
    }

    pub fn view(&self) -> &ListView<T> {
        &self.view
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn into_location(self) -> L {
        self.location
    }

    /// Takes the fetch effect produced by the most recent transition, if any.
    pub fn take_pending_fetch(&mut self) -> Option<FetchEffect> {
        self.pending.take()
    }

    /// Sets the search term, resetting the page to 1 and recording both in
    /// the location. Re-setting the current term is a no-op.
    pub fn set_search(&mut self, search: &str) {
        if let Some(effect) = self.view.apply(ListEvent::SearchChanged(search.to_string())) {
            self.location.set_param(PARAM_SEARCH, search);
            self.location.set_param(PARAM_PAGE, "1");
            self.pending = Some(effect);
        }
    }

    /// Requests a specific page. Out-of-range requests are rejected and
    /// leave the location untouched.
    pub fn go_to_page(&mut self, page: i64) {
        if let Some(effect) = self.view.apply(ListEvent::PageRequested(page)) {
            self.location.set_param(PARAM_PAGE, &page.to_string());
            self.pending = Some(effect);
        }
    }

    pub fn first_page(&mut self) {
        self.go_to_page(1);
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.view.query().page - 1);
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.view.query().page + 1);
    }

    pub fn last_page(&mut self) {
        self.go_to_page(self.view.total_pages());
    }

    /// Applies a settled fetch. Responses from superseded fetches are
    /// discarded.
    pub fn finish_fetch(&mut self, seq: u64, outcome: Result<ListResult<T>, Error>) {
        self.view.apply(ListEvent::FetchSettled { seq, outcome });
    }
}
