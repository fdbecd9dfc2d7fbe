//! Shared query infrastructure: the [`Query`] trait and [`ListQueryCommon`] fields.

use url::Url;

/// Trait implemented by all list query builders. Provides URL serialization
/// and shared builder methods for pagination and search.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut ListQueryCommon;

    /// Sets the page number (1-indexed). Serialized as the 0-indexed `pageIndex`.
    fn with_page(mut self, page: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().page = page;
        self
    }

    /// Sets the search term. Empty terms are not serialized.
    fn with_search(mut self, search: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common().search = Some(search.to_string());
        self
    }
}

/// Fields shared by all list queries: 1-indexed page and optional search term.
#[derive(Clone, Debug)]
pub struct ListQueryCommon {
    /// Page number (1-indexed). Defaults to 1. The wire parameter is the
    /// 0-indexed `pageIndex`.
    pub page: i64,
    /// Search term. `None` or empty omits the `query` parameter.
    pub search: Option<String>,
}

impl Default for ListQueryCommon {
    fn default() -> ListQueryCommon {
        ListQueryCommon {
            page: 1,
            search: None,
        }
    }
}

impl ListQueryCommon {
    /// Appends `pageIndex` and, when non-empty, `query` to the URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("pageIndex", &(self.page - 1).to_string());
        if let Some(search) = self.search.as_deref() {
            if !search.is_empty() {
                url.query_pairs_mut().append_pair("query", search);
            }
        }
        url
    }
}
