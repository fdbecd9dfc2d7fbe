//! Location stores: the address-bar analog that list views read their query
//! from and write it back to.
//!
//! The views never touch a global location directly; they are handed a
//! [`LocationStore`] so the synchronization logic is testable without one.

use std::path::PathBuf;

/// A query-string location a list view synchronizes with.
///
/// `set_param` rewrites the current query string and records a new history
/// entry, so earlier search/page combinations remain reachable.
pub trait LocationStore {
    /// Reads a parameter from the current query string.
    fn get_param(&self, key: &str) -> Option<String>;

    /// Sets a parameter, replacing any existing value for the key and
    /// leaving other parameters untouched.
    fn set_param(&mut self, key: &str, value: &str);
}

fn read_param(query: &str, key: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

fn write_param(query: &str, key: &str, value: &str) -> String {
    let mut pairs: Vec<(String, String)> = url::form_urlencoded::parse(query.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    match pairs.iter_mut().find(|(k, _)| k == key) {
        Some(pair) => pair.1 = value.to_string(),
        None => pairs.push((key.to_string(), value.to_string())),
    }
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (k, v) in &pairs {
        serializer.append_pair(k, v);
    }
    serializer.finish()
}

/// In-memory location with a history stack, mirroring a browser address bar.
#[derive(Debug)]
pub struct MemoryLocation {
    history: Vec<String>,
}

impl Default for MemoryLocation {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryLocation {
    /// Starts from an empty query string.
    pub fn new() -> Self {
        Self::with_query("")
    }

    /// Starts from an existing query string, e.g. `"search=ana&page=2"`.
    pub fn with_query(query: &str) -> Self {
        Self {
            history: vec![query.to_string()],
        }
    }

    /// The current query string.
    pub fn query(&self) -> &str {
        self.history.last().map(String::as_str).unwrap_or("")
    }

    /// Returns to the previous history entry. No-op at the oldest entry.
    pub fn back(&mut self) -> bool {
        if self.history.len() > 1 {
            self.history.pop();
            true
        } else {
            false
        }
    }
}

impl LocationStore for MemoryLocation {
    fn get_param(&self, key: &str) -> Option<String> {
        read_param(self.query(), key)
    }

    fn set_param(&mut self, key: &str, value: &str) {
        let next = write_param(self.query(), key, value);
        self.history.push(next);
    }
}

/// Location persisted to a state file, so consecutive CLI invocations
/// continue from the same page and search.
#[derive(Debug)]
pub struct FileLocation {
    path: PathBuf,
    query: String,
}

impl FileLocation {
    /// Loads the location from `path`. A missing or unreadable file starts
    /// from an empty location.
    pub fn open(path: PathBuf) -> Self {
        let query = std::fs::read_to_string(&path)
            .map(|s| s.trim().to_string())
            .unwrap_or_default();
        Self { path, query }
    }

    /// The current query string.
    pub fn query(&self) -> &str {
        &self.query
    }
}

impl LocationStore for FileLocation {
    fn get_param(&self, key: &str) -> Option<String> {
        read_param(&self.query, key)
    }

    fn set_param(&mut self, key: &str, value: &str) {
        self.query = write_param(&self.query, key, value);
        if let Err(e) = std::fs::write(&self.path, &self.query) {
            tracing::warn!(
                "Failed to persist location to {}: {}",
                self.path.display(),
                e
            );
        }
    }
}
