//! Navigation primitives: location, route match, and history.

use std::sync::{Arc, RwLock};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A point in the portal's navigable space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Path portion, e.g. `"/dataset/abc"`.
    pub pathname: String,
    /// Query string without the leading `?`.
    #[serde(default)]
    pub search: Option<String>,
    /// Fragment without the leading `#`.
    #[serde(default)]
    pub hash: Option<String>,
}

impl Location {
    /// Creates a location with only a pathname.
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            search: None,
            hash: None,
        }
    }

    /// Sets the query string.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

/// How the current location matched a route pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteMatch {
    /// The route pattern that matched, e.g. `"/dataset/:id"`.
    pub path: String,
    /// Extracted path parameters in declaration order.
    pub params: IndexMap<String, String>,
    /// Whether the match consumed the whole pathname.
    pub is_exact: bool,
}

impl RouteMatch {
    /// Creates an exact match with no parameters.
    pub fn exact(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: IndexMap::new(),
            is_exact: true,
        }
    }

    /// Adds a path parameter.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }
}

/// Shared navigation history handle.
///
/// Clones share the same underlying entry stack, so a handle injected
/// into a plugin component observes (and can drive) the same navigation
/// state as the host.
#[derive(Debug, Clone)]
pub struct NavigationHistory {
    entries: Arc<RwLock<Vec<Location>>>,
}

impl NavigationHistory {
    /// Creates a history with a single initial entry.
    pub fn new(initial: Location) -> Self {
        Self {
            entries: Arc::new(RwLock::new(vec![initial])),
        }
    }

    /// Pushes a new entry.
    pub fn push(&self, location: Location) {
        if let Ok(mut entries) = self.entries.write() {
            entries.push(location);
        }
    }

    /// Replaces the current entry.
    pub fn replace(&self, location: Location) {
        if let Ok(mut entries) = self.entries.write() {
            if let Some(last) = entries.last_mut() {
                *last = location;
            } else {
                entries.push(location);
            }
        }
    }

    /// Returns the current entry.
    pub fn current(&self) -> Location {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.last().cloned())
            .unwrap_or_else(|| Location::new("/"))
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    /// Returns whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether two handles share the same underlying stack.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}
