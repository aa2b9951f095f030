//! Navigation menu entities.

use serde::{Deserialize, Serialize};

/// A single entry in the portal's navigation menu.
///
/// The host assembles the menu from content configuration and passes it
/// to the header slot; header plugins render it however they like.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationItem {
    /// Label shown to the user.
    pub label: String,
    /// Target URL or path.
    pub href: String,
    /// Sort order (lower = further left).
    #[serde(default)]
    pub order: i32,
    /// Whether the entry is only shown to signed-in users.
    #[serde(default)]
    pub auth_required: bool,
}

impl NavigationItem {
    /// Creates a navigation item with default ordering.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            order: 0,
            auth_required: false,
        }
    }
}
