//! User session / identity entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The identity state of the current portal visitor.
///
/// This is the host's view of "who am I" as of the last identity fetch.
/// Anonymous visitors get a session too, with `authenticated == false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    /// Unique user identifier (nil for anonymous visitors).
    pub id: Uuid,
    /// Display name shown in the UI.
    pub display_name: String,
    /// Role identifiers assigned to the user.
    pub roles: Vec<String>,
    /// Whether the visitor is signed in.
    pub authenticated: bool,
    /// Whether the user holds the portal admin role.
    pub is_admin: bool,
    /// When this identity state was last fetched.
    pub fetched_at: DateTime<Utc>,
}

impl UserSession {
    /// Creates the session state for an anonymous visitor.
    pub fn anonymous() -> Self {
        Self {
            id: Uuid::nil(),
            display_name: "Anonymous".to_string(),
            roles: Vec::new(),
            authenticated: false,
            is_admin: false,
            fetched_at: Utc::now(),
        }
    }

    /// Checks whether the user holds a given role.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}
