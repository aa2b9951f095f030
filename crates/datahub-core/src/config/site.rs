//! Portal identity and upstream API configuration.

use serde::{Deserialize, Serialize};

/// Portal identity and upstream API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Human-readable portal title shown in the chrome.
    #[serde(default = "default_title")]
    pub title: String,
    /// Public base URL of the portal.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Base URL of the content API the portal reads from.
    #[serde(default = "default_content_api_url")]
    pub content_api_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            base_url: default_base_url(),
            content_api_url: default_content_api_url(),
        }
    }
}

fn default_title() -> String {
    "DataHub Portal".to_string()
}

fn default_base_url() -> String {
    "http://localhost:6107".to_string()
}

fn default_content_api_url() -> String {
    "http://localhost:6119/api/v0/content".to_string()
}
