//! Plugin slot configuration.

use serde::{Deserialize, Serialize};

/// Plugin slot settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginSlotConfig {
    /// Prefix prepended to slot names when building registry keys.
    ///
    /// External plugin bundles must publish their components under the
    /// same prefix; changing it is only useful for self-hosted portals
    /// that rebuild their plugins.
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
    /// Whether to install compiled-in plugins on startup.
    #[serde(default = "default_true")]
    pub auto_install: bool,
}

impl Default for PluginSlotConfig {
    fn default() -> Self {
        Self {
            key_prefix: default_key_prefix(),
            auto_install: default_true(),
        }
    }
}

fn default_key_prefix() -> String {
    "DataHubPluginComponent".to_string()
}

fn default_true() -> bool {
    true
}
