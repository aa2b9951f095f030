//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod logging;
pub mod plugins;
pub mod site;

use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;
use self::plugins::PluginSlotConfig;
use self::site::SiteConfig;

use crate::error::AppError;

/// Root portal configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay). It is
/// also the "global configuration" value injected into every resolved
/// plugin component, so everything in it must be serializable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Portal identity and upstream API settings.
    #[serde(default)]
    pub portal: SiteConfig,
    /// Plugin slot settings.
    #[serde(default)]
    pub plugins: PluginSlotConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            portal: SiteConfig::default(),
            plugins: PluginSlotConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl PortalConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `DATAHUB__`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("DATAHUB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
