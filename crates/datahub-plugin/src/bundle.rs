//! The common capability bundle injected into every resolved plugin.
//!
//! The bundle is assembled from host-wide state and is identical for
//! every slot. It is injected whole: a plugin either receives every
//! field or is not mounted at all.

use std::fmt;
use std::sync::Arc;

use serde_json::{Value, json};

use datahub_core::AppError;
use datahub_core::config::PortalConfig;
use datahub_entity::UserSession;
use datahub_ui::{ActionHandle, Location, NavigationHistory, Props, RouteMatch};

/// Prop key for the identity/session state.
pub const USER_PROP: &str = "user";
/// Prop key for the error from the last identity fetch, if any.
pub const IDENTITY_ERROR_PROP: &str = "identity_error";
/// Prop key for the global portal configuration.
pub const CONFIG_PROP: &str = "config";
/// Prop key for the navigation history handle.
pub const HISTORY_PROP: &str = "history";
/// Prop key for the current location.
pub const LOCATION_PROP: &str = "location";
/// Prop key for the current route match.
pub const ROUTE_MATCH_PROP: &str = "route_match";
/// Prop key for the sign-out action.
pub const SIGN_OUT_PROP: &str = "sign_out";
/// Prop key for the identity refresh action.
pub const REFRESH_IDENTITY_PROP: &str = "refresh_identity";
/// Prop key for the content refresh action.
pub const REFRESH_CONTENT_PROP: &str = "refresh_content";
/// Prop key for the sibling-name list (multi-slot groups only).
pub const SIBLING_NAMES_PROP: &str = "sibling_names";

/// The three invocable host actions exposed to plugins.
///
/// The handles stay stable across renders; execution is the host's
/// responsibility and happens outside this layer.
#[derive(Clone)]
pub struct HostActions {
    /// Signs the current user out.
    pub sign_out: ActionHandle,
    /// Re-fetches the identity/session state.
    pub refresh_identity: ActionHandle,
    /// Re-fetches the content the current page shows.
    pub refresh_content: ActionHandle,
}

impl fmt::Debug for HostActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostActions").finish()
    }
}

/// The fixed set of host-owned capabilities every decorated plugin
/// receives.
#[derive(Clone)]
pub struct CapabilityBundle {
    /// Identity/session state as of the last fetch.
    pub user: UserSession,
    /// Error from the last identity fetch, if it failed.
    pub identity_error: Option<AppError>,
    /// Global portal configuration.
    pub config: Arc<PortalConfig>,
    /// Shared navigation history handle.
    pub history: NavigationHistory,
    /// Current location.
    pub location: Location,
    /// How the current location matched its route.
    pub route_match: RouteMatch,
    /// Invocable host actions.
    pub actions: HostActions,
}

impl fmt::Debug for CapabilityBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapabilityBundle")
            .field("user", &self.user.display_name)
            .field("location", &self.location.pathname)
            .finish()
    }
}

impl CapabilityBundle {
    /// Assembles the injected prop set.
    ///
    /// Always produces the complete bundle; there is no partial form.
    pub fn to_props(&self) -> Props {
        Props::new()
            .with_data(
                USER_PROP,
                serde_json::to_value(&self.user).unwrap_or(Value::Null),
            )
            .with_data(
                IDENTITY_ERROR_PROP,
                match &self.identity_error {
                    Some(err) => json!({ "kind": err.kind, "message": err.message }),
                    None => Value::Null,
                },
            )
            .with_data(
                CONFIG_PROP,
                serde_json::to_value(self.config.as_ref()).unwrap_or(Value::Null),
            )
            .with_history(HISTORY_PROP, self.history.clone())
            .with_data(
                LOCATION_PROP,
                serde_json::to_value(&self.location).unwrap_or(Value::Null),
            )
            .with_data(
                ROUTE_MATCH_PROP,
                serde_json::to_value(&self.route_match).unwrap_or(Value::Null),
            )
            .with_action(SIGN_OUT_PROP, self.actions.sign_out.clone())
            .with_action(REFRESH_IDENTITY_PROP, self.actions.refresh_identity.clone())
            .with_action(REFRESH_CONTENT_PROP, self.actions.refresh_content.clone())
    }
}
