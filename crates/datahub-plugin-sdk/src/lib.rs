//! # datahub-plugin-sdk
//!
//! SDK for developing UI plugins for DataHub Portal.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use datahub_plugin_sdk::prelude::*;
//!
//! pub fn install() {
//!     export_component(
//!         SlotName::DatasetLikeButton,
//!         component_fn!("LikeButton", |props| {
//!             Node::text(format!(
//!                 "♥ {}",
//!                 props.get_str("user").unwrap_or("anonymous")
//!             ))
//!         }),
//!     );
//! }
//! ```
//!
//! Plugins publish components into the process-wide slot registry as an
//! install-time side effect; the host resolves, validates, and decorates
//! them when it renders the page.

pub mod exports;
pub mod macros;

/// Prelude for convenient imports.
pub mod prelude {
    pub use std::sync::Arc;

    pub use datahub_plugin::bundle::{
        CONFIG_PROP, HISTORY_PROP, IDENTITY_ERROR_PROP, LOCATION_PROP, REFRESH_CONTENT_PROP,
        REFRESH_IDENTITY_PROP, ROUTE_MATCH_PROP, SIBLING_NAMES_PROP, SIGN_OUT_PROP, USER_PROP,
    };
    pub use datahub_plugin::slots::SlotName;
    pub use datahub_ui::{Component, ComponentKind, Element, FnComponent, Node, PropValue, Props};

    pub use crate::component_fn;
    pub use crate::exports::{
        clear_slot, export_component, export_default_module, export_group_member,
    };
}
