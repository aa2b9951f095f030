//! # plugin-social-widgets
//!
//! Sample DataHub Portal plugin. Publishes:
//!
//! - a like button for the dataset page
//! - two extra visualisation sections for the distribution preview page
//!
//! In a deployed portal these exports would happen as the plugin
//! bundle's load-time side effect; compiled-in plugins call [`install`]
//! from the host's startup path instead.

pub mod components;

use datahub_plugin_sdk::prelude::*;
use tracing::info;

use crate::components::LikeButton;

/// Publishes every component this plugin provides.
pub fn install() {
    export_component(SlotName::DatasetLikeButton, Arc::new(LikeButton));

    export_group_member(
        SlotName::ExtraVisualisationSection,
        "downloads_chart",
        components::downloads_chart(),
    );
    export_group_member(
        SlotName::ExtraVisualisationSection,
        "ratings_chart",
        components::ratings_chart(),
    );

    info!("social-widgets plugin installed");
}
