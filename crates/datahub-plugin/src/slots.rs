//! Slot name vocabulary and typed slot accessors.
//!
//! Each extension point gets a narrow, self-documenting accessor that
//! fixes its caller-supplied prop contract on top of the common
//! capability bundle, so a page cannot accidentally fetch the wrong
//! plugin kind.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use datahub_entity::{Dataset, NavigationItem};
use datahub_ui::{Component, Node, Props};

use crate::bundle::CapabilityBundle;
use crate::registry::SlotRegistry;
use crate::resolver::{resolve_multi_slot, resolve_slot};

/// Enumeration of all extension points in the portal.
///
/// The vocabulary is host-defined and fixed; one slot supports at most
/// one kind of plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotName {
    /// The page header, replacing the built-in chrome.
    Header,
    /// The page footer.
    Footer,
    /// An action button on the dataset page next to the built-in controls.
    DatasetEditButton,
    /// A social/bookmark button on the dataset page.
    DatasetLikeButton,
    /// Additional visualisation sections on the distribution preview page.
    /// The only slot that accepts several plugins at once.
    ExtraVisualisationSection,
}

impl SlotName {
    /// All known slots, in page order.
    pub const ALL: [SlotName; 5] = [
        Self::Header,
        Self::Footer,
        Self::DatasetEditButton,
        Self::DatasetLikeButton,
        Self::ExtraVisualisationSection,
    ];

    /// Returns the slot's name as it appears in registry keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Header => "Header",
            Self::Footer => "Footer",
            Self::DatasetEditButton => "DatasetEditButton",
            Self::DatasetLikeButton => "DatasetLikeButton",
            Self::ExtraVisualisationSection => "ExtraVisualisationSection",
        }
    }

    /// Returns whether the slot accepts several simultaneous plugins.
    pub fn is_multi(&self) -> bool {
        matches!(self, Self::ExtraVisualisationSection)
    }
}

impl fmt::Display for SlotName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ── Slot-specific caller props ─────────────────────────────

/// Caller-supplied props for the header slot.
#[derive(Debug, Clone)]
pub struct HeaderSlotProps {
    /// Navigation menu entries assembled by the host.
    pub navigation_items: Vec<NavigationItem>,
}

impl HeaderSlotProps {
    /// Converts to the generic prop set passed at render time.
    pub fn to_props(&self) -> Props {
        Props::new().with_data(
            "navigation_items",
            serde_json::to_value(&self.navigation_items).unwrap_or(Value::Null),
        )
    }
}

/// Caller-supplied props for the footer slot.
#[derive(Debug, Clone)]
pub struct FooterSlotProps {
    /// Whether the page wants the condensed footer variant.
    pub compact: bool,
}

impl FooterSlotProps {
    /// Converts to the generic prop set passed at render time.
    pub fn to_props(&self) -> Props {
        Props::new().with_bool("compact", self.compact)
    }
}

/// Caller-supplied props for dataset-scoped button slots.
#[derive(Debug, Clone)]
pub struct DatasetSlotProps {
    /// The dataset the current page shows.
    pub dataset: Dataset,
}

impl DatasetSlotProps {
    /// Converts to the generic prop set passed at render time.
    pub fn to_props(&self) -> Props {
        Props::new().with_data(
            "dataset",
            serde_json::to_value(&self.dataset).unwrap_or(Value::Null),
        )
    }
}

/// Caller-supplied props for the extra visualisation slot.
#[derive(Debug, Clone)]
pub struct VisualisationSlotProps {
    /// The dataset the current page shows.
    pub dataset: Dataset,
    /// The distribution being previewed, if any.
    pub distribution_id: Option<Uuid>,
}

impl VisualisationSlotProps {
    /// Converts to the generic prop set passed at render time.
    pub fn to_props(&self) -> Props {
        Props::new()
            .with_data(
                "dataset",
                serde_json::to_value(&self.dataset).unwrap_or(Value::Null),
            )
            .with_data(
                "distribution_id",
                self.distribution_id
                    .map(|id| Value::String(id.to_string()))
                    .unwrap_or(Value::Null),
            )
    }
}

// ── Typed plugin handles ───────────────────────────────────

/// A resolved header plugin, ready to mount.
#[derive(Clone)]
pub struct HeaderPlugin {
    component: Arc<dyn Component>,
}

impl HeaderPlugin {
    /// Renders the plugin with the header's caller props.
    pub fn render(&self, props: &HeaderSlotProps) -> Node {
        self.component.render(&props.to_props())
    }

    /// The underlying decorated component.
    pub fn component(&self) -> &Arc<dyn Component> {
        &self.component
    }
}

/// A resolved footer plugin, ready to mount.
#[derive(Clone)]
pub struct FooterPlugin {
    component: Arc<dyn Component>,
}

impl FooterPlugin {
    /// Renders the plugin with the footer's caller props.
    pub fn render(&self, props: &FooterSlotProps) -> Node {
        self.component.render(&props.to_props())
    }

    /// The underlying decorated component.
    pub fn component(&self) -> &Arc<dyn Component> {
        &self.component
    }
}

/// A resolved dataset-scoped button plugin, ready to mount.
#[derive(Clone)]
pub struct DatasetButtonPlugin {
    component: Arc<dyn Component>,
}

impl DatasetButtonPlugin {
    /// Renders the plugin with the dataset page's caller props.
    pub fn render(&self, props: &DatasetSlotProps) -> Node {
        self.component.render(&props.to_props())
    }

    /// The underlying decorated component.
    pub fn component(&self) -> &Arc<dyn Component> {
        &self.component
    }
}

/// A resolved extra visualisation section, ready to mount.
#[derive(Clone)]
pub struct VisualisationSectionPlugin {
    component: Arc<dyn Component>,
}

impl VisualisationSectionPlugin {
    /// Renders the section with the preview page's caller props.
    pub fn render(&self, props: &VisualisationSlotProps) -> Node {
        self.component.render(&props.to_props())
    }

    /// The underlying decorated component.
    pub fn component(&self) -> &Arc<dyn Component> {
        &self.component
    }
}

// ── Accessors ──────────────────────────────────────────────

/// Resolves the header plugin, if one is installed.
pub fn header_plugin(
    registry: &dyn SlotRegistry,
    bundle: &CapabilityBundle,
) -> Option<HeaderPlugin> {
    resolve_slot(registry, SlotName::Header, bundle).map(|component| HeaderPlugin { component })
}

/// Resolves the footer plugin, if one is installed.
pub fn footer_plugin(
    registry: &dyn SlotRegistry,
    bundle: &CapabilityBundle,
) -> Option<FooterPlugin> {
    resolve_slot(registry, SlotName::Footer, bundle).map(|component| FooterPlugin { component })
}

/// Resolves the dataset edit button plugin, if one is installed.
pub fn dataset_edit_button(
    registry: &dyn SlotRegistry,
    bundle: &CapabilityBundle,
) -> Option<DatasetButtonPlugin> {
    resolve_slot(registry, SlotName::DatasetEditButton, bundle)
        .map(|component| DatasetButtonPlugin { component })
}

/// Resolves the dataset like button plugin, if one is installed.
pub fn dataset_like_button(
    registry: &dyn SlotRegistry,
    bundle: &CapabilityBundle,
) -> Option<DatasetButtonPlugin> {
    resolve_slot(registry, SlotName::DatasetLikeButton, bundle)
        .map(|component| DatasetButtonPlugin { component })
}

/// Resolves all installed extra visualisation sections.
///
/// Each surviving section sees the full sibling-name list through its
/// injected props.
pub fn extra_visualisation_sections(
    registry: &dyn SlotRegistry,
    bundle: &CapabilityBundle,
) -> Option<Vec<VisualisationSectionPlugin>> {
    resolve_multi_slot(registry, SlotName::ExtraVisualisationSection, bundle).map(|components| {
        components
            .into_iter()
            .map(|component| VisualisationSectionPlugin { component })
            .collect()
    })
}
