//! Slot registry — where plugin artifacts publish their components.
//!
//! Plugins and host meet in a string-keyed namespace: the key is the
//! fixed prefix plus the slot name, the value is whatever the plugin
//! artifact published there. The registry is an injectable collaborator
//! so tests can resolve against a private map instead of mutating
//! process-wide state.

use std::fmt;
use std::sync::{Arc, LazyLock};

use dashmap::DashMap;
use indexmap::IndexMap;
use tracing::{debug, info};

use datahub_ui::{Component, Node};

use crate::slots::SlotName;

/// Default prefix prepended to slot names when building registry keys.
///
/// External plugin bundles publish under this prefix; self-hosted portals
/// may override it through `PluginSlotConfig::key_prefix`.
pub const DEFAULT_SLOT_KEY_PREFIX: &str = "DataHubPluginComponent";

/// Builds the registry key for a slot.
///
/// Key construction is deterministic: `"<prefix><SlotName>"`.
pub fn slot_key(prefix: &str, slot: SlotName) -> String {
    format!("{prefix}{slot}")
}

/// An untyped value published to the registry by a plugin artifact.
///
/// Nothing about a registry value can be trusted until it passes the
/// element validator: plugins are independently built and may export
/// anything at all under a slot key.
#[derive(Clone)]
pub enum RegistryValue {
    /// An explicit null export.
    Null,
    /// A bare boolean.
    Bool(bool),
    /// A bare number.
    Number(f64),
    /// A bare string. Never mountable, even though it looks renderable.
    Text(String),
    /// Arbitrary structured data that is not a component.
    Data(serde_json::Value),
    /// An already-instantiated element. Not a component type.
    Element(Node),
    /// A component export.
    Component(Arc<dyn Component>),
    /// A module-shaped export wrapping its real candidate in `default`.
    Module {
        /// The module's default export.
        default: Box<RegistryValue>,
    },
    /// A named collection of candidates (multi-slot only).
    Group(IndexMap<String, RegistryValue>),
}

impl RegistryValue {
    /// Wraps a component.
    pub fn component(component: Arc<dyn Component>) -> Self {
        Self::Component(component)
    }

    /// Wraps a candidate in a module-shaped export.
    pub fn module(default: RegistryValue) -> Self {
        Self::Module {
            default: Box::new(default),
        }
    }

    /// Builds a group from named candidates, preserving order.
    pub fn group(members: impl IntoIterator<Item = (String, RegistryValue)>) -> Self {
        Self::Group(members.into_iter().collect())
    }

    /// Returns the component if this value is a component export.
    pub fn as_component(&self) -> Option<&Arc<dyn Component>> {
        match self {
            Self::Component(component) => Some(component),
            _ => None,
        }
    }
}

impl fmt::Debug for RegistryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
            Self::Number(value) => f.debug_tuple("Number").field(value).finish(),
            Self::Text(value) => f.debug_tuple("Text").field(value).finish(),
            Self::Data(value) => f.debug_tuple("Data").field(value).finish(),
            Self::Element(node) => f.debug_tuple("Element").field(node).finish(),
            Self::Component(component) => f
                .debug_tuple("Component")
                .field(&component.name())
                .finish(),
            Self::Module { default } => f.debug_struct("Module").field("default", default).finish(),
            Self::Group(members) => f
                .debug_map()
                .entries(members.iter().map(|(k, v)| (k, v)))
                .finish(),
        }
    }
}

/// Read access to the slot namespace.
///
/// Resolution walks the registry fresh on every call; implementations
/// must treat a returned value as an immutable snapshot.
pub trait SlotRegistry: Send + Sync {
    /// Looks up the value published under a key, if any.
    fn lookup(&self, key: &str) -> Option<RegistryValue>;
}

/// The process-wide slot registry.
///
/// Plugin artifacts populate it as an install-time side effect, before
/// the host attempts resolution. `new()` builds a private instance for
/// tests; [`GlobalSlotRegistry::global`] returns the shared one.
pub struct GlobalSlotRegistry {
    entries: DashMap<String, RegistryValue>,
}

static GLOBAL: LazyLock<GlobalSlotRegistry> = LazyLock::new(GlobalSlotRegistry::new);

impl GlobalSlotRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Returns the process-wide registry.
    pub fn global() -> &'static GlobalSlotRegistry {
        &GLOBAL
    }

    /// Publishes a value under a key, replacing any previous value.
    pub fn publish(&self, key: impl Into<String>, value: RegistryValue) {
        let key = key.into();
        info!(key = %key, "Plugin component published");
        self.entries.insert(key, value);
    }

    /// Removes the value under a key.
    pub fn remove(&self, key: &str) {
        if self.entries.remove(key).is_some() {
            debug!(key = %key, "Registry entry removed");
        }
    }

    /// Returns the number of published entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for GlobalSlotRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotRegistry for GlobalSlotRegistry {
    fn lookup(&self, key: &str) -> Option<RegistryValue> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datahub_ui::FnComponent;

    #[test]
    fn test_slot_key_construction() {
        assert_eq!(
            slot_key(DEFAULT_SLOT_KEY_PREFIX, SlotName::Header),
            "DataHubPluginComponentHeader"
        );
        assert_eq!(
            slot_key("AcmePortal", SlotName::DatasetLikeButton),
            "AcmePortalDatasetLikeButton"
        );
    }

    #[test]
    fn test_publish_and_lookup() {
        let registry = GlobalSlotRegistry::new();
        let key = slot_key(DEFAULT_SLOT_KEY_PREFIX, SlotName::Footer);
        registry.publish(
            key.clone(),
            RegistryValue::component(Arc::new(FnComponent::new("Footer", |_| Node::Empty))),
        );
        assert!(registry.lookup(&key).is_some());
        assert!(registry.lookup("unknown").is_none());
    }

    #[test]
    fn test_publish_replaces() {
        let registry = GlobalSlotRegistry::new();
        registry.publish("k", RegistryValue::Text("old".to_string()));
        registry.publish("k", RegistryValue::Null);
        assert_eq!(registry.len(), 1);
        assert!(matches!(registry.lookup("k"), Some(RegistryValue::Null)));
    }

    #[test]
    fn test_group_preserves_insertion_order() {
        let group = RegistryValue::group([
            ("b".to_string(), RegistryValue::Null),
            ("a".to_string(), RegistryValue::Null),
        ]);
        let RegistryValue::Group(members) = group else {
            panic!("expected group");
        };
        let keys: Vec<&String> = members.keys().collect();
        assert_eq!(keys, ["b", "a"]);
    }
}
