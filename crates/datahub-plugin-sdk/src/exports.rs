//! Export helpers — how plugins publish components into the registry.
//!
//! All helpers write to the process-wide registry under the default key
//! prefix, which is the convention external plugin bundles follow.

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::info;

use datahub_plugin::registry::{
    DEFAULT_SLOT_KEY_PREFIX, GlobalSlotRegistry, RegistryValue, SlotRegistry, slot_key,
};
use datahub_plugin::slots::SlotName;
use datahub_ui::Component;

/// Publishes a component directly under a slot.
pub fn export_component(slot: SlotName, component: Arc<dyn Component>) {
    info!(slot = %slot, component = component.name(), "Exporting plugin component");
    GlobalSlotRegistry::global().publish(
        slot_key(DEFAULT_SLOT_KEY_PREFIX, slot),
        RegistryValue::component(component),
    );
}

/// Publishes a component wrapped in a module-shaped export.
///
/// Equivalent to [`export_component`] from the host's point of view;
/// bundlers that emit module objects use this form.
pub fn export_default_module(slot: SlotName, component: Arc<dyn Component>) {
    info!(slot = %slot, component = component.name(), "Exporting plugin module");
    GlobalSlotRegistry::global().publish(
        slot_key(DEFAULT_SLOT_KEY_PREFIX, slot),
        RegistryValue::module(RegistryValue::component(component)),
    );
}

/// Publishes a named member into a multi-slot group.
///
/// Creates the group if the slot is empty; replaces the member if the
/// name is already taken. Members keep their registration order, which
/// is also the order the host mounts them in.
pub fn export_group_member(slot: SlotName, member: &str, component: Arc<dyn Component>) {
    info!(slot = %slot, member = member, component = component.name(), "Exporting plugin group member");
    let registry = GlobalSlotRegistry::global();
    let key = slot_key(DEFAULT_SLOT_KEY_PREFIX, slot);

    let mut members = match registry.lookup(&key) {
        Some(RegistryValue::Group(members)) => members,
        // Anything that is not already a group is replaced wholesale.
        _ => IndexMap::new(),
    };
    members.insert(member.to_string(), RegistryValue::component(component));
    registry.publish(key, RegistryValue::Group(members));
}

/// Removes whatever is published under a slot.
///
/// Mainly useful in tests; production registries are populated once and
/// live for the lifetime of the process.
pub fn clear_slot(slot: SlotName) {
    GlobalSlotRegistry::global().remove(&slot_key(DEFAULT_SLOT_KEY_PREFIX, slot));
}
