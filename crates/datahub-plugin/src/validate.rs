//! Element validation — the first line of defense against malformed
//! plugin exports.

use datahub_ui::ComponentKind;

use crate::registry::RegistryValue;

/// The component shapes the host knows how to mount.
const MOUNTABLE_KINDS: [ComponentKind; 6] = [
    ComponentKind::Function,
    ComponentKind::Memo,
    ComponentKind::ForwardRef,
    ComponentKind::Lazy,
    ComponentKind::ContextWrapper,
    ComponentKind::Class,
];

/// Returns true only if the value is an acceptable mountable unit.
///
/// Strings and null are rejected explicitly: a type system that treats
/// "anything renderable" as valid would accept them, but the host only
/// mounts component types. Instantiated elements, bare data, and group
/// containers are equally not component types.
pub fn is_valid_component(value: &RegistryValue) -> bool {
    match value {
        RegistryValue::Component(component) => MOUNTABLE_KINDS.contains(&component.kind()),
        _ => false,
    }
}
