//! Slot resolvers — locate, validate, and decorate plugin components.
//!
//! Resolution is synchronous, idempotent, and side-effect free: each call
//! walks the registry fresh and either yields decorated components or
//! nothing. No failure here ever crosses the host/plugin boundary as an
//! error; a misbehaving plugin degrades to an unmounted slot.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, warn};

use datahub_ui::{Component, Props};

use crate::bundle::{CapabilityBundle, SIBLING_NAMES_PROP};
use crate::decorate::with_injected_props;
use crate::registry::{RegistryValue, SlotRegistry, slot_key};
use crate::slots::SlotName;
use crate::validate::is_valid_component;

/// Materializes one raw candidate: default-unwrap, validate, decorate.
///
/// Shared by the single- and multi-slot paths. Returns `None` for any
/// candidate that is not a mountable component.
fn materialize(
    candidate: RegistryValue,
    slot: SlotName,
    bundle: &CapabilityBundle,
) -> Option<Arc<dyn Component>> {
    // Module-shaped exports unwrap to their default, but only when the
    // default itself is mountable; otherwise the module is judged as-is.
    let candidate = match candidate {
        RegistryValue::Module { default } if is_valid_component(&default) => *default,
        other => other,
    };

    if !is_valid_component(&candidate) {
        warn!(slot = %slot, candidate = ?candidate, "Dropping candidate that is not a mountable component");
        return None;
    }

    let component = candidate.as_component()?.clone();
    Some(with_injected_props(component, bundle.to_props()))
}

/// Resolves a single-plugin slot.
///
/// Returns the decorated component, or `None` when the slot is
/// unpopulated or its candidate is malformed. An unmounted slot is a
/// normal, common case, not an error.
pub fn resolve_slot(
    registry: &dyn SlotRegistry,
    slot: SlotName,
    bundle: &CapabilityBundle,
) -> Option<Arc<dyn Component>> {
    let key = slot_key(&bundle.config.plugins.key_prefix, slot);
    let Some(entry) = registry.lookup(&key) else {
        debug!(slot = %slot, key = %key, "No plugin registered for slot");
        return None;
    };

    let resolved = materialize(entry, slot, bundle);
    if resolved.is_some() {
        debug!(slot = %slot, "Resolved slot plugin");
    }
    resolved
}

/// Resolves a slot that may hold one plugin or a named group of plugins.
///
/// A group entry yields every member that survives validation, each
/// additionally annotated with the full list of surviving member names
/// in registration order. A lone candidate yields a one-element sequence
/// with no sibling annotation. Anything else yields `None`.
pub fn resolve_multi_slot(
    registry: &dyn SlotRegistry,
    slot: SlotName,
    bundle: &CapabilityBundle,
) -> Option<Vec<Arc<dyn Component>>> {
    let key = slot_key(&bundle.config.plugins.key_prefix, slot);
    let Some(entry) = registry.lookup(&key) else {
        debug!(slot = %slot, key = %key, "No plugin registered for slot");
        return None;
    };

    let members = match entry {
        RegistryValue::Group(members) => members,
        // Degenerate case: the whole entry is a single candidate.
        single => return materialize(single, slot, bundle).map(|component| vec![component]),
    };

    let mut survivors: Vec<(String, Arc<dyn Component>)> = Vec::new();
    for (name, candidate) in members {
        // Partial registries are expected: failed members are dropped,
        // the rest still mount.
        if let Some(component) = materialize(candidate, slot, bundle) {
            survivors.push((name, component));
        }
    }

    if survivors.is_empty() {
        debug!(slot = %slot, "All candidates in multi-slot group were dropped");
        return None;
    }

    let names: Vec<&String> = survivors.iter().map(|(name, _)| name).collect();
    let sibling_props = Props::new().with_data(SIBLING_NAMES_PROP, json!(names));

    debug!(slot = %slot, count = survivors.len(), "Resolved multi-slot plugins");
    Some(
        survivors
            .into_iter()
            .map(|(_, component)| with_injected_props(component, sibling_props.clone()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;

    use datahub_core::AppResult;
    use datahub_core::config::PortalConfig;
    use datahub_entity::UserSession;
    use datahub_ui::{
        ActionHandle, FnComponent, HostAction, Location, NavigationHistory, Node, RouteMatch,
    };

    use crate::bundle::{HostActions, USER_PROP};
    use crate::registry::GlobalSlotRegistry;

    struct NoopAction;

    #[async_trait]
    impl HostAction for NoopAction {
        async fn invoke(&self) -> AppResult<()> {
            Ok(())
        }
    }

    fn make_bundle() -> CapabilityBundle {
        let noop = || Arc::new(NoopAction) as ActionHandle;
        CapabilityBundle {
            user: UserSession::anonymous(),
            identity_error: None,
            config: Arc::new(PortalConfig::default()),
            history: NavigationHistory::new(Location::new("/")),
            location: Location::new("/"),
            route_match: RouteMatch::exact("/"),
            actions: HostActions {
                sign_out: noop(),
                refresh_identity: noop(),
                refresh_content: noop(),
            },
        }
    }

    fn marker_component(marker: &str) -> RegistryValue {
        let marker = marker.to_string();
        RegistryValue::component(Arc::new(FnComponent::new("Marker", move |_| {
            Node::text(marker.clone())
        })))
    }

    fn publish(registry: &GlobalSlotRegistry, slot: SlotName, value: RegistryValue) {
        let bundle = make_bundle();
        registry.publish(slot_key(&bundle.config.plugins.key_prefix, slot), value);
    }

    #[test]
    fn test_absent_slot_resolves_to_none() {
        let registry = GlobalSlotRegistry::new();
        let bundle = make_bundle();
        assert!(resolve_slot(&registry, SlotName::Header, &bundle).is_none());
        assert!(
            resolve_multi_slot(&registry, SlotName::ExtraVisualisationSection, &bundle).is_none()
        );
    }

    #[test]
    fn test_module_default_unwrap_is_transparent() {
        let direct = GlobalSlotRegistry::new();
        publish(&direct, SlotName::Footer, marker_component("footer"));

        let wrapped = GlobalSlotRegistry::new();
        publish(
            &wrapped,
            SlotName::Footer,
            RegistryValue::module(marker_component("footer")),
        );

        let bundle = make_bundle();
        let a = resolve_slot(&direct, SlotName::Footer, &bundle).unwrap();
        let b = resolve_slot(&wrapped, SlotName::Footer, &bundle).unwrap();
        assert_eq!(
            a.render(&Props::new()).text_content(),
            b.render(&Props::new()).text_content()
        );
    }

    #[test]
    fn test_module_with_invalid_default_resolves_to_none() {
        let registry = GlobalSlotRegistry::new();
        publish(
            &registry,
            SlotName::Footer,
            RegistryValue::module(RegistryValue::Text("not a component".to_string())),
        );
        assert!(resolve_slot(&registry, SlotName::Footer, &make_bundle()).is_none());
    }

    #[test]
    fn test_resolved_component_receives_bundle_props() {
        let registry = GlobalSlotRegistry::new();
        publish(
            &registry,
            SlotName::Header,
            RegistryValue::component(Arc::new(FnComponent::new("WhoAmI", |props| {
                let user = props.get_data(USER_PROP).cloned().unwrap_or_default();
                Node::text(user["display_name"].as_str().unwrap_or("?"))
            }))),
        );
        let component = resolve_slot(&registry, SlotName::Header, &make_bundle()).unwrap();
        assert_eq!(component.render(&Props::new()).text_content(), "Anonymous");
    }

    #[test]
    fn test_custom_key_prefix_is_honored() {
        let registry = GlobalSlotRegistry::new();
        registry.publish("AcmePortalHeader", marker_component("acme"));

        let mut config = PortalConfig::default();
        config.plugins.key_prefix = "AcmePortal".to_string();
        let mut bundle = make_bundle();
        bundle.config = Arc::new(config);

        let component = resolve_slot(&registry, SlotName::Header, &bundle).unwrap();
        assert_eq!(component.render(&Props::new()).text_content(), "acme");
        // The default prefix no longer matches.
        assert!(resolve_slot(&registry, SlotName::Header, &make_bundle()).is_none());
    }

    #[test]
    fn test_degenerate_multi_slot_single_candidate() {
        let registry = GlobalSlotRegistry::new();
        publish(
            &registry,
            SlotName::ExtraVisualisationSection,
            marker_component("solo"),
        );
        let bundle = make_bundle();
        let sections =
            resolve_multi_slot(&registry, SlotName::ExtraVisualisationSection, &bundle).unwrap();
        assert_eq!(sections.len(), 1);
    }

    #[test]
    fn test_multi_slot_rejects_non_group_non_component() {
        let registry = GlobalSlotRegistry::new();
        publish(
            &registry,
            SlotName::ExtraVisualisationSection,
            RegistryValue::Number(7.0),
        );
        let bundle = make_bundle();
        assert!(
            resolve_multi_slot(&registry, SlotName::ExtraVisualisationSection, &bundle).is_none()
        );
    }

    #[test]
    fn test_empty_group_after_filtering_resolves_to_none() {
        let registry = GlobalSlotRegistry::new();
        publish(
            &registry,
            SlotName::ExtraVisualisationSection,
            RegistryValue::group([
                ("a".to_string(), RegistryValue::Null),
                ("b".to_string(), RegistryValue::Text("nope".to_string())),
            ]),
        );
        let bundle = make_bundle();
        assert!(
            resolve_multi_slot(&registry, SlotName::ExtraVisualisationSection, &bundle).is_none()
        );
    }
}
