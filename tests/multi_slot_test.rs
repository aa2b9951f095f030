//! Integration tests for multi-slot resolution and sibling annotation.

mod helpers;

use std::sync::Arc;

use datahub_plugin::bundle::SIBLING_NAMES_PROP;
use datahub_plugin::registry::{GlobalSlotRegistry, RegistryValue};
use datahub_plugin::resolve_multi_slot;
use datahub_plugin::slots::SlotName;
use datahub_ui::{Component, FnComponent, Node, Props};

use helpers::{make_bundle, marker_component, publish};

/// A component that renders its sibling-name list, or a marker when the
/// prop was not injected.
fn sibling_probe() -> RegistryValue {
    RegistryValue::component(Arc::new(FnComponent::new("SiblingProbe", |props: &Props| {
        match props.get_string_list(SIBLING_NAMES_PROP) {
            Some(names) => Node::text(names.join(",")),
            None => Node::text("<no siblings prop>"),
        }
    })))
}

fn render_all(components: &[Arc<dyn Component>]) -> Vec<String> {
    components
        .iter()
        .map(|c| c.render(&Props::new()).text_content())
        .collect()
}

#[test]
fn test_invalid_members_are_dropped_and_survivors_see_each_other() {
    let registry = GlobalSlotRegistry::new();
    publish(
        &registry,
        SlotName::ExtraVisualisationSection,
        RegistryValue::group([
            ("a".to_string(), sibling_probe()),
            ("b".to_string(), RegistryValue::Text("broken".to_string())),
            ("c".to_string(), sibling_probe()),
        ]),
    );

    let bundle = make_bundle();
    let sections =
        resolve_multi_slot(&registry, SlotName::ExtraVisualisationSection, &bundle).unwrap();

    assert_eq!(sections.len(), 2);
    // Both survivors see the filtered sibling list, in registration order.
    assert_eq!(render_all(&sections), ["a,c", "a,c"]);
}

#[test]
fn test_sibling_order_follows_registration_order() {
    let registry = GlobalSlotRegistry::new();
    publish(
        &registry,
        SlotName::ExtraVisualisationSection,
        RegistryValue::group([
            ("zeta".to_string(), sibling_probe()),
            ("alpha".to_string(), sibling_probe()),
        ]),
    );

    let bundle = make_bundle();
    let sections =
        resolve_multi_slot(&registry, SlotName::ExtraVisualisationSection, &bundle).unwrap();
    assert_eq!(render_all(&sections), ["zeta,alpha", "zeta,alpha"]);
}

#[test]
fn test_lone_candidate_gets_no_sibling_annotation() {
    let registry = GlobalSlotRegistry::new();
    publish(&registry, SlotName::ExtraVisualisationSection, sibling_probe());

    let bundle = make_bundle();
    let sections =
        resolve_multi_slot(&registry, SlotName::ExtraVisualisationSection, &bundle).unwrap();

    assert_eq!(sections.len(), 1);
    assert_eq!(render_all(&sections), ["<no siblings prop>"]);
}

#[test]
fn test_module_wrapped_members_unwrap_like_single_slots() {
    let registry = GlobalSlotRegistry::new();
    publish(
        &registry,
        SlotName::ExtraVisualisationSection,
        RegistryValue::group([
            (
                "wrapped".to_string(),
                RegistryValue::module(marker_component("from module")),
            ),
            ("direct".to_string(), marker_component("direct")),
        ]),
    );

    let bundle = make_bundle();
    let sections =
        resolve_multi_slot(&registry, SlotName::ExtraVisualisationSection, &bundle).unwrap();
    assert_eq!(render_all(&sections), ["from module", "direct"]);
}

#[test]
fn test_non_object_non_component_entry_yields_nothing() {
    let bundle = make_bundle();

    for bad in [
        RegistryValue::Number(17.0),
        RegistryValue::Text("oops".to_string()),
        RegistryValue::Null,
    ] {
        let registry = GlobalSlotRegistry::new();
        publish(&registry, SlotName::ExtraVisualisationSection, bad);
        assert!(
            resolve_multi_slot(&registry, SlotName::ExtraVisualisationSection, &bundle).is_none()
        );
    }
}

#[test]
fn test_group_with_only_invalid_members_yields_nothing() {
    let registry = GlobalSlotRegistry::new();
    publish(
        &registry,
        SlotName::ExtraVisualisationSection,
        RegistryValue::group([
            ("a".to_string(), RegistryValue::Null),
            ("b".to_string(), RegistryValue::Number(1.0)),
        ]),
    );

    let bundle = make_bundle();
    assert!(resolve_multi_slot(&registry, SlotName::ExtraVisualisationSection, &bundle).is_none());
}

#[test]
fn test_multi_resolution_is_structurally_idempotent() {
    let registry = GlobalSlotRegistry::new();
    publish(
        &registry,
        SlotName::ExtraVisualisationSection,
        RegistryValue::group([
            ("a".to_string(), sibling_probe()),
            ("b".to_string(), sibling_probe()),
        ]),
    );

    let bundle = make_bundle();
    let first =
        resolve_multi_slot(&registry, SlotName::ExtraVisualisationSection, &bundle).unwrap();
    let second =
        resolve_multi_slot(&registry, SlotName::ExtraVisualisationSection, &bundle).unwrap();
    assert_eq!(render_all(&first), render_all(&second));
}
