//! Integration tests for the plugin SDK export helpers.
//!
//! These go through the process-wide registry, so each test owns a
//! distinct slot to stay independent under parallel execution.

mod helpers;

use std::sync::Arc;

use datahub_plugin::registry::GlobalSlotRegistry;
use datahub_plugin::slots::{
    self, FooterSlotProps, HeaderSlotProps, SlotName, VisualisationSlotProps,
};
use datahub_plugin_sdk::exports::{
    clear_slot, export_component, export_default_module, export_group_member,
};
use datahub_ui::{Component, FnComponent, Node};

use helpers::{make_bundle, make_dataset};

fn marker(text: &str) -> Arc<dyn Component> {
    let text = text.to_string();
    Arc::new(FnComponent::new("Marker", move |_| Node::text(text.clone())))
}

#[test]
fn test_export_component_is_found_by_the_typed_accessor() {
    clear_slot(SlotName::Header);
    export_component(SlotName::Header, marker("custom header"));

    let bundle = make_bundle();
    let plugin = slots::header_plugin(GlobalSlotRegistry::global(), &bundle).unwrap();
    let output = plugin.render(&HeaderSlotProps {
        navigation_items: Vec::new(),
    });
    assert_eq!(output.text_content(), "custom header");

    clear_slot(SlotName::Header);
}

#[test]
fn test_export_default_module_resolves_like_a_component() {
    clear_slot(SlotName::Footer);
    export_default_module(SlotName::Footer, marker("custom footer"));

    let bundle = make_bundle();
    let plugin = slots::footer_plugin(GlobalSlotRegistry::global(), &bundle).unwrap();
    let output = plugin.render(&FooterSlotProps { compact: true });
    assert_eq!(output.text_content(), "custom footer");

    clear_slot(SlotName::Footer);
}

#[test]
fn test_group_members_accumulate_in_registration_order() {
    clear_slot(SlotName::ExtraVisualisationSection);
    export_group_member(SlotName::ExtraVisualisationSection, "first", marker("1"));
    export_group_member(SlotName::ExtraVisualisationSection, "second", marker("2"));

    let bundle = make_bundle();
    let sections =
        slots::extra_visualisation_sections(GlobalSlotRegistry::global(), &bundle).unwrap();
    let props = VisualisationSlotProps {
        dataset: make_dataset(),
        distribution_id: None,
    };
    let rendered: Vec<String> = sections
        .iter()
        .map(|section| section.render(&props).text_content())
        .collect();
    assert_eq!(rendered, ["1", "2"]);

    clear_slot(SlotName::ExtraVisualisationSection);
}

#[test]
fn test_clear_slot_removes_the_export() {
    export_component(SlotName::DatasetEditButton, marker("edit"));
    clear_slot(SlotName::DatasetEditButton);

    let bundle = make_bundle();
    assert!(slots::dataset_edit_button(GlobalSlotRegistry::global(), &bundle).is_none());
}
