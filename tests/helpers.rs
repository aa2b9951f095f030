//! Shared test helpers for integration tests.
#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use datahub_core::AppResult;
use datahub_core::config::PortalConfig;
use datahub_entity::{Dataset, Distribution, UserSession};
use datahub_plugin::bundle::{CapabilityBundle, HostActions};
use datahub_plugin::registry::{
    DEFAULT_SLOT_KEY_PREFIX, GlobalSlotRegistry, RegistryValue, slot_key,
};
use datahub_plugin::slots::SlotName;
use datahub_ui::{
    ActionHandle, Component, FnComponent, HostAction, Location, NavigationHistory, Node, Props,
    RouteMatch,
};

/// Action stub that counts invocations.
#[derive(Default)]
pub struct CountingAction {
    calls: AtomicUsize,
}

impl CountingAction {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HostAction for CountingAction {
    async fn invoke(&self) -> AppResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Builds a capability bundle for a signed-in test user.
pub fn make_bundle() -> CapabilityBundle {
    let noop = || Arc::new(CountingAction::default()) as ActionHandle;
    let location = Location::new("/dataset/abc");
    CapabilityBundle {
        user: UserSession {
            id: Uuid::new_v4(),
            display_name: "Dana Tester".to_string(),
            roles: vec!["dataset-editor".to_string()],
            authenticated: true,
            is_admin: false,
            fetched_at: Utc::now(),
        },
        identity_error: None,
        config: Arc::new(PortalConfig::default()),
        history: NavigationHistory::new(location.clone()),
        location,
        route_match: RouteMatch::exact("/dataset/:id").with_param("id", "abc"),
        actions: HostActions {
            sign_out: noop(),
            refresh_identity: noop(),
            refresh_content: noop(),
        },
    }
}

/// Publishes a value under a slot's default registry key.
pub fn publish(registry: &GlobalSlotRegistry, slot: SlotName, value: RegistryValue) {
    registry.publish(slot_key(DEFAULT_SLOT_KEY_PREFIX, slot), value);
}

/// A component that renders a fixed marker string.
pub fn marker_component(marker: &str) -> RegistryValue {
    let marker = marker.to_string();
    RegistryValue::component(Arc::new(FnComponent::new("Marker", move |_| {
        Node::text(marker.clone())
    })))
}

/// A component that echoes one string prop into its output.
pub fn echo_component(key: &'static str) -> Arc<dyn Component> {
    Arc::new(FnComponent::new("Echo", move |props: &Props| {
        Node::text(props.get_str(key).unwrap_or("<missing>"))
    }))
}

/// A dataset fixture.
pub fn make_dataset() -> Dataset {
    Dataset {
        id: Uuid::new_v4(),
        title: "Air Quality Measurements".to_string(),
        description: "Hourly sensor readings".to_string(),
        publisher: "Bureau of Environment".to_string(),
        issued: Utc::now(),
        modified: Utc::now(),
        distributions: vec![Distribution {
            id: Uuid::new_v4(),
            title: "2026 readings".to_string(),
            format: "CSV".to_string(),
            download_url: "https://example.org/air.csv".to_string(),
        }],
    }
}
