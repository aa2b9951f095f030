//! DataHub Portal — demo host entry point.
//!
//! Wires the workspace together the way a deployed portal would: load
//! configuration, initialize logging, install compiled-in plugins, build
//! the capability bundle, then resolve and render every extension point.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing_subscriber::{EnvFilter, fmt};
use uuid::Uuid;

use datahub_core::config::PortalConfig;
use datahub_core::{AppError, AppResult};
use datahub_entity::{Dataset, Distribution, NavigationItem, UserSession};
use datahub_plugin::bundle::{CapabilityBundle, HostActions};
use datahub_plugin::registry::GlobalSlotRegistry;
use datahub_plugin::slots::{
    DatasetSlotProps, FooterSlotProps, HeaderSlotProps, VisualisationSlotProps,
    dataset_edit_button, dataset_like_button, extra_visualisation_sections, footer_plugin,
    header_plugin,
};
use datahub_ui::{HostAction, Location, NavigationHistory, Node, RouteMatch};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Portal error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<PortalConfig, AppError> {
    let env = std::env::var("DATAHUB_ENV").unwrap_or_else(|_| "development".to_string());
    PortalConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &PortalConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Demo render pass over every extension point.
async fn run(config: PortalConfig) -> AppResult<()> {
    tracing::info!(
        "Starting {} v{}",
        config.portal.title,
        env!("CARGO_PKG_VERSION")
    );

    if config.plugins.auto_install {
        plugin_social_widgets::install();
    }

    let registry = GlobalSlotRegistry::global();
    let bundle = build_bundle(Arc::new(config));
    let dataset = demo_dataset();

    // Header and footer chrome.
    let nav = HeaderSlotProps {
        navigation_items: vec![
            NavigationItem::new("Datasets", "/datasets"),
            NavigationItem::new("Organisations", "/organisations"),
            NavigationItem::new("About", "/page/about"),
        ],
    };
    match header_plugin(registry, &bundle) {
        Some(header) => mount("Header", header.render(&nav)),
        None => tracing::info!("Header: built-in chrome"),
    }
    match footer_plugin(registry, &bundle) {
        Some(footer) => mount("Footer", footer.render(&FooterSlotProps { compact: false })),
        None => tracing::info!("Footer: built-in chrome"),
    }

    // Dataset page affordances. The edit affordance is gated on an
    // authorization decision resolved upstream of this layer.
    let dataset_props = DatasetSlotProps {
        dataset: dataset.clone(),
    };
    match dataset_edit_button(registry, &bundle) {
        Some(edit) => mount("DatasetEditButton", edit.render(&dataset_props)),
        None if can_edit_datasets(&bundle.user) => {
            tracing::info!("DatasetEditButton: built-in edit button");
        }
        None => tracing::info!("DatasetEditButton: hidden"),
    }
    if let Some(like) = dataset_like_button(registry, &bundle) {
        mount("DatasetLikeButton", like.render(&dataset_props));
    }

    // Distribution preview page.
    let viz_props = VisualisationSlotProps {
        distribution_id: dataset.distributions.first().map(|d| d.id),
        dataset,
    };
    if let Some(sections) = extra_visualisation_sections(registry, &bundle) {
        for section in &sections {
            mount("ExtraVisualisationSection", section.render(&viz_props));
        }
    }

    // Plugins may hold these handles and invoke them later; exercise one.
    bundle.actions.refresh_content.invoke().await?;

    Ok(())
}

fn mount(slot: &str, node: Node) {
    tracing::info!(slot = slot, "Mounted plugin component");
    println!("[{slot}] {}", node.text_content());
}

fn build_bundle(config: Arc<PortalConfig>) -> CapabilityBundle {
    let location = Location::new("/dataset/ds-air-quality");
    CapabilityBundle {
        user: UserSession::anonymous(),
        identity_error: None,
        config,
        history: NavigationHistory::new(location.clone()),
        location,
        route_match: RouteMatch::exact("/dataset/:id").with_param("id", "ds-air-quality"),
        actions: HostActions {
            sign_out: Arc::new(SignOutAction),
            refresh_identity: Arc::new(RefreshIdentityAction),
            refresh_content: Arc::new(RefreshContentAction),
        },
    }
}

/// Authorization decision consumed from the policy engine.
///
/// Policy evaluation happens upstream; by the time the render pass runs
/// the decision is already a plain boolean per capability.
fn can_edit_datasets(user: &UserSession) -> bool {
    user.is_admin || user.has_role("dataset-editor")
}

fn demo_dataset() -> Dataset {
    let now = Utc::now();
    Dataset {
        id: Uuid::new_v4(),
        title: "Air Quality Measurements".to_string(),
        description: "Hourly readings from metropolitan sensors".to_string(),
        publisher: "Bureau of Environment".to_string(),
        issued: now,
        modified: now,
        distributions: vec![Distribution {
            id: Uuid::new_v4(),
            title: "2026 readings".to_string(),
            format: "CSV".to_string(),
            download_url: "https://data.example.org/air-quality-2026.csv".to_string(),
        }],
    }
}

struct SignOutAction;

#[async_trait]
impl HostAction for SignOutAction {
    async fn invoke(&self) -> AppResult<()> {
        tracing::info!("Sign-out requested");
        Ok(())
    }
}

struct RefreshIdentityAction;

#[async_trait]
impl HostAction for RefreshIdentityAction {
    async fn invoke(&self) -> AppResult<()> {
        tracing::info!("Identity refresh requested");
        Ok(())
    }
}

struct RefreshContentAction;

#[async_trait]
impl HostAction for RefreshContentAction {
    async fn invoke(&self) -> AppResult<()> {
        tracing::info!("Content refresh requested");
        Ok(())
    }
}
