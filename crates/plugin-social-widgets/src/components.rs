//! The components this plugin exports.

use std::sync::Arc;

use datahub_entity::{Dataset, UserSession};
use datahub_plugin::bundle::{SIBLING_NAMES_PROP, USER_PROP};
use datahub_ui::{Component, FnComponent, Node, Props};

/// Like button mounted next to the built-in dataset page controls.
///
/// Anonymous visitors see the button disabled; the host injects the
/// session state, the page supplies the dataset.
#[derive(Debug)]
pub struct LikeButton;

impl Component for LikeButton {
    fn name(&self) -> &str {
        "LikeButton"
    }

    fn render(&self, props: &Props) -> Node {
        let title = props
            .get_typed::<Dataset>("dataset")
            .map(|dataset| dataset.title)
            .unwrap_or_else(|| "this dataset".to_string());
        let signed_in = props
            .get_typed::<UserSession>(USER_PROP)
            .map(|user| user.authenticated)
            .unwrap_or(false);

        Node::element("button")
            .with_attr("class", "like-button")
            .with_attr("disabled", (!signed_in).to_string())
            .with_child(Node::text(format!("♥ Like {title}")))
            .build()
    }
}

fn section(name: &'static str, heading: &'static str) -> Arc<dyn Component> {
    Arc::new(FnComponent::new(name, move |props| {
        let title = props
            .get_typed::<Dataset>("dataset")
            .map(|dataset| dataset.title)
            .unwrap_or_default();
        let siblings = props
            .get_string_list(SIBLING_NAMES_PROP)
            .unwrap_or_default()
            .join(", ");

        Node::element("section")
            .with_attr("class", "viz-section")
            .with_child(Node::text(format!("{heading}: {title}")))
            .with_child(Node::text(format!(" [mounted with: {siblings}]")))
            .build()
    }))
}

/// Chart of download counts over time for the previewed distribution.
pub fn downloads_chart() -> Arc<dyn Component> {
    section("DownloadsChart", "Downloads")
}

/// Chart of community ratings for the dataset.
pub fn ratings_chart() -> Arc<dyn Component> {
    section("RatingsChart", "Ratings")
}
