//! Convenience macros for plugin development.

/// Macro for defining a closure-backed component as a shareable handle.
///
/// # Example
/// ```rust,ignore
/// let button = component_fn!("LikeButton", |props| {
///     Node::text(format!("♥ {}", props.get_str("user").unwrap_or("?")))
/// });
/// export_component(SlotName::DatasetLikeButton, button);
/// ```
#[macro_export]
macro_rules! component_fn {
    ($name:expr, |$props:ident| $body:expr) => {
        std::sync::Arc::new($crate::prelude::FnComponent::new(
            $name,
            move |$props: &$crate::prelude::Props| $body,
        )) as std::sync::Arc<dyn $crate::prelude::Component>
    };
    ($name:expr, $kind:expr, |$props:ident| $body:expr) => {
        std::sync::Arc::new(
            $crate::prelude::FnComponent::new($name, move |$props: &$crate::prelude::Props| $body)
                .with_kind($kind),
        ) as std::sync::Arc<dyn $crate::prelude::Component>
    };
}
