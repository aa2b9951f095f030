//! The component trait and its concrete forms.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::node::Node;
use crate::props::Props;

/// The shape a mountable unit takes.
///
/// The host mounts plain function components as well as the usual wrapper
/// forms produced by component toolkits. The element validator in the
/// plugin layer only accepts values whose kind appears in this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    /// A plain render function.
    Function,
    /// A memoized wrapper around another component.
    Memo,
    /// A ref-forwarding wrapper.
    ForwardRef,
    /// A lazily loaded component.
    Lazy,
    /// A context consumer/provider wrapper.
    ContextWrapper,
    /// A class-like constructible component.
    Class,
}

impl ComponentKind {
    /// Returns the string name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Function => "function",
            Self::Memo => "memo",
            Self::ForwardRef => "forward_ref",
            Self::Lazy => "lazy",
            Self::ContextWrapper => "context_wrapper",
            Self::Class => "class",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Trait that all mountable units implement.
///
/// Rendering must be a pure function of the props: the host may call it
/// any number of times per render pass and reconciles output structurally,
/// not by identity.
pub trait Component: Send + Sync {
    /// A short name used in logs and debugging output.
    fn name(&self) -> &str;

    /// The component's shape.
    fn kind(&self) -> ComponentKind {
        ComponentKind::Function
    }

    /// Renders the component with the given props.
    fn render(&self, props: &Props) -> Node;
}

/// A closure-backed component.
///
/// The common way to define components in Rust-native plugins: a name, a
/// kind, and a render closure.
#[derive(Clone)]
pub struct FnComponent {
    name: String,
    kind: ComponentKind,
    render_fn: Arc<dyn Fn(&Props) -> Node + Send + Sync>,
}

impl FnComponent {
    /// Creates a function component.
    pub fn new(
        name: impl Into<String>,
        render_fn: impl Fn(&Props) -> Node + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            kind: ComponentKind::Function,
            render_fn: Arc::new(render_fn),
        }
    }

    /// Overrides the component kind, e.g. to model a memo or lazy wrapper.
    pub fn with_kind(mut self, kind: ComponentKind) -> Self {
        self.kind = kind;
        self
    }
}

impl Component for FnComponent {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ComponentKind {
        self.kind
    }

    fn render(&self, props: &Props) -> Node {
        (self.render_fn)(props)
    }
}

impl fmt::Debug for FnComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnComponent")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}
