//! # datahub-ui
//!
//! The host rendering model for DataHub Portal. Provides:
//!
//! - [`Node`] — the render output tree
//! - [`Props`] / [`PropValue`] — the flexible prop set passed to components
//! - [`Component`] — the trait every mountable unit implements
//! - [`HostAction`] — async host actions exposed to components as props
//! - Navigation primitives: [`Location`], [`RouteMatch`], [`NavigationHistory`]
//!
//! The plugin resolution layer (`datahub-plugin`) builds on these types;
//! this crate knows nothing about slots or registries.

pub mod action;
pub mod component;
pub mod navigation;
pub mod node;
pub mod props;

pub use action::{ActionHandle, HostAction};
pub use component::{Component, ComponentKind, FnComponent};
pub use navigation::{Location, NavigationHistory, RouteMatch};
pub use node::{Element, Node};
pub use props::{PropValue, Props};
