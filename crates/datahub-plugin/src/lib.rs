//! # datahub-plugin
//!
//! Extension-point resolution and decoration layer for DataHub Portal.
//! Provides:
//!
//! - A slot registry abstraction with a process-wide default implementation
//! - Element validation for untyped plugin exports
//! - Prop-injection decoration with host-owned override semantics
//! - Single- and multi-slot resolvers with silent-failure degradation
//! - Typed accessors, one per known extension point
//!
//! A misbehaving plugin must never crash the host page: every failure in
//! this crate degrades to "no plugin for this slot".

pub mod bundle;
pub mod decorate;
pub mod registry;
pub mod resolver;
pub mod slots;
pub mod validate;

pub use bundle::{CapabilityBundle, HostActions};
pub use decorate::with_injected_props;
pub use registry::{GlobalSlotRegistry, RegistryValue, SlotRegistry, slot_key};
pub use resolver::{resolve_multi_slot, resolve_slot};
pub use slots::SlotName;
pub use validate::is_valid_component;
