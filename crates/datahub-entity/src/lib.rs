//! # datahub-entity
//!
//! Domain entity models for DataHub Portal. Every struct in this crate is
//! a value object the host hands to the UI layer or injects into plugin
//! components. All entities derive `Debug`, `Clone`, `Serialize`, and
//! `Deserialize`.

pub mod dataset;
pub mod navigation;
pub mod user;

pub use dataset::{Dataset, Distribution};
pub use navigation::NavigationItem;
pub use user::UserSession;
