//! Async host actions exposed to components.

use std::sync::Arc;

use async_trait::async_trait;

use datahub_core::AppResult;

/// An invocable host capability handed to components as a prop.
///
/// Actions complete asynchronously from the component's point of view;
/// how they execute internally is the host's business. The resolution
/// layer only guarantees that the handle it injects stays stable across
/// renders.
#[async_trait]
pub trait HostAction: Send + Sync {
    /// Invokes the action and waits for completion.
    async fn invoke(&self) -> AppResult<()>;
}

/// Shared handle to a host action.
pub type ActionHandle = Arc<dyn HostAction>;
