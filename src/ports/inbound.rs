//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: UI invokes the capture-analyze-confirm-save flow.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run one interactive capture flow (collect input, analyze, confirm, save).
    async fn run(&self) -> Result<(), DomainError>;
}
