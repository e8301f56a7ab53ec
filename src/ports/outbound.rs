//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters. Both services are opaque remote APIs; only the
//! contract the pipeline needs is expressed here.

use crate::domain::{DomainError, WorkspaceDocument};

/// Generative-model gateway. Synchronous prompt-in/text-out completion,
/// optionally with an image attachment.
#[async_trait::async_trait]
pub trait AiPort: Send + Sync {
    /// Send a text prompt, return the model's free-text response.
    async fn generate(&self, prompt: &str) -> Result<String, DomainError>;

    /// Send an instruction plus raw image bytes to a vision-capable model.
    async fn generate_with_image(
        &self,
        instruction: &str,
        image: &[u8],
    ) -> Result<String, DomainError>;
}

/// Document-store gateway, addressed by a collection id.
#[async_trait::async_trait]
pub trait WorkspacePort: Send + Sync {
    /// List all documents in the collection.
    async fn list_documents(
        &self,
        collection_id: &str,
    ) -> Result<Vec<WorkspaceDocument>, DomainError>;

    /// Create a new document; returns the store-assigned id.
    async fn create_document(
        &self,
        collection_id: &str,
        title: &str,
        body: &str,
    ) -> Result<String, DomainError>;
}
