//! Workspace writing: persist the analyzed note as a new document.
//!
//! The single side-effecting operation in the pipeline. Title and body go to
//! the store verbatim; no idempotency key, no dedup — duplicate titles are
//! permitted.

use crate::domain::{DomainError, NewDocument};
use crate::ports::WorkspacePort;
use std::sync::Arc;
use tracing::info;

/// Persists a `NewDocument` into the external store.
pub struct WorkspaceWriter {
    workspace: Arc<dyn WorkspacePort>,
}

impl WorkspaceWriter {
    pub fn new(workspace: Arc<dyn WorkspacePort>) -> Self {
        Self { workspace }
    }

    /// Create the document. Fails with `DomainError::Write` on any store-side
    /// error; the caller surfaces it to the user, never retries the pipeline.
    pub async fn persist(&self, document: &NewDocument) -> Result<(), DomainError> {
        let id = self
            .workspace
            .create_document(&document.collection_id, &document.title, &document.body)
            .await
            .map_err(|e| DomainError::Write(e.to_string()))?;

        info!(
            collection_id = %document.collection_id,
            document_id = %id,
            title = %document.title,
            "note saved to workspace"
        );
        Ok(())
    }
}
