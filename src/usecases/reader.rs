//! Workspace reading: reduce a collection's documents to one summary.
//!
//! Lists documents, newline-joins their bodies (skipping empty ones), and
//! asks the model to summarize the concatenation in a single call.

use crate::domain::{DomainError, ExistingSummary};
use crate::ports::{AiPort, WorkspacePort};
use std::sync::Arc;
use tracing::info;

/// Fetches existing documents and reduces them to an `ExistingSummary`.
pub struct WorkspaceReader {
    ai: Arc<dyn AiPort>,
    workspace: Arc<dyn WorkspacePort>,
}

impl WorkspaceReader {
    pub fn new(ai: Arc<dyn AiPort>, workspace: Arc<dyn WorkspacePort>) -> Self {
        Self { ai, workspace }
    }

    /// Summarize the collection's current content.
    ///
    /// Documents with an empty body are skipped, not treated as failures.
    /// When the collection is empty (or every body is empty) the
    /// summarization call still runs with an empty concatenation.
    pub async fn summarize(&self, collection_id: &str) -> Result<ExistingSummary, DomainError> {
        let documents = self
            .workspace
            .list_documents(collection_id)
            .await
            .map_err(|e| DomainError::Read(e.to_string()))?;

        let concatenation: String = documents
            .iter()
            .map(|d| d.body.as_str())
            .filter(|body| !body.is_empty())
            .collect::<Vec<_>>()
            .join("\n");

        info!(
            collection_id,
            documents = documents.len(),
            concatenation_len = concatenation.len(),
            "summarizing existing workspace content"
        );

        let prompt = format!("Summarize the following content:\n{concatenation}");
        let text = self
            .ai
            .generate(&prompt)
            .await
            .map_err(|e| DomainError::Read(e.to_string()))?;

        Ok(ExistingSummary { text })
    }
}
