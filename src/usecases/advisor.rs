//! Advisory generation: (new analysis, existing summary) -> advisory text.
//!
//! Two structurally identical advisors with different framing: integration
//! placement vs. cross-content insights. Both embed the two inputs verbatim
//! between fixed instruction text and make a single model call.

use crate::domain::{Analysis, DomainError, ExistingSummary};
use crate::ports::AiPort;
use std::sync::Arc;
use tracing::info;

fn advisory_prompt(new_content: &str, existing_summary: &str, framing: &str) -> String {
    format!(
        "New content:\n{new_content}\n\nExisting workspace summary:\n{existing_summary}\n\n{framing}"
    )
}

/// Suggests where the new note belongs relative to existing content.
pub struct IntegrationAdvisor {
    ai: Arc<dyn AiPort>,
}

impl IntegrationAdvisor {
    const FRAMING: &'static str = "Based on the new content and the existing workspace summary, \
        suggest how to integrate the new content into the user's workspace. Provide specific \
        recommendations on where to place the new information and how it relates to existing content.";

    pub fn new(ai: Arc<dyn AiPort>) -> Self {
        Self { ai }
    }

    pub async fn advise(
        &self,
        new_content: &Analysis,
        existing: &ExistingSummary,
    ) -> Result<String, DomainError> {
        info!("requesting integration suggestions");
        let prompt = advisory_prompt(&new_content.text, &existing.text, Self::FRAMING);
        self.ai
            .generate(&prompt)
            .await
            .map_err(|e| DomainError::Advice(e.to_string()))
    }
}

/// Surfaces patterns, action items, and contradictions across old and new content.
pub struct InsightAdvisor {
    ai: Arc<dyn AiPort>,
}

impl InsightAdvisor {
    const FRAMING: &'static str = "Analyze the new content in conjunction with the existing \
        workspace summary. Provide insights, identify patterns, suggest potential action items, \
        and highlight any important connections or contradictions between the new and existing \
        information.";

    pub fn new(ai: Arc<dyn AiPort>) -> Self {
        Self { ai }
    }

    pub async fn advise(
        &self,
        new_content: &Analysis,
        existing: &ExistingSummary,
    ) -> Result<String, DomainError> {
        info!("requesting cross-content insights");
        let prompt = advisory_prompt(&new_content.text, &existing.text, Self::FRAMING);
        self.ai
            .generate(&prompt)
            .await
            .map_err(|e| DomainError::Advice(e.to_string()))
    }
}
