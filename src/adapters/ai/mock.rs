//! Mock AI adapter for running without API credentials.
//!
//! Returns canned responses and simulates network latency. Selected
//! automatically when no API key is configured.

use crate::domain::DomainError;
use crate::ports::AiPort;
use std::time::Duration;
use tracing::info;

/// Mock AI adapter. Returns predetermined responses without making API calls.
pub struct MockAiAdapter {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
}

impl MockAiAdapter {
    /// Create a new mock adapter with default delay (100ms).
    pub fn new() -> Self {
        Self { delay_ms: 100 }
    }

    /// Create a mock adapter with custom delay.
    pub fn with_delay(delay_ms: u64) -> Self {
        Self { delay_ms }
    }
}

impl Default for MockAiAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl AiPort for MockAiAdapter {
    async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        info!(prompt_len = prompt.len(), "[MOCK] simulating text generation");
        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        Ok(format!(
            "[MOCK] Simulated response to a {}-character prompt. In production \
             the generative model would return an analysis, summary, or \
             advisory text here.",
            prompt.len()
        ))
    }

    async fn generate_with_image(
        &self,
        instruction: &str,
        image: &[u8],
    ) -> Result<String, DomainError> {
        info!(
            instruction_len = instruction.len(),
            image_bytes = image.len(),
            "[MOCK] simulating vision generation"
        );
        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        Ok(format!(
            "[MOCK] Simulated transcription of a {}-byte image. In production \
             the vision model would describe the handwritten note here.",
            image.len()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_adapter() {
        let adapter = MockAiAdapter::with_delay(10);

        let text = adapter.generate("summarize this").await.unwrap();
        assert!(!text.is_empty());

        let vision = adapter
            .generate_with_image("read this note", &[0xff, 0xd8])
            .await
            .unwrap();
        assert!(vision.contains("2-byte"));
    }
}
