//! Content extraction: raw user input -> free-text analysis.
//!
//! One model call per note. Image notes go to a vision-capable model with a
//! fixed instruction; typed notes go to a text model. The response is taken
//! verbatim; any non-empty string counts as success.

use crate::domain::{Analysis, DomainError, NoteInput};
use crate::ports::AiPort;
use std::sync::Arc;
use tracing::info;

/// Instruction sent alongside an uploaded photo.
const IMAGE_INSTRUCTION: &str = "Analyze this handwritten note and provide a summary";

/// Turns raw note input into an `Analysis` via one generative-model call.
pub struct ContentExtractor {
    ai: Arc<dyn AiPort>,
}

impl ContentExtractor {
    pub fn new(ai: Arc<dyn AiPort>) -> Self {
        Self { ai }
    }

    /// Analyze the note. Fails with `DomainError::Extraction` on a model
    /// error or an empty response; never retried.
    pub async fn extract(&self, input: &NoteInput) -> Result<Analysis, DomainError> {
        let text = match input {
            NoteInput::Image { bytes } => {
                info!(image_bytes = bytes.len(), "analyzing handwritten note image");
                self.ai.generate_with_image(IMAGE_INSTRUCTION, bytes).await
            }
            NoteInput::Text { title, body } => {
                info!(title = %title, body_len = body.len(), "analyzing typed note");
                let prompt = format!("Summarize and analyze the following note: {body}");
                self.ai.generate(&prompt).await
            }
        }
        .map_err(|e| DomainError::Extraction(e.to_string()))?;

        if text.trim().is_empty() {
            return Err(DomainError::Extraction(
                "model returned an empty analysis".into(),
            ));
        }

        Ok(Analysis { text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// AiPort fake that records prompts and replies with a fixed string.
    struct ScriptedAi {
        reply: String,
        prompts: Mutex<Vec<String>>,
        image_calls: Mutex<Vec<String>>,
    }

    impl ScriptedAi {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                prompts: Mutex::new(Vec::new()),
                image_calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait::async_trait]
    impl AiPort for ScriptedAi {
        async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(self.reply.clone())
        }

        async fn generate_with_image(
            &self,
            instruction: &str,
            _image: &[u8],
        ) -> Result<String, DomainError> {
            self.image_calls.lock().unwrap().push(instruction.to_string());
            Ok(self.reply.clone())
        }
    }

    #[tokio::test]
    async fn text_note_embeds_body_in_prompt() {
        let ai = Arc::new(ScriptedAi::new("an analysis"));
        let extractor = ContentExtractor::new(ai.clone());

        let input = NoteInput::Text {
            title: "Trip Ideas".into(),
            body: "Visit the coast in June".into(),
        };
        let analysis = extractor.extract(&input).await.unwrap();

        assert_eq!(analysis.text, "an analysis");
        let prompts = ai.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(
            prompts[0],
            "Summarize and analyze the following note: Visit the coast in June"
        );
        assert!(ai.image_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn image_note_uses_vision_call_with_fixed_instruction() {
        let ai = Arc::new(ScriptedAi::new("reads: buy milk"));
        let extractor = ContentExtractor::new(ai.clone());

        let input = NoteInput::Image { bytes: vec![0xff, 0xd8, 0xff] };
        let analysis = extractor.extract(&input).await.unwrap();

        assert_eq!(analysis.text, "reads: buy milk");
        let calls = ai.image_calls.lock().unwrap();
        assert_eq!(calls.as_slice(), [IMAGE_INSTRUCTION]);
    }

    #[tokio::test]
    async fn empty_model_response_is_an_extraction_error() {
        let ai = Arc::new(ScriptedAi::new("   "));
        let extractor = ContentExtractor::new(ai);

        let input = NoteInput::Text { title: "t".into(), body: "b".into() };
        let err = extractor.extract(&input).await.unwrap_err();
        assert!(matches!(err, DomainError::Extraction(_)));
    }
}
