//! Gemini adapter for text and vision generation.
//!
//! Talks to the Google Generative Language REST API
//! (`models/{model}:generateContent`). Implements `AiPort` for both plain
//! text prompts and instruction+image requests; images travel as base64
//! `inline_data` parts with a MIME type sniffed from the magic bytes.

use crate::domain::DomainError;
use crate::ports::AiPort;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Gemini REST adapter.
///
/// `base_url` points at the API version root (e.g.
/// `https://generativelanguage.googleapis.com/v1beta`); separate models can
/// be configured for text and vision requests.
pub struct GeminiAdapter {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    text_model: String,
    vision_model: String,
}

impl GeminiAdapter {
    /// Create a new adapter. `timeout` bounds every request; a timed-out
    /// call surfaces as the calling step's error.
    pub fn new(
        base_url: String,
        api_key: String,
        text_model: String,
        vision_model: String,
        timeout: Duration,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");
        Self { client, base_url, api_key, text_model, vision_model }
    }

    async fn generate_content(
        &self,
        model: &str,
        parts: Vec<Part>,
    ) -> Result<String, DomainError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        );
        let request = GenerateRequest { contents: vec![Content { parts }] };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::Model(format!("HTTP request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "Gemini API returned error");
            return Err(DomainError::Model(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Model(format!("failed to parse API response: {e}")))?;

        let text = extract_text(&body)
            .ok_or_else(|| DomainError::Model("no candidates returned".to_string()))?;

        debug!(response_len = text.len(), "received Gemini response");
        Ok(text)
    }
}

#[async_trait::async_trait]
impl AiPort for GeminiAdapter {
    async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        info!(
            model = %self.text_model,
            prompt_len = prompt.len(),
            "sending text prompt to Gemini"
        );
        self.generate_content(
            &self.text_model,
            vec![Part::Text { text: prompt.to_string() }],
        )
        .await
    }

    async fn generate_with_image(
        &self,
        instruction: &str,
        image: &[u8],
    ) -> Result<String, DomainError> {
        let mime_type = detect_image_mime(image);
        info!(
            model = %self.vision_model,
            mime_type,
            image_bytes = image.len(),
            "sending image prompt to Gemini"
        );
        let data = base64::engine::general_purpose::STANDARD.encode(image);
        self.generate_content(
            &self.vision_model,
            vec![
                Part::Text { text: instruction.to_string() },
                Part::InlineData {
                    inline_data: Blob { mime_type: mime_type.to_string(), data },
                },
            ],
        )
        .await
    }
}

/// Sniff the image MIME type from magic bytes. Defaults to JPEG.
fn detect_image_mime(data: &[u8]) -> &'static str {
    if data.starts_with(&[0x89, b'P', b'N', b'G']) {
        "image/png"
    } else if data.starts_with(b"GIF8") {
        "image/gif"
    } else if data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP" {
        "image/webp"
    } else {
        "image/jpeg"
    }
}

/// First text part of the first candidate, if any.
fn extract_text(response: &GenerateResponse) -> Option<String> {
    response
        .candidates
        .as_deref()
        .unwrap_or_default()
        .iter()
        .filter_map(|c| c.content.as_ref())
        .flat_map(|content| content.parts.as_deref().unwrap_or_default())
        .find_map(|part| part.text.clone())
}

// Gemini API request/response structures.

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: Blob },
}

#[derive(Serialize)]
struct Blob {
    mime_type: String,
    data: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<ResponsePart>>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_mime_png() {
        let png = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
        assert_eq!(detect_image_mime(&png), "image/png");
    }

    #[test]
    fn test_detect_mime_webp() {
        let mut webp = b"RIFF".to_vec();
        webp.extend_from_slice(&[0, 0, 0, 0]);
        webp.extend_from_slice(b"WEBP");
        assert_eq!(detect_image_mime(&webp), "image/webp");
    }

    #[test]
    fn test_detect_mime_defaults_to_jpeg() {
        assert_eq!(detect_image_mime(&[0xff, 0xd8, 0xff]), "image/jpeg");
        assert_eq!(detect_image_mime(&[]), "image/jpeg");
    }

    #[test]
    fn test_extract_text_from_candidate() {
        let raw = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "hello"}, {"text": "ignored"}]}}
            ]
        }"#;
        let response: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(extract_text(&response).as_deref(), Some("hello"));
    }

    #[test]
    fn test_extract_text_no_candidates() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(extract_text(&response), None);
    }

    #[test]
    fn test_image_request_serializes_inline_data() {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text { text: "read this".into() },
                    Part::InlineData {
                        inline_data: Blob {
                            mime_type: "image/png".into(),
                            data: "AAAA".into(),
                        },
                    },
                ],
            }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "read this");
        assert_eq!(
            json["contents"][0]["parts"][1]["inline_data"]["mime_type"],
            "image/png"
        );
    }
}
