//! AI adapter module. Implements AiPort for the generative-model service.
//!
//! Provides the Gemini REST adapter and a mock adapter for offline use.

pub mod gemini;
pub mod mock;

pub use gemini::GeminiAdapter;
pub use mock::MockAiAdapter;
