//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into `Model`/`Store`; each pipeline
//! step wraps those into its own variant so a failure names the step it
//! happened in. No step retries; errors are surfaced to the user as-is.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Input rejected before any external call (e.g. missing collection id).
    #[error("invalid input: {0}")]
    Input(String),

    #[error("content extraction failed: {0}")]
    Extraction(String),

    #[error("workspace read failed: {0}")]
    Read(String),

    #[error("advice generation failed: {0}")]
    Advice(String),

    #[error("workspace write failed: {0}")]
    Write(String),

    /// Transport/auth/empty-result failure from the generative-model adapter.
    #[error("model call failed: {0}")]
    Model(String),

    /// Transport/auth failure from the document-store adapter.
    #[error("document store error: {0}")]
    Store(String),
}
