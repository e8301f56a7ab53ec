//! Infrastructure adapters. Implement outbound ports.
//!
//! Gemini, Notion, terminal UI. Map errors to DomainError.

pub mod ai;
pub mod ui;
pub mod workspace;
