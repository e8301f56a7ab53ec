//! Application use cases. Orchestrate domain logic via ports.

pub mod advisor;
pub mod extractor;
pub mod orchestrator;
pub mod reader;
pub mod writer;

pub use advisor::{InsightAdvisor, IntegrationAdvisor};
pub use extractor::ContentExtractor;
pub use orchestrator::{Orchestrator, PendingNote};
pub use reader::WorkspaceReader;
pub use writer::WorkspaceWriter;
