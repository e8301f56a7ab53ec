//! Workspace adapter module. Implements WorkspacePort for the document store.

pub mod notion;

pub use notion::NotionAdapter;
