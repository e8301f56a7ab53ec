//! Domain entities. Pure data structures for the core business.
//!
//! No Gemini/Notion/IO types here — these are mapped from adapters.
//! Every entity is an immutable, single-run value; only `NewDocument`
//! outlives the run (as a page in the external store).

use serde::{Deserialize, Serialize};

/// Title assigned to notes captured from a photo, which carry no title of
/// their own.
pub const HANDWRITTEN_NOTE_TITLE: &str = "Handwritten Note";

/// Raw user input: a photo of a handwritten note, or a typed note.
#[derive(Debug, Clone)]
pub enum NoteInput {
    /// Raw bytes of an uploaded photo (jpeg/png/...).
    Image { bytes: Vec<u8> },
    /// A typed note with an explicit title.
    Text { title: String, body: String },
}

impl NoteInput {
    /// Title under which the note will be filed.
    pub fn title(&self) -> &str {
        match self {
            NoteInput::Image { .. } => HANDWRITTEN_NOTE_TITLE,
            NoteInput::Text { title, .. } => title,
        }
    }
}

/// Free-text model output describing a single new note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub text: String,
}

/// Reduction of all current documents in a collection into one text blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistingSummary {
    pub text: String,
}

/// A document fetched read-only from the external store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceDocument {
    pub id: String,
    pub title: String,
    /// May be empty; such documents are skipped by the summary reduction.
    pub body: String,
}

/// Write target for the single side-effecting operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDocument {
    pub title: String,
    pub body: String,
    pub collection_id: String,
}
