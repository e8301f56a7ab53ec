//! Implements InputPort. Inquire-based interactive capture flow.
//!
//! Collects a database id and a note (photo path or typed title+body), runs
//! the pipeline with a spinner, shows the analysis and both advisories, and
//! asks for explicit confirmation before anything is written.

use crate::adapters::ui::progress;
use crate::domain::{DomainError, NoteInput};
use crate::ports::InputPort;
use crate::usecases::{Orchestrator, PendingNote};
use async_trait::async_trait;
use inquire::{Confirm, Select, Text};
use std::sync::Arc;
use tracing::info;

const INPUT_PHOTO: &str = "Photo of a handwritten note";
const INPUT_TYPED: &str = "Typed note";

/// TUI adapter. Inquire prompts around the orchestrator.
pub struct TuiInputPort {
    orchestrator: Arc<Orchestrator>,
    default_collection: Option<String>,
}

impl TuiInputPort {
    pub fn new(orchestrator: Arc<Orchestrator>, default_collection: Option<String>) -> Self {
        Self { orchestrator, default_collection }
    }

    async fn collect_input(&self) -> Result<Option<NoteInput>, DomainError> {
        let kind = Select::new("What kind of note?", vec![INPUT_PHOTO, INPUT_TYPED])
            .prompt()
            .map_err(|e| DomainError::Input(e.to_string()))?;

        if kind == INPUT_PHOTO {
            let path = Text::new("Path to the photo:")
                .prompt()
                .map_err(|e| DomainError::Input(e.to_string()))?;
            let bytes = tokio::fs::read(path.trim())
                .await
                .map_err(|e| DomainError::Input(format!("could not read image: {e}")))?;
            return Ok(Some(NoteInput::Image { bytes }));
        }

        let title = Text::new("Note title:")
            .prompt()
            .map_err(|e| DomainError::Input(e.to_string()))?;
        let body = Text::new("Note content:")
            .prompt()
            .map_err(|e| DomainError::Input(e.to_string()))?;
        if title.trim().is_empty() || body.trim().is_empty() {
            println!("Please enter both a title and content for your note.");
            return Ok(None);
        }
        Ok(Some(NoteInput::Text { title, body }))
    }

    fn show_review(pending: &PendingNote) {
        println!("\n== Note Analysis ==\n{}\n", pending.analysis);
        println!("== Existing Workspace Summary ==\n{}\n", pending.existing_summary);
        println!("== Integration Suggestions ==\n{}\n", pending.integration_suggestions);
        println!("== Insights ==\n{}\n", pending.insights);
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        let collection_id = {
            let mut id_prompt = Text::new("Notion database ID:");
            if let Some(ref default) = self.default_collection {
                id_prompt = id_prompt.with_initial_value(default);
            }
            id_prompt
                .prompt()
                .map_err(|e| DomainError::Input(e.to_string()))?
        };
        if collection_id.trim().is_empty() {
            println!("Please enter a Notion database ID to proceed.");
            return Ok(());
        }

        let Some(input) = self.collect_input().await? else {
            return Ok(());
        };

        let bar = progress::spinner("Analyzing note and workspace...");
        let prepared = self.orchestrator.prepare(input, collection_id.trim()).await;
        bar.finish_and_clear();
        let pending = prepared?;

        Self::show_review(&pending);

        let save = Confirm::new("Save this note to your workspace?")
            .with_default(false)
            .prompt()
            .map_err(|e| DomainError::Input(e.to_string()))?;

        if !save {
            info!("note discarded before confirmation; nothing written");
            println!("Note discarded; nothing was written.");
            return Ok(());
        }

        let bar = progress::spinner("Saving to workspace...");
        let saved = self.orchestrator.save(&pending).await;
        bar.finish_and_clear();

        // A failed write is surfaced but does not abort the process; the run
        // is over either way and there is no automatic retry.
        match saved {
            Ok(()) => println!("Note saved to your workspace."),
            Err(e) => println!("Saving failed: {e}"),
        }
        Ok(())
    }
}
