//! Pipeline orchestration: extract -> read -> advise -> confirm -> persist.
//!
//! Strictly sequential except the two advisors, which have no data
//! dependency on each other and run concurrently. Nothing is checkpointed:
//! a failed run is restarted from input submission. The write is gated
//! behind an explicit confirmation from the caller (`save`), so upstream
//! failures never cause unwanted writes.

use crate::domain::{DomainError, NewDocument, NoteInput};
use crate::usecases::{
    ContentExtractor, InsightAdvisor, IntegrationAdvisor, WorkspaceReader, WorkspaceWriter,
};
use std::fmt;
use tracing::{debug, warn};

/// Where the pipeline currently stands. Failure from any in-flight state
/// lands in `Errored`; `AwaitingConfirmation` is left via `save`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Extracting,
    Reading,
    Advising,
    AwaitingConfirmation,
    Persisting,
    Done,
    Errored,
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineState::Idle => "idle",
            PipelineState::Extracting => "extracting",
            PipelineState::Reading => "reading",
            PipelineState::Advising => "advising",
            PipelineState::AwaitingConfirmation => "awaiting_confirmation",
            PipelineState::Persisting => "persisting",
            PipelineState::Done => "done",
            PipelineState::Errored => "errored",
        };
        f.write_str(name)
    }
}

/// Everything the user reviews before deciding to save. Dropping this value
/// without calling `save` abandons the note; nothing is written.
#[derive(Debug, Clone)]
pub struct PendingNote {
    pub title: String,
    pub collection_id: String,
    pub analysis: String,
    pub existing_summary: String,
    pub integration_suggestions: String,
    pub insights: String,
}

/// Sequences the five pipeline components over injected ports.
pub struct Orchestrator {
    extractor: ContentExtractor,
    reader: WorkspaceReader,
    integration: IntegrationAdvisor,
    insight: InsightAdvisor,
    writer: WorkspaceWriter,
}

impl Orchestrator {
    pub fn new(
        extractor: ContentExtractor,
        reader: WorkspaceReader,
        integration: IntegrationAdvisor,
        insight: InsightAdvisor,
        writer: WorkspaceWriter,
    ) -> Self {
        Self { extractor, reader, integration, insight, writer }
    }

    /// Run the read-only half of the pipeline: extraction, workspace
    /// summarization, both advisories. Returns the material for the user to
    /// review. A non-empty collection id is a precondition; without one no
    /// external call is made.
    pub async fn prepare(
        &self,
        input: NoteInput,
        collection_id: &str,
    ) -> Result<PendingNote, DomainError> {
        let mut state = PipelineState::Idle;

        if collection_id.trim().is_empty() {
            return Err(DomainError::Input("a collection id is required".into()));
        }

        advance(&mut state, PipelineState::Extracting);
        let analysis = match self.extractor.extract(&input).await {
            Ok(analysis) => analysis,
            Err(e) => return Err(fail(&mut state, e)),
        };

        advance(&mut state, PipelineState::Reading);
        let existing = match self.reader.summarize(collection_id).await {
            Ok(summary) => summary,
            Err(e) => return Err(fail(&mut state, e)),
        };

        advance(&mut state, PipelineState::Advising);
        let advisories = tokio::try_join!(
            self.integration.advise(&analysis, &existing),
            self.insight.advise(&analysis, &existing),
        );
        let (integration_suggestions, insights) = match advisories {
            Ok(pair) => pair,
            Err(e) => return Err(fail(&mut state, e)),
        };

        advance(&mut state, PipelineState::AwaitingConfirmation);
        Ok(PendingNote {
            title: input.title().to_string(),
            collection_id: collection_id.to_string(),
            analysis: analysis.text,
            existing_summary: existing.text,
            integration_suggestions,
            insights,
        })
    }

    /// Persist a reviewed note. Called only after the user confirms.
    pub async fn save(&self, pending: &PendingNote) -> Result<(), DomainError> {
        let mut state = PipelineState::AwaitingConfirmation;
        advance(&mut state, PipelineState::Persisting);

        let document = NewDocument {
            title: pending.title.clone(),
            body: pending.analysis.clone(),
            collection_id: pending.collection_id.clone(),
        };
        match self.writer.persist(&document).await {
            Ok(()) => {
                advance(&mut state, PipelineState::Done);
                Ok(())
            }
            Err(e) => Err(fail(&mut state, e)),
        }
    }
}

fn advance(state: &mut PipelineState, next: PipelineState) {
    debug!(from = %state, to = %next, "pipeline transition");
    *state = next;
}

fn fail(state: &mut PipelineState, error: DomainError) -> DomainError {
    warn!(from = %state, error = %error, "pipeline halted");
    *state = PipelineState::Errored;
    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WorkspaceDocument;
    use crate::ports::{AiPort, WorkspacePort};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// AiPort fake: every call answers with the same text; counts per method.
    struct RecordingAi {
        reply: String,
        generate_calls: AtomicUsize,
        image_calls: AtomicUsize,
    }

    impl RecordingAi {
        fn new(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: reply.to_string(),
                generate_calls: AtomicUsize::new(0),
                image_calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait::async_trait]
    impl AiPort for RecordingAi {
        async fn generate(&self, _prompt: &str) -> Result<String, DomainError> {
            self.generate_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.reply.clone())
        }

        async fn generate_with_image(
            &self,
            _instruction: &str,
            _image: &[u8],
        ) -> Result<String, DomainError> {
            self.image_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.reply.clone())
        }
    }

    /// WorkspacePort fake: empty listing, records create arguments.
    #[derive(Default)]
    struct RecordingStore {
        list_calls: AtomicUsize,
        fail_listing: bool,
        created: Mutex<Vec<(String, String, String)>>,
    }

    #[async_trait::async_trait]
    impl WorkspacePort for RecordingStore {
        async fn list_documents(
            &self,
            _collection_id: &str,
        ) -> Result<Vec<WorkspaceDocument>, DomainError> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_listing {
                return Err(DomainError::Store("503 service unavailable".into()));
            }
            Ok(Vec::new())
        }

        async fn create_document(
            &self,
            collection_id: &str,
            title: &str,
            body: &str,
        ) -> Result<String, DomainError> {
            self.created.lock().unwrap().push((
                collection_id.to_string(),
                title.to_string(),
                body.to_string(),
            ));
            Ok("page-1".into())
        }
    }

    fn orchestrator(
        ai: Arc<RecordingAi>,
        store: Arc<RecordingStore>,
    ) -> Orchestrator {
        let ai_port: Arc<dyn AiPort> = ai;
        let store_port: Arc<dyn WorkspacePort> = store;
        Orchestrator::new(
            ContentExtractor::new(ai_port.clone()),
            WorkspaceReader::new(ai_port.clone(), store_port.clone()),
            IntegrationAdvisor::new(ai_port.clone()),
            InsightAdvisor::new(ai_port),
            WorkspaceWriter::new(store_port),
        )
    }

    fn typed_note() -> NoteInput {
        NoteInput::Text {
            title: "Trip Ideas".into(),
            body: "coast notes".into(),
        }
    }

    #[tokio::test]
    async fn happy_path_calls_each_step_once_and_writes_after_confirmation() {
        let ai = RecordingAi::new("Visit the coast in June");
        let store = Arc::new(RecordingStore::default());
        let orch = orchestrator(ai.clone(), store.clone());

        let pending = orch.prepare(typed_note(), "db-42").await.unwrap();

        // extraction + reader summarization + two advisories = 4 text calls
        assert_eq!(ai.generate_calls.load(Ordering::SeqCst), 4);
        assert_eq!(ai.image_calls.load(Ordering::SeqCst), 0);
        assert_eq!(store.list_calls.load(Ordering::SeqCst), 1);
        assert!(store.created.lock().unwrap().is_empty());

        orch.save(&pending).await.unwrap();

        let created = store.created.lock().unwrap();
        assert_eq!(
            created.as_slice(),
            [(
                "db-42".to_string(),
                "Trip Ideas".to_string(),
                "Visit the coast in June".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn abandoning_the_pending_note_writes_nothing() {
        let ai = RecordingAi::new("analysis");
        let store = Arc::new(RecordingStore::default());
        let orch = orchestrator(ai, store.clone());

        let pending = orch.prepare(typed_note(), "db-42").await.unwrap();
        drop(pending);

        assert!(store.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn listing_failure_halts_before_the_advisors() {
        let ai = RecordingAi::new("analysis");
        let store = Arc::new(RecordingStore { fail_listing: true, ..Default::default() });
        let orch = orchestrator(ai.clone(), store.clone());

        let err = orch.prepare(typed_note(), "db-42").await.unwrap_err();

        assert!(matches!(err, DomainError::Read(_)));
        // only the extraction call happened; no advisory calls were made
        assert_eq!(ai.generate_calls.load(Ordering::SeqCst), 1);
        assert!(store.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_collection_id_makes_zero_external_calls() {
        let ai = RecordingAi::new("analysis");
        let store = Arc::new(RecordingStore::default());
        let orch = orchestrator(ai.clone(), store.clone());

        let err = orch.prepare(typed_note(), "  ").await.unwrap_err();

        assert!(matches!(err, DomainError::Input(_)));
        assert_eq!(ai.generate_calls.load(Ordering::SeqCst), 0);
        assert_eq!(ai.image_calls.load(Ordering::SeqCst), 0);
        assert_eq!(store.list_calls.load(Ordering::SeqCst), 0);
        assert!(store.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn image_note_is_filed_under_the_default_title() {
        let ai = RecordingAi::new("transcribed text");
        let store = Arc::new(RecordingStore::default());
        let orch = orchestrator(ai.clone(), store.clone());

        let input = NoteInput::Image { bytes: vec![0x89, 0x50, 0x4e, 0x47] };
        let pending = orch.prepare(input, "db-42").await.unwrap();

        assert_eq!(ai.image_calls.load(Ordering::SeqCst), 1);
        // reader + two advisories still use the text path
        assert_eq!(ai.generate_calls.load(Ordering::SeqCst), 3);
        assert_eq!(pending.title, "Handwritten Note");
    }
}
