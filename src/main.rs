//! Wiring & DI. Entry point: bootstrap adapters, inject into the pipeline, run UI.
//!
//! No business logic here; the orchestration lives in `usecases`.

use dotenv::dotenv;
use note_sync::adapters::ai::{GeminiAdapter, MockAiAdapter};
use note_sync::adapters::ui::tui::TuiInputPort;
use note_sync::adapters::workspace::NotionAdapter;
use note_sync::ports::{AiPort, InputPort, WorkspacePort};
use note_sync::usecases::{
    ContentExtractor, InsightAdvisor, IntegrationAdvisor, Orchestrator, WorkspaceReader,
    WorkspaceWriter,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    note_sync::adapters::ui::init_ui();

    let cfg = note_sync::shared::config::AppConfig::load().unwrap_or_default();
    let timeout = Duration::from_secs(cfg.http_timeout_secs_or_default());

    // --- Notion (required: it is the only durable store) ---
    let Some(notion_token) = cfg.notion_token() else {
        anyhow::bail!(
            "Set NOTE_SYNC_NOTION_TOKEN (env or .env). Get from https://www.notion.so/my-integrations"
        );
    };
    let workspace: Arc<dyn WorkspacePort> = Arc::new(NotionAdapter::new(
        cfg.notion_api_url_or_default(),
        notion_token,
        timeout,
    ));

    // --- Generative model (mock when no API key is configured) ---
    let ai: Arc<dyn AiPort> = if cfg.is_ai_configured() {
        info!(
            model = %cfg.ai_model_or_default(),
            vision_model = %cfg.ai_vision_model_or_default(),
            url = %cfg.ai_api_url_or_default(),
            "AI analysis enabled with Gemini adapter"
        );
        Arc::new(GeminiAdapter::new(
            cfg.ai_api_url_or_default(),
            cfg.ai_api_key().unwrap_or_default(),
            cfg.ai_model_or_default(),
            cfg.ai_vision_model_or_default(),
            timeout,
        ))
    } else {
        warn!("NOTE_SYNC_AI_API_KEY not set, using mock AI adapter");
        Arc::new(MockAiAdapter::new())
    };

    // --- Pipeline ---
    let orchestrator = Arc::new(Orchestrator::new(
        ContentExtractor::new(Arc::clone(&ai)),
        WorkspaceReader::new(Arc::clone(&ai), Arc::clone(&workspace)),
        IntegrationAdvisor::new(Arc::clone(&ai)),
        InsightAdvisor::new(Arc::clone(&ai)),
        WorkspaceWriter::new(Arc::clone(&workspace)),
    ));

    let input_port: Arc<dyn InputPort> =
        Arc::new(TuiInputPort::new(orchestrator, cfg.database_id()));

    // --- Run (capture -> analyze -> review -> confirm -> save) ---
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
