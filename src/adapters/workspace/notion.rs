//! Notion adapter. Implements WorkspacePort via the Notion REST API.
//!
//! A "collection" maps to a Notion database; documents are pages with a
//! `Title` title property and a `Content` rich_text property. Listing
//! follows `has_more`/`next_cursor` until the database is exhausted.

use crate::domain::{DomainError, WorkspaceDocument};
use crate::ports::WorkspacePort;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{info, warn};

const NOTION_VERSION: &str = "2022-06-28";

/// Page property holding the document title.
const TITLE_PROP: &str = "Title";
/// Page property holding the document body.
const CONTENT_PROP: &str = "Content";

/// Notion API adapter.
///
/// Requires an integration token with access to the target database
/// (https://www.notion.so/my-integrations).
pub struct NotionAdapter {
    client: Client,
    base_url: String,
    token: String,
}

impl NotionAdapter {
    /// Create a new Notion adapter. `timeout` bounds every request.
    pub fn new(base_url: String, token: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");
        Self { client, base_url, token }
    }

    fn auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("Authorization", format!("Bearer {}", self.token))
            .header("Notion-Version", NOTION_VERSION)
    }
}

#[derive(Deserialize)]
struct QueryResponse {
    results: Vec<Value>,
    has_more: bool,
    next_cursor: Option<String>,
}

#[async_trait::async_trait]
impl WorkspacePort for NotionAdapter {
    async fn list_documents(
        &self,
        collection_id: &str,
    ) -> Result<Vec<WorkspaceDocument>, DomainError> {
        let url = format!("{}/v1/databases/{}/query", self.base_url, collection_id);
        let mut documents = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut body = json!({});
            if let Some(ref c) = cursor {
                body["start_cursor"] = Value::String(c.clone());
            }

            let response = self
                .auth(self.client.post(&url))
                .json(&body)
                .send()
                .await
                .map_err(|e| DomainError::Store(format!("query request failed: {e}")))?;

            if !response.status().is_success() {
                let status = response.status();
                let text = response.text().await.unwrap_or_default();
                warn!(status = %status, body = %text, "Notion query returned error");
                return Err(DomainError::Store(format!(
                    "Notion API error {}: {}",
                    status,
                    text.chars().take(200).collect::<String>()
                )));
            }

            let page: QueryResponse = response
                .json()
                .await
                .map_err(|e| DomainError::Store(format!("failed to parse query response: {e}")))?;

            documents.extend(page.results.iter().map(page_to_document));

            if !page.has_more {
                break;
            }
            cursor = page.next_cursor;
            if cursor.is_none() {
                break;
            }
        }

        info!(collection_id, count = documents.len(), "listed workspace documents");
        Ok(documents)
    }

    async fn create_document(
        &self,
        collection_id: &str,
        title: &str,
        body: &str,
    ) -> Result<String, DomainError> {
        let url = format!("{}/v1/pages", self.base_url);
        let payload = json!({
            "parent": { "database_id": collection_id },
            "properties": {
                TITLE_PROP: { "title": [{ "text": { "content": title } }] },
                CONTENT_PROP: { "rich_text": [{ "text": { "content": body } }] },
            }
        });

        let response = self
            .auth(self.client.post(&url))
            .json(&payload)
            .send()
            .await
            .map_err(|e| DomainError::Store(format!("create request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "Notion create returned error");
            return Err(DomainError::Store(format!(
                "Notion API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let created: Value = response
            .json()
            .await
            .map_err(|e| DomainError::Store(format!("failed to parse create response: {e}")))?;
        let id = created["id"].as_str().unwrap_or_default().to_string();

        info!(collection_id, page_id = %id, "created workspace document");
        Ok(id)
    }
}

/// Map a Notion page object to a domain document. Missing or malformed
/// properties yield empty strings rather than failures; the reader skips
/// empty bodies downstream.
fn page_to_document(page: &Value) -> WorkspaceDocument {
    WorkspaceDocument {
        id: page["id"].as_str().unwrap_or_default().to_string(),
        title: plain_text(&page["properties"][TITLE_PROP]["title"]),
        body: plain_text(&page["properties"][CONTENT_PROP]["rich_text"]),
    }
}

/// Concatenate the `plain_text` of a rich-text/title array.
fn plain_text(fragments: &Value) -> String {
    fragments
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item["plain_text"].as_str())
                .collect::<Vec<_>>()
                .concat()
        })
        .unwrap_or_default()
}
