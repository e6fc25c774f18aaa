use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, warn};

use crate::error::{QueryError, Result, UNKNOWN_ERROR};
use crate::models::{QueryResult, SearchRequest};

/// Default location of the literature service.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Query endpoint on the literature service.
const QUERY_PATH: &str = "/api/query";

/// Remote collaborator that turns a symptom description into a summary with
/// supporting literature.
#[async_trait]
pub trait LiteratureSearch: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<QueryResult>;
}

/// HTTP client for the literature service.
pub struct HttpLiteratureSearch {
    client: reqwest::Client,
    base_url: String,
}

impl HttpLiteratureSearch {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Reads the service location from `LITERATURE_API_URL`, falling back to
    /// the local default.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("LITERATURE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(base_url)
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), QUERY_PATH)
    }
}

#[async_trait]
impl LiteratureSearch for HttpLiteratureSearch {
    async fn search(&self, request: &SearchRequest) -> Result<QueryResult> {
        let endpoint = self.endpoint();
        info!("Querying literature service at {}", endpoint);

        let response = self.client.post(&endpoint).json(request).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Literature service returned status {}", status);
            return Err(QueryError::Service {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| QueryError::MalformedResponse(e.to_string()))
    }
}

/// Best-effort human-readable message from a failure body. The service
/// reports errors as `{"detail": ...}`; other deployments use `"error"` or
/// `"message"`. Plain-text bodies are taken as-is.
fn extract_error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        for key in ["detail", "error", "message"] {
            if let Some(message) = value.get(key).and_then(Value::as_str) {
                return message.to_string();
            }
        }
    }

    let text = body.trim();
    if text.is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        text.to_string()
    }
}
