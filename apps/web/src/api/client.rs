use std::ops::Deref;
use std::sync::Arc;

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::ApiConfig;
use crate::models::{ResearchQueryRequest, ResearchQueryResponse, SessionHistoryResponse, SessionsResponse};

pub const QUERY_PATH: &str = "research/query";
pub const SESSIONS_PATH: &str = "research/sessions";

pub fn history_path(session_id: &str) -> String {
    format!("research/history/{}", session_id)
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApiError {
    /// No response was received.
    #[error("Network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status; the body is kept verbatim.
    #[error("HTTP {status} {status_text}: {body}")]
    Http {
        status: u16,
        status_text: String,
        body: String,
    },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Serialize error: {0}")]
    Serialize(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// The three research operations the front-end needs from the backend.
#[async_trait(?Send)]
pub trait ResearchApi: Send + Sync {
    async fn submit_query(&self, request: &ResearchQueryRequest) -> Result<ResearchQueryResponse, ApiError>;

    async fn get_session_history(&self, session_id: &str) -> Result<SessionHistoryResponse, ApiError>;

    async fn get_sessions(&self) -> Result<SessionsResponse, ApiError>;
}

/// Shared handle placed in Leptos context so pages can be rendered against any backend.
#[derive(Clone)]
pub struct ApiHandle(Arc<dyn ResearchApi>);

impl ApiHandle {
    pub fn new(api: impl ResearchApi + 'static) -> Self {
        Self(Arc::new(api))
    }

    pub fn http(config: ApiConfig) -> Self {
        Self::new(HttpResearchApi::new(config))
    }
}

impl Deref for ApiHandle {
    type Target = dyn ResearchApi;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Browser client backed by `fetch`. One request per call; no retry, cache or timeout.
#[derive(Clone, Debug, Default)]
pub struct HttpResearchApi {
    config: ApiConfig,
}

impl HttpResearchApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl ResearchApi for HttpResearchApi {
    async fn submit_query(&self, request: &ResearchQueryRequest) -> Result<ResearchQueryResponse, ApiError> {
        let url = self.config.endpoint(QUERY_PATH);
        log::debug!("POST {} (session: {:?})", url, request.session_id);

        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(request)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode(response).await
    }

    async fn get_session_history(&self, session_id: &str) -> Result<SessionHistoryResponse, ApiError> {
        let url = self.config.endpoint(&history_path(session_id));
        log::debug!("GET {}", url);

        let response = Request::get(&url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let history: SessionHistoryResponse = decode(response).await?;
        if !history.is_consistent() {
            log::warn!(
                "session {} reports message_count={} but returned {} messages",
                history.session_id,
                history.message_count,
                history.messages.len()
            );
        }
        Ok(history)
    }

    async fn get_sessions(&self) -> Result<SessionsResponse, ApiError> {
        let url = self.config.endpoint(SESSIONS_PATH);
        log::debug!("GET {}", url);

        let response = Request::get(&url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let sessions: SessionsResponse = decode(response).await?;
        if !sessions.is_consistent() {
            log::warn!(
                "session list reports total_count={} but returned {} sessions",
                sessions.total_count,
                sessions.sessions.len()
            );
        }
        Ok(sessions)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let status_text = response.status_text();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    decode_body(status, status_text, &body)
}

/// Maps a status line and raw body onto the typed result. Error bodies are surfaced untouched.
pub fn decode_body<T: DeserializeOwned>(status: u16, status_text: String, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        log::error!("research API returned HTTP {} {}", status, status_text);
        return Err(ApiError::Http {
            status,
            status_text,
            body: body.to_string(),
        });
    }

    serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
}
