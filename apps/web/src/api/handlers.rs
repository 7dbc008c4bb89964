use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

use super::mock::{demo_history, demo_response, demo_sessions};
use crate::models::ResearchQueryRequest;

const MIN_QUERY_LEN: usize = 3;

pub async fn submit_query(Json(request): Json<ResearchQueryRequest>) -> impl IntoResponse {
    if request.query.trim().chars().count() < MIN_QUERY_LEN {
        tracing::warn!("rejecting research query shorter than {} characters", MIN_QUERY_LEN);
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "error": "ValidationError",
                "message": format!("Query must be at least {} characters", MIN_QUERY_LEN),
            })),
        );
    }

    let session_id = request
        .session_id
        .clone()
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    tracing::info!(session_id = %session_id, "processing demo research query");

    let response = demo_response(&request.query, &session_id);
    (StatusCode::OK, Json(json!(response)))
}

pub async fn session_history(Path(session_id): Path<String>) -> impl IntoResponse {
    match demo_history(&session_id) {
        Some(history) => (StatusCode::OK, Json(json!(history))),
        None => {
            tracing::warn!(session_id = %session_id, "session not found");
            (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": "NotFoundError",
                    "message": "Session not found",
                    "detail": { "session_id": session_id },
                })),
            )
        }
    }
}

pub async fn list_sessions() -> impl IntoResponse {
    Json(demo_sessions())
}
