use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::api::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub indexed_documents: usize,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

/// Ready once the index answers and holds at least one FAQ.
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<ReadinessResponse>, StatusCode> {
    let indexed = match state.resolver.knowledge_base().indexed_count().await {
        Ok(0) => {
            tracing::warn!("index is empty");
            return Err(StatusCode::SERVICE_UNAVAILABLE);
        }
        Ok(count) => count,
        Err(e) => {
            tracing::warn!(error = %e, "index unavailable");
            return Err(StatusCode::SERVICE_UNAVAILABLE);
        }
    };

    Ok(Json(ReadinessResponse {
        status: "ready".into(),
        indexed_documents: indexed,
    }))
}
