use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::state::AppState;
use crate::domain::{ChatSession, ChatTurn};

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub turns: Vec<ChatTurn>,
}

impl From<&ChatSession> for SessionResponse {
    fn from(session: &ChatSession) -> Self {
        Self {
            session_id: session.id,
            started_at: session.started_at,
            turns: session.turns().to_vec(),
        }
    }
}

pub async fn get_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let session = state.session.lock().await;
    Json(SessionResponse::from(&*session))
}

/// Ends the current session and starts an empty one.
pub async fn reset_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let mut session = state.session.lock().await;
    let previous = std::mem::take(&mut *session);
    tracing::info!(
        ended = %previous.id,
        started = %session.id,
        turns = previous.len(),
        "session reset"
    );
    Json(SessionResponse::from(&*session))
}
