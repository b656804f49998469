use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::state::AppState;
use crate::domain::{Resolution, ResolutionKind};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub session_id: Uuid,
    pub reply: String,
    pub kind: ResolutionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faq_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f32>,
}

impl ChatResponse {
    fn new(session_id: Uuid, resolution: &Resolution) -> Self {
        let (faq_index, similarity) = match resolution {
            Resolution::Matched {
                faq_index,
                similarity,
                ..
            } => (Some(*faq_index), Some(*similarity)),
            _ => (None, None),
        };

        Self {
            session_id,
            reply: resolution.message().to_string(),
            kind: resolution.kind(),
            faq_index,
            similarity,
        }
    }
}

/// Resolves one user turn and appends both turns to the session transcript.
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let mut session = state.session.lock().await;
    session.push_user(&request.message);

    let resolution = state.resolver.resolve(&request.message).await;
    if let Resolution::Failed { error, .. } = &resolution {
        tracing::error!(error = %error, session_id = %session.id, "chat turn failed");
    }

    let response = ChatResponse::new(session.id, &resolution);
    session.push_assistant(resolution.into_message());

    Json(response)
}
