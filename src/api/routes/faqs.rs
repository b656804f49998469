use axum::{extract::State, Json};

use crate::api::state::AppState;
use crate::domain::FaqRecord;

pub async fn list_faqs(State(state): State<AppState>) -> Json<Vec<FaqRecord>> {
    Json(state.resolver.knowledge_base().records().to_vec())
}
