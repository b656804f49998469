use std::sync::Arc;
use tokio::sync::Mutex;

use crate::application::AnswerResolver;
use crate::domain::ChatSession;
use crate::infrastructure::AppConfig;

/// Shared by every handler. The resolver is read-only after startup; the
/// session lock also serializes queries so only one resolves at a time.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<AnswerResolver>,
    pub session: Arc<Mutex<ChatSession>>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(resolver: AnswerResolver, config: AppConfig) -> Self {
        Self {
            resolver: Arc::new(resolver),
            session: Arc::new(Mutex::new(ChatSession::new())),
            config: Arc::new(config),
        }
    }
}
