use crate::domain::errors::DomainError;
use async_trait::async_trait;

/// General-purpose text generator used when no stored answer fits.
#[async_trait]
pub trait LlmService: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, DomainError>;
}
