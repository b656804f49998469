use crate::domain::{errors::DomainError, Embedding, FaqDocument, SearchResult};
use async_trait::async_trait;

#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Drops whatever the store holds and inserts `entries` as one batch.
    async fn rebuild(&self, entries: &[(FaqDocument, Embedding)]) -> Result<(), DomainError>;

    /// Nearest documents by ascending distance, at most `top_k` of them.
    async fn search(
        &self,
        query: &Embedding,
        top_k: usize,
    ) -> Result<Vec<SearchResult>, DomainError>;

    async fn count(&self) -> Result<usize, DomainError>;
}
