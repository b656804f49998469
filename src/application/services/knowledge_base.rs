use std::sync::Arc;
use tracing::instrument;

use crate::domain::{
    index_documents,
    ports::{EmbeddingService, VectorStore},
    DomainError, FaqRecord, SearchResult,
};

/// The fixed FAQ set and the index built from it.
pub struct KnowledgeBase {
    embedding: Arc<dyn EmbeddingService>,
    vector_store: Arc<dyn VectorStore>,
    records: Vec<FaqRecord>,
}

impl KnowledgeBase {
    pub fn new(
        embedding: Arc<dyn EmbeddingService>,
        vector_store: Arc<dyn VectorStore>,
        records: Vec<FaqRecord>,
    ) -> Self {
        Self {
            embedding,
            vector_store,
            records,
        }
    }

    pub fn records(&self) -> &[FaqRecord] {
        &self.records
    }

    /// Embeds every question in one batch and rebuilds the index from scratch.
    #[instrument(skip(self), fields(count = self.records.len()))]
    pub async fn index(&self) -> Result<usize, DomainError> {
        let documents = index_documents(&self.records);
        let texts: Vec<&str> = documents.iter().map(|d| d.content.as_str()).collect();
        let embeddings = self.embedding.embed_batch(&texts).await?;

        if embeddings.len() != documents.len() {
            return Err(DomainError::internal(format!(
                "embedded {} of {} questions",
                embeddings.len(),
                documents.len()
            )));
        }

        let entries: Vec<_> = documents.into_iter().zip(embeddings).collect();
        self.vector_store.rebuild(&entries).await?;

        tracing::info!(documents = entries.len(), "knowledge base indexed");
        Ok(entries.len())
    }

    /// The single closest document to `query`, if the index holds any.
    #[instrument(skip(self))]
    pub async fn nearest(&self, query: &str) -> Result<Option<SearchResult>, DomainError> {
        let embedding = self.embedding.embed(query).await?;
        let results = self.vector_store.search(&embedding, 1).await?;
        Ok(results.into_iter().next())
    }

    pub async fn indexed_count(&self) -> Result<usize, DomainError> {
        self.vector_store.count().await
    }
}
