use async_trait::async_trait;
use qdrant_client::qdrant::{
    CountPointsBuilder, CreateCollectionBuilder, DeleteCollectionBuilder, Distance, PointStruct,
    ScoredPoint, SearchPointsBuilder, UpsertPointsBuilder, VectorParamsBuilder,
};
use qdrant_client::{Payload, Qdrant};

use crate::domain::{
    ports::VectorStore, DomainError, Embedding, FaqDocument, FaqMetadata, SearchResult,
};

/// Qdrant-backed index. The collection is dropped and recreated on every
/// rebuild, so nothing survives a restart.
pub struct QdrantVectorStore {
    client: Qdrant,
    collection: String,
}

impl QdrantVectorStore {
    pub fn new(url: &str, collection: &str) -> Result<Self, DomainError> {
        let client = Qdrant::from_url(url)
            .build()
            .map_err(|e| DomainError::external(e.to_string()))?;

        Ok(Self {
            client,
            collection: collection.to_string(),
        })
    }

    async fn collection_exists(&self) -> Result<bool, DomainError> {
        let collections = self
            .client
            .list_collections()
            .await
            .map_err(|e| DomainError::external(e.to_string()))?;

        Ok(collections
            .collections
            .iter()
            .any(|c| c.name == self.collection))
    }

    async fn recreate_collection(&self, dimension: usize) -> Result<(), DomainError> {
        if self.collection_exists().await? {
            self.client
                .delete_collection(DeleteCollectionBuilder::new(&self.collection))
                .await
                .map_err(|e| DomainError::external(e.to_string()))?;
        }

        self.client
            .create_collection(
                CreateCollectionBuilder::new(&self.collection).vectors_config(
                    VectorParamsBuilder::new(dimension as u64, Distance::Cosine),
                ),
            )
            .await
            .map_err(|e| DomainError::external(e.to_string()))?;

        Ok(())
    }

    fn to_point(document: &FaqDocument, embedding: &Embedding) -> Result<PointStruct, DomainError> {
        let payload: Payload = serde_json::json!({
            "faq_index": document.faq_index,
            "content": document.content,
            "answer": document.metadata.answer,
        })
        .try_into()
        .map_err(|_| DomainError::internal("Failed to create payload"))?;

        Ok(PointStruct::new(
            document.faq_index as u64,
            embedding.as_slice().to_vec(),
            payload,
        ))
    }

    /// Cosine collections score by similarity; the port speaks distance.
    fn from_scored_point(point: ScoredPoint) -> Result<SearchResult, DomainError> {
        let payload = point.payload;
        let missing = |field: &str| DomainError::internal(format!("point payload lacks '{field}'"));

        let faq_index = payload
            .get("faq_index")
            .and_then(|v| v.as_integer())
            .ok_or_else(|| missing("faq_index"))?;
        let content = payload
            .get("content")
            .and_then(|v| v.as_str())
            .ok_or_else(|| missing("content"))?;
        let answer = payload
            .get("answer")
            .and_then(|v| v.as_str())
            .ok_or_else(|| missing("answer"))?;

        Ok(SearchResult {
            document: FaqDocument {
                faq_index: faq_index as usize,
                content: content.clone(),
                metadata: FaqMetadata {
                    answer: answer.clone(),
                },
            },
            distance: 1.0 - point.score,
        })
    }
}

#[async_trait]
impl VectorStore for QdrantVectorStore {
    async fn rebuild(&self, entries: &[(FaqDocument, Embedding)]) -> Result<(), DomainError> {
        let Some((_, first)) = entries.first() else {
            return Err(DomainError::validation("cannot index an empty knowledge base"));
        };

        self.recreate_collection(first.dimension()).await?;

        let points = entries
            .iter()
            .map(|(document, embedding)| Self::to_point(document, embedding))
            .collect::<Result<Vec<_>, _>>()?;

        self.client
            .upsert_points(UpsertPointsBuilder::new(&self.collection, points).wait(true))
            .await
            .map_err(|e| DomainError::external(e.to_string()))?;

        Ok(())
    }

    async fn search(
        &self,
        query: &Embedding,
        top_k: usize,
    ) -> Result<Vec<SearchResult>, DomainError> {
        let results = self
            .client
            .search_points(
                SearchPointsBuilder::new(&self.collection, query.as_slice().to_vec(), top_k as u64)
                    .with_payload(true),
            )
            .await
            .map_err(|e| DomainError::external(e.to_string()))?;

        results
            .result
            .into_iter()
            .map(Self::from_scored_point)
            .collect()
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let response = self
            .client
            .count(CountPointsBuilder::new(&self.collection).exact(true))
            .await
            .map_err(|e| DomainError::external(e.to_string()))?;

        Ok(response.result.map(|r| r.count as usize).unwrap_or(0))
    }
}
