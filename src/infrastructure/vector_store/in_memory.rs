use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::{ports::VectorStore, DomainError, Embedding, FaqDocument, SearchResult};

/// Brute-force cosine index. Fine for a handful of FAQ entries.
pub struct InMemoryVectorStore {
    entries: RwLock<Vec<(FaqDocument, Embedding)>>,
}

impl InMemoryVectorStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryVectorStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VectorStore for InMemoryVectorStore {
    async fn rebuild(&self, entries: &[(FaqDocument, Embedding)]) -> Result<(), DomainError> {
        let mut store = self
            .entries
            .write()
            .map_err(|e| DomainError::internal(e.to_string()))?;

        store.clear();
        store.extend(entries.iter().cloned());
        Ok(())
    }

    async fn search(
        &self,
        query: &Embedding,
        top_k: usize,
    ) -> Result<Vec<SearchResult>, DomainError> {
        let store = self
            .entries
            .read()
            .map_err(|e| DomainError::internal(e.to_string()))?;

        let mut results: Vec<SearchResult> = store
            .iter()
            .map(|(document, embedding)| SearchResult {
                document: document.clone(),
                distance: query.cosine_distance(embedding),
            })
            .collect();

        // Stable sort keeps dataset order among equal distances.
        results.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results.truncate(top_k);

        Ok(results)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let store = self
            .entries
            .read()
            .map_err(|e| DomainError::internal(e.to_string()))?;
        Ok(store.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FaqRecord;

    fn entry(i: usize, vec: Vec<f32>) -> (FaqDocument, Embedding) {
        let record = FaqRecord::new(format!("question {i}"), format!("answer {i}"));
        (FaqDocument::from_record(i, &record), Embedding::new(vec))
    }

    #[tokio::test]
    async fn test_rebuild_and_search() {
        let store = InMemoryVectorStore::new();
        store
            .rebuild(&[entry(0, vec![1.0, 0.0, 0.0]), entry(1, vec![0.0, 1.0, 0.0])])
            .await
            .unwrap();

        let query = Embedding::new(vec![0.0, 1.0, 0.0]);
        let results = store.search(&query, 1).await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].document.faq_index, 1);
        assert!(results[0].distance.abs() < 0.001);
        assert!((results[0].similarity() - 1.0).abs() < 0.001);
    }

    #[tokio::test]
    async fn test_results_ordered_by_distance() {
        let store = InMemoryVectorStore::new();
        store
            .rebuild(&[
                entry(0, vec![0.0, 1.0]),
                entry(1, vec![1.0, 0.0]),
                entry(2, vec![1.0, 1.0]),
            ])
            .await
            .unwrap();

        let results = store.search(&Embedding::new(vec![1.0, 0.1]), 3).await.unwrap();
        let order: Vec<_> = results.iter().map(|r| r.document.faq_index).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[tokio::test]
    async fn test_rebuild_replaces_previous_entries() {
        let store = InMemoryVectorStore::new();
        store
            .rebuild(&[entry(0, vec![1.0, 0.0]), entry(1, vec![0.0, 1.0])])
            .await
            .unwrap();
        store.rebuild(&[entry(0, vec![1.0, 0.0])]).await.unwrap();

        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_empty_store_returns_nothing() {
        let store = InMemoryVectorStore::new();
        let results = store.search(&Embedding::new(vec![1.0]), 1).await.unwrap();
        assert!(results.is_empty());
    }
}
