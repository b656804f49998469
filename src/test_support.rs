//! Deterministic stand-ins for the external services.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::domain::{
    ports::{EmbeddingService, LlmService, VectorStore},
    DomainError, Embedding, FaqDocument, FaqRecord, SearchResult,
};

const VOCABULARY_SIZE: usize = 512;

/// Term-frequency vectors over a vocabulary that grows as words are seen.
/// Identical texts embed identically; texts sharing no words are orthogonal.
pub struct BagOfWordsEmbedding {
    vocabulary: Mutex<HashMap<String, usize>>,
    calls: AtomicUsize,
}

impl BagOfWordsEmbedding {
    pub fn new() -> Self {
        Self {
            vocabulary: Mutex::new(HashMap::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn reset_calls(&self) {
        self.calls.store(0, Ordering::SeqCst);
    }

    fn vectorize(&self, text: &str) -> Embedding {
        let mut vocabulary = self.vocabulary.lock().unwrap();
        let mut vec = vec![0.0; VOCABULARY_SIZE];

        for token in text
            .to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| t.len() > 1)
        {
            let next = vocabulary.len();
            let slot = *vocabulary.entry(token.to_string()).or_insert(next);
            vec[slot % VOCABULARY_SIZE] += 1.0;
        }

        Embedding::new(vec)
    }
}

#[async_trait]
impl EmbeddingService for BagOfWordsEmbedding {
    async fn embed(&self, text: &str) -> Result<Embedding, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.vectorize(text))
    }

    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Embedding>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(texts.iter().map(|t| self.vectorize(t)).collect())
    }
}

pub struct FailingEmbedding;

#[async_trait]
impl EmbeddingService for FailingEmbedding {
    async fn embed(&self, _text: &str) -> Result<Embedding, DomainError> {
        Err(DomainError::external("embedding service unreachable"))
    }

    async fn embed_batch(&self, _texts: &[&str]) -> Result<Vec<Embedding>, DomainError> {
        Err(DomainError::external("embedding service unreachable"))
    }
}

/// Always returns the same document at the same distance.
pub struct FixedDistanceStore {
    document: FaqDocument,
    distance: f32,
    requested_top_k: Mutex<Option<usize>>,
}

impl FixedDistanceStore {
    pub fn new(record: FaqRecord, distance: f32) -> Self {
        Self {
            document: FaqDocument::from_record(0, &record),
            distance,
            requested_top_k: Mutex::new(None),
        }
    }

    pub fn requested_top_k(&self) -> Option<usize> {
        *self.requested_top_k.lock().unwrap()
    }
}

#[async_trait]
impl VectorStore for FixedDistanceStore {
    async fn rebuild(&self, _entries: &[(FaqDocument, Embedding)]) -> Result<(), DomainError> {
        Ok(())
    }

    async fn search(
        &self,
        _query: &Embedding,
        top_k: usize,
    ) -> Result<Vec<SearchResult>, DomainError> {
        *self.requested_top_k.lock().unwrap() = Some(top_k);
        Ok(vec![SearchResult {
            document: self.document.clone(),
            distance: self.distance,
        }])
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(1)
    }
}

pub struct FailingStore;

#[async_trait]
impl VectorStore for FailingStore {
    async fn rebuild(&self, _entries: &[(FaqDocument, Embedding)]) -> Result<(), DomainError> {
        Err(DomainError::external("index offline"))
    }

    async fn search(
        &self,
        _query: &Embedding,
        _top_k: usize,
    ) -> Result<Vec<SearchResult>, DomainError> {
        Err(DomainError::external("index offline"))
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Err(DomainError::external("index offline"))
    }
}

/// Replies with a fixed text, or fails, and remembers what it was asked.
pub struct ScriptedLlm {
    reply: Result<String, String>,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl ScriptedLlm {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self::with_reply(Ok(reply.into()))
    }

    pub fn failing(error: impl Into<String>) -> Self {
        Self::with_reply(Err(error.into()))
    }

    fn with_reply(reply: Result<String, String>) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmService for ScriptedLlm {
    async fn complete(&self, prompt: &str) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        self.reply.clone().map_err(DomainError::external)
    }
}

pub struct SlowLlm(pub Duration);

#[async_trait]
impl LlmService for SlowLlm {
    async fn complete(&self, _prompt: &str) -> Result<String, DomainError> {
        tokio::time::sleep(self.0).await;
        Ok("too late".to_string())
    }
}
