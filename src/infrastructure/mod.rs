pub mod bootstrap;
pub mod config;
pub mod dataset;
pub mod embedding;
pub mod llm;
pub mod ollama;
pub mod vector_store;

pub use bootstrap::{build_resolver, build_resolver_with};
pub use config::{AppConfig, IndexBackend};
pub use embedding::OllamaEmbedding;
pub use llm::OllamaLlm;
pub use vector_store::{InMemoryVectorStore, QdrantVectorStore};
