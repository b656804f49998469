mod conversation;
mod embedding;
mod faq;
mod resolution;

pub use conversation::{ChatRole, ChatSession, ChatTurn};
pub use embedding::Embedding;
pub use faq::{
    index_documents, validate_records, FaqDocument, FaqMetadata, FaqRecord, SearchResult,
};
pub use resolution::{Resolution, ResolutionKind};
