mod knowledge_base;
mod resolver;

pub use knowledge_base::KnowledgeBase;
pub use resolver::{AnswerResolver, ResolverSettings};
