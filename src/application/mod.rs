//! Application layer - Use cases and orchestration.
//!
//! Services here depend on domain ports (traits) rather than concrete
//! adapters, so tests can swap in deterministic doubles.

pub mod services;

pub use services::{AnswerResolver, KnowledgeBase, ResolverSettings};
