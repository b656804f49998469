use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// A static question/answer pair. Identity is its position in the knowledge base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqRecord {
    pub question: String,
    pub answer: String,
}

impl FaqRecord {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Searchable form of a [`FaqRecord`]: the question is the indexed content,
/// the answer rides along as metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqDocument {
    pub faq_index: usize,
    pub content: String,
    pub metadata: FaqMetadata,
}

impl FaqDocument {
    pub fn from_record(faq_index: usize, record: &FaqRecord) -> Self {
        Self {
            faq_index,
            content: record.question.clone(),
            metadata: FaqMetadata {
                answer: record.answer.clone(),
            },
        }
    }

    /// The attached answer, or `None` when it is blank.
    pub fn answer(&self) -> Option<&str> {
        let answer = self.metadata.answer.as_str();
        (!answer.trim().is_empty()).then_some(answer)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaqMetadata {
    pub answer: String,
}

/// One hit from the index. `distance` is lower-is-closer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub document: FaqDocument,
    pub distance: f32,
}

impl SearchResult {
    pub fn similarity(&self) -> f32 {
        1.0 - self.distance
    }
}

/// Builds one document per record, preserving order.
pub fn index_documents(records: &[FaqRecord]) -> Vec<FaqDocument> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| FaqDocument::from_record(i, record))
        .collect()
}

/// Rejects datasets that would break the one-answer-per-document invariant.
pub fn validate_records(records: &[FaqRecord]) -> Result<(), DomainError> {
    if records.is_empty() {
        return Err(DomainError::validation(
            "knowledge base must contain at least one record",
        ));
    }

    for (i, record) in records.iter().enumerate() {
        if record.question.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "record {i} has an empty question"
            )));
        }
        if record.answer.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "record {i} has an empty answer"
            )));
        }
    }

    Ok(())
}
