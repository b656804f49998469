use crate::domain::errors::DomainError;

/// Outcome of resolving one user query.
#[derive(Debug)]
pub enum Resolution {
    /// The query was blank; ask the user to rephrase.
    Clarify { message: String },
    /// A stored answer cleared the similarity threshold.
    Matched {
        answer: String,
        faq_index: usize,
        similarity: f32,
    },
    /// No confident match; the fallback model answered.
    Generated { answer: String },
    /// Embedding, index or fallback model failed.
    Failed { error: DomainError, message: String },
}

impl Resolution {
    pub fn kind(&self) -> ResolutionKind {
        match self {
            Self::Clarify { .. } => ResolutionKind::Clarify,
            Self::Matched { .. } => ResolutionKind::Faq,
            Self::Generated { .. } => ResolutionKind::Fallback,
            Self::Failed { .. } => ResolutionKind::Error,
        }
    }

    /// The text shown to the user for this outcome.
    pub fn message(&self) -> &str {
        match self {
            Self::Clarify { message } | Self::Failed { message, .. } => message.as_str(),
            Self::Matched { answer, .. } | Self::Generated { answer } => answer.as_str(),
        }
    }

    pub fn into_message(self) -> String {
        match self {
            Self::Clarify { message } | Self::Failed { message, .. } => message,
            Self::Matched { answer, .. } | Self::Generated { answer } => answer,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionKind {
    Clarify,
    Faq,
    Fallback,
    Error,
}
