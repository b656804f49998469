use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

use crate::application::services::KnowledgeBase;
use crate::domain::{ports::LlmService, DomainError, Resolution};

#[derive(Debug, Clone)]
pub struct ResolverSettings {
    pub threshold: f32,
    pub clarification_message: String,
    pub error_prefix: String,
    pub fallback_timeout: Duration,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            threshold: 0.50,
            clarification_message: "I didn’t catch that. Could you rephrase your question?"
                .to_string(),
            error_prefix: "Oops, something went wrong: ".to_string(),
            fallback_timeout: Duration::from_secs(60),
        }
    }
}

/// Answers a query from the FAQ index when the nearest question is close
/// enough, otherwise from the fallback model.
pub struct AnswerResolver {
    knowledge_base: Arc<KnowledgeBase>,
    llm: Arc<dyn LlmService>,
    settings: ResolverSettings,
}

impl AnswerResolver {
    pub fn new(
        knowledge_base: Arc<KnowledgeBase>,
        llm: Arc<dyn LlmService>,
        settings: ResolverSettings,
    ) -> Self {
        Self {
            knowledge_base,
            llm,
            settings,
        }
    }

    pub fn with_defaults(knowledge_base: Arc<KnowledgeBase>, llm: Arc<dyn LlmService>) -> Self {
        Self::new(knowledge_base, llm, ResolverSettings::default())
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.settings.threshold = threshold;
        self
    }

    pub fn with_fallback_timeout(mut self, timeout: Duration) -> Self {
        self.settings.fallback_timeout = timeout;
        self
    }

    pub fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    pub fn knowledge_base(&self) -> &Arc<KnowledgeBase> {
        &self.knowledge_base
    }

    pub async fn resolve(&self, query: &str) -> Resolution {
        self.resolve_with_threshold(query, self.settings.threshold).await
    }

    /// Never fails: infrastructure errors come back as [`Resolution::Failed`].
    #[instrument(skip(self, query), fields(query_len = query.len()))]
    pub async fn resolve_with_threshold(&self, query: &str, threshold: f32) -> Resolution {
        if query.trim().is_empty() {
            tracing::debug!("blank query");
            return Resolution::Clarify {
                message: self.settings.clarification_message.clone(),
            };
        }

        let outcome = if (0.0..=1.0).contains(&threshold) {
            self.lookup_or_generate(query, threshold).await
        } else {
            Err(DomainError::validation(format!(
                "similarity threshold must be within [0, 1], got {threshold}"
            )))
        };

        match outcome {
            Ok(resolution) => resolution,
            Err(error) => {
                tracing::warn!(error = %error, "resolution failed");
                let message = format!("{}{}", self.settings.error_prefix, error);
                Resolution::Failed { error, message }
            }
        }
    }

    async fn lookup_or_generate(
        &self,
        query: &str,
        threshold: f32,
    ) -> Result<Resolution, DomainError> {
        if let Some(hit) = self.knowledge_base.nearest(query).await? {
            let similarity = hit.similarity();
            if similarity >= threshold {
                if let Some(answer) = hit.document.answer() {
                    tracing::info!(faq_index = hit.document.faq_index, similarity, "faq match");
                    return Ok(Resolution::Matched {
                        answer: answer.to_string(),
                        faq_index: hit.document.faq_index,
                        similarity,
                    });
                }
            }
            tracing::debug!(similarity, threshold, "no confident match");
        }

        let completion = self.llm.complete(query);
        let answer = tokio::time::timeout(self.settings.fallback_timeout, completion)
            .await
            .map_err(|_| {
                DomainError::timeout(format!(
                    "fallback model gave no answer within {}s",
                    self.settings.fallback_timeout.as_secs_f32()
                ))
            })??;

        tracing::info!("fallback answer");
        Ok(Resolution::Generated { answer })
    }
}
