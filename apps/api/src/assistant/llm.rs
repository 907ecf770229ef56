use async_trait::async_trait;
use tracing::{info, warn};

use crate::assistant::prompts::{
    REVIEW_PROMPT, REWRITE_BULLET_PROMPT, REWRITE_MAX_TOKENS, REWRITE_TEMPERATURE,
    SUGGEST_SKILLS_PROMPT,
};
use crate::assistant::{AnalysisResult, ResumeAssistant};
use crate::errors::AppError;
use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, PLAIN_TEXT_SYSTEM};
use crate::llm_client::{CallOptions, LlmClient, LlmError};
use crate::models::resume::ResumeModel;

/// Bullets shorter than this are returned as-is without a model call.
const MIN_REWRITE_CHARS: usize = 5;

/// Assistant backed by the hosted model through [`LlmClient`].
pub struct LlmAssistant(pub LlmClient);

#[async_trait]
impl ResumeAssistant for LlmAssistant {
    async fn rewrite_bullet(&self, text: &str) -> Result<String, AppError> {
        if text.trim().chars().count() < MIN_REWRITE_CHARS {
            return Ok(text.to_string());
        }

        let prompt = REWRITE_BULLET_PROMPT.replace("{text}", text);
        let options = CallOptions {
            max_tokens: REWRITE_MAX_TOKENS,
            temperature: Some(REWRITE_TEMPERATURE),
        };

        match self.0.call_text(&prompt, PLAIN_TEXT_SYSTEM, options).await {
            Ok(rewritten) => Ok(rewritten),
            // A blank reply leaves the bullet as the user wrote it.
            Err(LlmError::EmptyContent) => Ok(text.to_string()),
            Err(e) => Err(AppError::Llm(format!("Failed to rewrite bullet: {e}"))),
        }
    }

    async fn review(&self, snapshot: &ResumeModel) -> Result<AnalysisResult, AppError> {
        let resume_json = serde_json::to_string(snapshot)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize resume: {e}")))?;
        let prompt = REVIEW_PROMPT.replace("{resume_json}", &resume_json);

        let result: AnalysisResult = self
            .0
            .call_json(&prompt, JSON_ONLY_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Failed to review resume: {e}")))?;

        info!(
            "Review returned {} feedback items, {} keywords, {} improved roles",
            result.feedback.len(),
            result.missing_keywords.len(),
            result.improved_experience.len()
        );
        Ok(result)
    }

    async fn suggest_skills(&self, role: &str) -> Vec<String> {
        let prompt = SUGGEST_SKILLS_PROMPT.replace("{role}", role);
        match self.0.call_json::<Vec<String>>(&prompt, JSON_ONLY_SYSTEM).await {
            Ok(skills) => skills,
            Err(e) => {
                warn!("Skill suggestion for '{role}' failed, returning none: {e}");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_assistant() -> LlmAssistant {
        LlmAssistant(LlmClient::new("test-key".to_string()).unwrap())
    }

    #[tokio::test]
    async fn test_short_bullet_returned_without_call() {
        let assistant = offline_assistant();
        assert_eq!(assistant.rewrite_bullet("Led").await.unwrap(), "Led");
        assert_eq!(assistant.rewrite_bullet("").await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_propose_rewrite_keeps_blank_drafts_in_place() {
        let assistant = offline_assistant();
        let points = vec!["".to_string(), "Led".to_string(), "  ".to_string()];
        assert_eq!(assistant.propose_rewrite(&points).await.unwrap(), points);
    }
}
