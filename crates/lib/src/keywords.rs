//! # Keyword Extraction
//!
//! The first pipeline stage: asks the model for three search keywords
//! describing the user's support question.

use crate::{
    errors::PipelineError,
    prompts::tasks::{KEYWORD_EXTRACTION_SYSTEM_PROMPT, KEYWORD_EXTRACTION_USER_PROMPT},
    providers::ai::AiProvider,
};
use tracing::{debug, info};

/// Builds the system and user prompts for keyword extraction.
pub fn build_keyword_prompts(query: &str) -> (String, String) {
    let user_prompt = KEYWORD_EXTRACTION_USER_PROMPT.replace("{query}", query);
    (KEYWORD_EXTRACTION_SYSTEM_PROMPT.to_string(), user_prompt)
}

/// Extracts search keywords from a support query.
///
/// The completion text is returned exactly as the model produced it. It is not
/// parsed into individual terms, trimmed, or otherwise normalized.
pub async fn extract_keywords(
    ai_provider: &dyn AiProvider,
    query: &str,
) -> Result<String, PipelineError> {
    info!("[extract_keywords] received query: {query:?}");
    let (system_prompt, user_prompt) = build_keyword_prompts(query);

    debug!(system_prompt = %system_prompt, user_prompt = %user_prompt, "--> Sending keyword prompts to AI Provider");

    let keywords = ai_provider.generate(&system_prompt, &user_prompt).await?;

    debug!("<-- Keywords from AI: {}", keywords);
    Ok(keywords)
}
