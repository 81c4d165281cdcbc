//! # Support Question Answering
//!
//! This crate answers natural-language support questions in three sequential
//! stages: an LLM extracts search keywords from the question, a hosted search
//! index is queried with those keywords, and the LLM synthesizes an HTML answer
//! from the retrieved articles.

pub mod constants;
pub mod errors;
pub mod keywords;
pub mod prompts;
pub mod providers;
pub mod synthesis;
pub mod types;

pub use errors::{ErrorKind, PipelineError};
pub use types::{
    AnswerPipeline, AnswerPipelineBuilder, Article, ArticleRendering, PipelineOptions,
    PipelineResult, SourcesPolicy,
};

use tracing::{error, info};

impl AnswerPipeline {
    /// Answers a support query.
    ///
    /// Runs keyword extraction, article search and answer synthesis in order.
    /// A failure in any stage aborts the run and is returned unchanged; no
    /// stage is retried and no partial answer is produced.
    pub async fn answer(&self, query: &str) -> Result<PipelineResult, PipelineError> {
        info!("[answer] received query: {query:?}");

        let keywords = keywords::extract_keywords(self.ai_provider.as_ref(), query)
            .await
            .inspect_err(|e| error!("[answer] Keyword extraction error: {e:?}"))?;

        let articles = self
            .search_provider
            .search(&keywords)
            .await
            .inspect_err(|e| error!("[answer] Article search error: {e:?}"))?;
        info!(
            "[answer] search for {keywords:?} returned {} articles",
            articles.len()
        );

        let text =
            synthesis::synthesize_answer(self.ai_provider.as_ref(), query, &articles, &self.options)
                .await
                .inspect_err(|e| error!("[answer] Answer synthesis error: {e:?}"))?;

        Ok(PipelineResult {
            text,
            keywords,
            articles,
        })
    }
}
