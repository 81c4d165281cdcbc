use crate::{
    errors::PipelineError,
    providers::{ai::AiProvider, search::SearchProvider},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A support article retrieved from the search index.
///
/// Articles only live for the duration of one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    /// The article body or snippet as stored in the index.
    pub body: String,
    /// The public help-center URL, derived from `id`.
    pub link: String,
}

/// Who is responsible for the "Sources" section of the final answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourcesPolicy {
    /// The model is asked to append its own sources; its output is returned as-is.
    ModelAppended,
    /// The model writes the answer body only and the pipeline appends a
    /// sources list built from the retrieved articles.
    #[default]
    CallerAppended,
}

/// How retrieved articles are presented to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleRendering {
    /// Title, full body and link of every article.
    #[default]
    InlineBody,
    /// Title and link only.
    LinkOnly,
}

/// Construction-time options of the answer pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineOptions {
    #[serde(default)]
    pub sources_policy: SourcesPolicy,
    #[serde(default)]
    pub article_rendering: ArticleRendering,
}

/// The outcome of one pipeline run, including the intermediate stage outputs.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineResult {
    /// The final HTML answer.
    pub text: String,
    /// The verbatim keyword stage output that was sent to the search index.
    pub keywords: String,
    /// The articles the answer was synthesized from.
    pub articles: Vec<Article>,
}

/// Runs the keyword → search → synthesis pipeline.
pub struct AnswerPipeline {
    pub ai_provider: Box<dyn AiProvider>,
    pub search_provider: Box<dyn SearchProvider>,
    pub options: PipelineOptions,
}

impl fmt::Debug for AnswerPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnswerPipeline")
            .field("ai_provider", &self.ai_provider)
            .field("search_provider", &self.search_provider)
            .field("options", &self.options)
            .finish()
    }
}

/// A builder for creating `AnswerPipeline` instances.
#[derive(Default)]
pub struct AnswerPipelineBuilder {
    ai_provider: Option<Box<dyn AiProvider>>,
    search_provider: Option<Box<dyn SearchProvider>>,
    options: PipelineOptions,
}

impl AnswerPipelineBuilder {
    /// Creates a new `AnswerPipelineBuilder`.
    ///
    /// # Examples
    ///
    /// ```
    /// use supportrag::AnswerPipelineBuilder;
    ///
    /// let builder = AnswerPipelineBuilder::new();
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the LLM provider used by the keyword and synthesis stages.
    pub fn ai_provider(mut self, ai_provider: Box<dyn AiProvider>) -> Self {
        self.ai_provider = Some(ai_provider);
        self
    }

    /// Sets the search provider used by the retrieval stage.
    pub fn search_provider(mut self, search_provider: Box<dyn SearchProvider>) -> Self {
        self.search_provider = Some(search_provider);
        self
    }

    pub fn sources_policy(mut self, policy: SourcesPolicy) -> Self {
        self.options.sources_policy = policy;
        self
    }

    pub fn article_rendering(mut self, rendering: ArticleRendering) -> Self {
        self.options.article_rendering = rendering;
        self
    }

    pub fn options(mut self, options: PipelineOptions) -> Self {
        self.options = options;
        self
    }

    /// Builds the `AnswerPipeline`.
    ///
    /// Fails if either provider has not been set.
    pub fn build(self) -> Result<AnswerPipeline, PipelineError> {
        let ai_provider = self.ai_provider.ok_or(PipelineError::MissingAiProvider)?;
        let search_provider = self
            .search_provider
            .ok_or(PipelineError::MissingSearchProvider)?;
        Ok(AnswerPipeline {
            ai_provider,
            search_provider,
            options: self.options,
        })
    }
}
