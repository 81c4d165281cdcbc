//! # Application State
//!
//! This module defines the shared application state (`AppState`) and the logic
//! for building it at startup. The state holds the configuration and the fully
//! wired answer pipeline; it is shared read-only by all request handlers.

use crate::config::AppConfig;
use std::sync::Arc;
use supportrag::{
    providers::{
        ai::openai::OpenAiProvider,
        search::algolia::{AlgoliaConfig, AlgoliaProvider},
    },
    AnswerPipeline, AnswerPipelineBuilder,
};
use tracing::info;

/// The shared application state, accessible from all request handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// The application's configuration.
    pub config: Arc<AppConfig>,
    /// The keyword → search → synthesis pipeline.
    pub pipeline: Arc<AnswerPipeline>,
}

/// Builds the shared application state from the configuration.
///
/// Instantiates the OpenAI and Algolia clients from the explicit
/// configuration and assembles them into an `AnswerPipeline`.
pub async fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let ai_provider = OpenAiProvider::new(
        config.ai_api_url.clone(),
        config.openai_api_key.clone(),
        config.ai_model.clone(),
    )?;

    let search_provider = AlgoliaProvider::new(AlgoliaConfig {
        app_id: config.algolia_app_id.clone(),
        api_key: config.algolia_api_key.clone(),
        index_name: config.algolia_index_name.clone(),
        api_url: config
            .algolia_api_url
            .clone()
            .filter(|url| !url.trim().is_empty()),
        support_base_url: config.support_base_url.clone(),
        body_field: config.search_body_field.clone(),
    })?;

    info!(
        "Answer pipeline: model '{}', search endpoint '{}', {:?}",
        ai_provider.model(),
        search_provider.query_url(),
        config.pipeline_options()
    );

    let pipeline = AnswerPipelineBuilder::new()
        .ai_provider(Box::new(ai_provider))
        .search_provider(Box::new(search_provider))
        .options(config.pipeline_options())
        .build()?;

    Ok(AppState {
        config: Arc::new(config),
        pipeline: Arc::new(pipeline),
    })
}
