#![allow(dead_code)]
//! # Common Test Utilities
//!
//! This module provides mock providers and fixtures shared by the library
//! tests, so the pipeline can be exercised without network access.

use async_trait::async_trait;
use dotenvy::dotenv;
use std::sync::{Arc, Once, RwLock};
use supportrag::{
    providers::{ai::AiProvider, search::SearchProvider},
    Article, PipelineError,
};

static INIT: Once = Once::new();

/// Initializes the tracing subscriber and loads .env for tests.
pub fn setup_tracing() {
    INIT.call_once(|| {
        dotenv().ok();
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();
    });
}

// --- Mock AI Provider ---

/// Returns canned completions in order and records every prompt pair it receives.
#[derive(Clone, Debug)]
pub struct MockAiProvider {
    pub call_history: Arc<RwLock<Vec<(String, String)>>>,
    pub responses: Arc<RwLock<Vec<String>>>,
}

impl MockAiProvider {
    pub fn new(responses: Vec<&str>) -> Self {
        Self {
            call_history: Arc::new(RwLock::new(Vec::new())),
            responses: Arc::new(RwLock::new(
                responses.into_iter().rev().map(String::from).collect(),
            )),
        }
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.call_history.read().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, PipelineError> {
        self.call_history
            .write()
            .unwrap()
            .push((system_prompt.to_string(), user_prompt.to_string()));

        self.responses
            .write()
            .unwrap()
            .pop()
            .ok_or(PipelineError::AiEmptyResponse)
    }
}

// --- Mock Search Provider ---

/// Returns a fixed article list (or a fixed API failure) and records the queries.
#[derive(Clone, Debug)]
pub struct MockSearchProvider {
    pub queries: Arc<RwLock<Vec<String>>>,
    pub articles: Vec<Article>,
    pub fail_with_status: Option<u16>,
}

impl MockSearchProvider {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            queries: Arc::new(RwLock::new(Vec::new())),
            articles,
            fail_with_status: None,
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            fail_with_status: Some(status),
            ..Self::new(Vec::new())
        }
    }

    pub fn received_queries(&self) -> Vec<String> {
        self.queries.read().unwrap().clone()
    }
}

#[async_trait]
impl SearchProvider for MockSearchProvider {
    async fn search(&self, query: &str) -> Result<Vec<Article>, PipelineError> {
        self.queries.write().unwrap().push(query.to_string());
        match self.fail_with_status {
            Some(status) => Err(PipelineError::SearchApi {
                status,
                body: "mock failure".to_string(),
            }),
            None => Ok(self.articles.clone()),
        }
    }
}

// --- Fixtures ---

pub fn article(id: &str, title: &str, body: &str) -> Article {
    Article {
        id: id.to_string(),
        title: title.to_string(),
        body: body.to_string(),
        link: format!("https://support.cognisantmd.com/hc/en-us/articles/{id}"),
    }
}

pub fn two_articles() -> Vec<Article> {
    vec![
        article("100", "Resetting your password", "Click 'Forgot password'."),
        article("200", "Account lockout", "Accounts lock after 5 attempts."),
    ]
}
