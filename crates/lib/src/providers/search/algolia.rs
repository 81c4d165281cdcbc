use crate::{
    constants::{EXCLUDE_ANNOUNCEMENTS_FILTER, HITS_PER_PAGE},
    errors::PipelineError,
    providers::{
        read_error_body,
        search::{article_link, SearchProvider},
    },
    types::Article,
};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::Debug;
use tracing::{debug, warn};

// --- Algolia request and response structures ---

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct AlgoliaQuery<'a> {
    query: &'a str,
    hits_per_page: usize,
    filters: &'a str,
}

#[derive(Deserialize, Debug)]
struct AlgoliaResponse {
    hits: Vec<Map<String, Value>>,
}

/// Connection settings for an Algolia index.
#[derive(Clone, Debug)]
pub struct AlgoliaConfig {
    pub app_id: String,
    pub api_key: String,
    pub index_name: String,
    /// Overrides the `https://<app_id>-dsn.algolia.net` host.
    pub api_url: Option<String>,
    /// Origin used to derive article links.
    pub support_base_url: String,
    /// The hit attribute that carries the article body.
    pub body_field: String,
}

// --- Algolia Provider implementation ---

/// A provider for querying a Zendesk help-center index hosted on Algolia.
#[derive(Clone)]
pub struct AlgoliaProvider {
    client: ReqwestClient,
    query_url: String,
    config: AlgoliaConfig,
}

impl Debug for AlgoliaProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlgoliaProvider")
            .field("query_url", &self.query_url)
            .field("app_id", &self.config.app_id)
            .field("index_name", &self.config.index_name)
            .finish_non_exhaustive()
    }
}

impl AlgoliaProvider {
    /// Creates a new `AlgoliaProvider`.
    pub fn new(config: AlgoliaConfig) -> Result<Self, PipelineError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(PipelineError::ReqwestClientBuild)?;
        let host = config
            .api_url
            .clone()
            .unwrap_or_else(|| format!("https://{}-dsn.algolia.net", config.app_id));
        let query_url = format!(
            "{}/1/indexes/{}/query",
            host.trim_end_matches('/'),
            config.index_name
        );
        Ok(Self {
            client,
            query_url,
            config,
        })
    }

    pub fn query_url(&self) -> &str {
        &self.query_url
    }

    /// Converts a raw hit into an `Article`.
    ///
    /// Returns `None` when the hit has no usable `id` or `title`; a missing body
    /// is treated as empty.
    fn hit_to_article(&self, hit: &Map<String, Value>) -> Option<Article> {
        let id = match hit.get("id") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => return None,
        };
        let title = hit.get("title").and_then(Value::as_str)?.to_string();
        let body = hit
            .get(&self.config.body_field)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let link = article_link(&self.config.support_base_url, &id);
        Some(Article {
            id,
            title,
            body,
            link,
        })
    }
}

#[async_trait]
impl SearchProvider for AlgoliaProvider {
    async fn search(&self, query: &str) -> Result<Vec<Article>, PipelineError> {
        let request_body = AlgoliaQuery {
            query,
            hits_per_page: HITS_PER_PAGE,
            filters: EXCLUDE_ANNOUNCEMENTS_FILTER,
        };

        debug!(url = %self.query_url, payload = ?request_body, "--> Querying Algolia");

        let response = self
            .client
            .post(&self.query_url)
            .header("X-Algolia-API-Key", &self.config.api_key)
            .header("X-Algolia-Application-Id", &self.config.app_id)
            .json(&request_body)
            .send()
            .await
            .map_err(PipelineError::SearchRequest)?;

        let status = response.status();
        if !status.is_success() {
            let body = read_error_body(response).await;
            return Err(PipelineError::SearchApi {
                status: status.as_u16(),
                body,
            });
        }

        let algolia_response: AlgoliaResponse = response
            .json()
            .await
            .map_err(PipelineError::SearchDeserialization)?;

        let articles = algolia_response
            .hits
            .iter()
            .filter_map(|hit| {
                let article = self.hit_to_article(hit);
                if article.is_none() {
                    warn!(
                        object_id = ?hit.get("objectID"),
                        "Skipping search hit without a usable id or title"
                    );
                }
                article
            })
            .take(HITS_PER_PAGE)
            .collect::<Vec<_>>();

        debug!("<-- Algolia returned {} usable articles", articles.len());

        Ok(articles)
    }
}
