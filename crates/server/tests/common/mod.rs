//! # Common Test Utilities
//!
//! `TestApp` spawns the real router on a random port, wired to a single
//! `httpmock::MockServer` that stands in for both the chat-completion API and
//! the Algolia index.

// Not every test file uses every helper.
#![allow(unused)]

use anyhow::Result;
use axum::serve;
use httpmock::MockServer;
use reqwest::Client;
use serde_json::{json, Value};
use std::net::SocketAddr;
use supportrag::{ArticleRendering, SourcesPolicy};
use supportrag_server::{
    config::AppConfig,
    router,
    state::{build_app_state, AppState},
};
use tokio::{net::TcpListener, task::JoinHandle};

pub const TEST_INDEX: &str = "test_index";
pub const CHAT_PATH: &str = "/v1/chat/completions";

pub fn search_path() -> String {
    format!("/1/indexes/{TEST_INDEX}/query")
}

/// A configuration pointing every upstream at the mock server.
pub fn test_config(mock_server: &MockServer) -> AppConfig {
    AppConfig {
        port: 0,
        openai_api_key: "sk-test".to_string(),
        ai_api_url: mock_server.url(CHAT_PATH),
        ai_model: "gpt-4o".to_string(),
        algolia_app_id: "TESTAPP".to_string(),
        algolia_api_key: "search-key".to_string(),
        algolia_index_name: TEST_INDEX.to_string(),
        algolia_api_url: Some(mock_server.base_url()),
        support_base_url: "https://support.cognisantmd.com".to_string(),
        search_body_field: "body_safe".to_string(),
        sources_policy: SourcesPolicy::CallerAppended,
        article_rendering: ArticleRendering::InlineBody,
    }
}

/// A chat-completion response body with a single choice.
pub fn completion(content: &str) -> Value {
    json!({"choices": [{"message": {"role": "assistant", "content": content}}]})
}

// --- Full Application Test Harness ---

pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    pub app_state: AppState,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the application with the default test configuration.
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with(|_| {}).await
    }

    /// Spawns the application after letting the caller adjust the configuration.
    pub async fn spawn_with(customize: impl FnOnce(&mut AppConfig)) -> Result<Self> {
        dotenvy::dotenv().ok();
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let mock_server = MockServer::start_async().await;
        let mut config = test_config(&mock_server);
        customize(&mut config);
        let app_state = build_app_state(config).await?;
        let app_state_for_harness = app_state.clone();

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let server_handle = tokio::spawn(async move {
            let app = router::create_router(app_state);
            let server = serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {}", e);
            }
        });

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
            app_state: app_state_for_harness,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub async fn post_query(&self, body: &Value) -> Result<reqwest::Response> {
        Ok(self
            .client
            .post(format!("{}/query", self.address))
            .json(body)
            .send()
            .await?)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
