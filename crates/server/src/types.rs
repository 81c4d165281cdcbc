use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize, Default)]
pub struct DebugParams {
    pub debug: Option<bool>,
}

/// The request body of `POST /query`. A missing `query` is treated as empty.
#[derive(Debug, Deserialize, Default)]
pub struct QueryRequest {
    #[serde(default)]
    pub query: String,
}

/// The response body of `POST /query`.
#[derive(Debug, Serialize, Deserialize)]
pub struct QueryResponse {
    pub response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<Value>,
}
