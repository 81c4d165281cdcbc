use thiserror::Error;

/// Custom error types for the answer pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to AI provider: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize AI provider response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("AI provider returned an error ({status}): {body}")]
    AiApi { status: u16, body: String },
    #[error("AI provider response did not contain a completion")]
    AiEmptyResponse,
    #[error("Failed to send request to search provider: {0}")]
    SearchRequest(reqwest::Error),
    #[error("Failed to deserialize search provider response: {0}")]
    SearchDeserialization(reqwest::Error),
    #[error("Search provider returned an error ({status}): {body}")]
    SearchApi { status: u16, body: String },
    #[error("AI provider is not configured")]
    MissingAiProvider,
    #[error("Search provider is not configured")]
    MissingSearchProvider,
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// Coarse classification of a `PipelineError`, used by callers that need to
/// map failures onto a transport-level status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The upstream service could not be reached.
    UpstreamTransport,
    /// The upstream service answered, but not with a usable payload.
    UpstreamResponse,
    /// The pipeline itself is misconfigured.
    Configuration,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::UpstreamTransport => "upstream_transport",
            ErrorKind::UpstreamResponse => "upstream_response",
            ErrorKind::Configuration => "configuration",
        }
    }
}

impl PipelineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PipelineError::AiRequest(_) | PipelineError::SearchRequest(_) => {
                ErrorKind::UpstreamTransport
            }
            PipelineError::AiDeserialization(_)
            | PipelineError::AiApi { .. }
            | PipelineError::AiEmptyResponse
            | PipelineError::SearchDeserialization(_)
            | PipelineError::SearchApi { .. } => ErrorKind::UpstreamResponse,
            PipelineError::ReqwestClientBuild(_)
            | PipelineError::MissingAiProvider
            | PipelineError::MissingSearchProvider
            | PipelineError::Regex(_) => ErrorKind::Configuration,
        }
    }
}
