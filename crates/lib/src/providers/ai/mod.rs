pub mod openai;

use crate::errors::PipelineError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for interacting with an LLM chat-completion provider.
///
/// Both the keyword extraction and the answer synthesis stages talk to the
/// model exclusively through this trait, so tests can substitute a mock.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Generates a completion from a system and a user message.
    ///
    /// The result is the literal text content of the first completion choice.
    async fn generate(&self, system_prompt: &str, user_prompt: &str)
        -> Result<String, PipelineError>;
}

dyn_clone::clone_trait_object!(AiProvider);
