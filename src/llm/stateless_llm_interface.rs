use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LLMError {
    #[error("request to provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned a non-JSON body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("provider returned status {status}")]
    Upstream { status: u16, payload: Value },
}

/// Interface for a stateless language model.
/// Stateless means every call carries its full conversation and credentials.
#[async_trait]
pub trait StatelessLLMInterface: Send + Sync {
    /// Run one chat completion and return the provider's raw response envelope.
    async fn chat_completion(
        &self,
        api_key: &str,
        messages: Vec<Message>,
    ) -> Result<Value, LLMError>;
}
