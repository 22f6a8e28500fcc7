use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::info;

use super::stateless_llm_interface::{LLMError, Message, StatelessLLMInterface};
use crate::config::LLMConfig;

/// DashScope text-generation client (Qwen models).
pub struct DashScopeLLM {
    client: Client,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    model: &'a str,
    input: GenerationInput,
    parameters: GenerationParameters,
}

#[derive(Debug, Serialize)]
struct GenerationInput {
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct GenerationParameters {
    result_format: &'static str,
}

impl DashScopeLLM {
    pub fn new(base_url: String, model: String, timeout: Option<Duration>) -> Result<Self, LLMError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        info!(
            "Initialized DashScopeLLM: model={}, base_url={}, timeout={:?}",
            model, base_url, timeout
        );
        Ok(Self {
            client,
            base_url,
            model,
        })
    }

    pub fn from_config(config: &LLMConfig) -> Result<Self, LLMError> {
        Self::new(
            config.base_url.clone(),
            config.model.clone(),
            config.timeout_secs.map(Duration::from_secs),
        )
    }
}

#[async_trait]
impl StatelessLLMInterface for DashScopeLLM {
    async fn chat_completion(
        &self,
        api_key: &str,
        messages: Vec<Message>,
    ) -> Result<Value, LLMError> {
        let request = GenerationRequest {
            model: &self.model,
            input: GenerationInput { messages },
            parameters: GenerationParameters {
                result_format: "message",
            },
        };

        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        // The body is decoded before the status is looked at, so a
        // non-JSON error page surfaces as a decode failure.
        let status = response.status();
        let body = response.bytes().await?;
        let payload: Value = serde_json::from_slice(&body)?;

        if !status.is_success() {
            return Err(LLMError::Upstream {
                status: status.as_u16(),
                payload,
            });
        }

        Ok(payload)
    }
}
