use std::sync::Arc;

use crate::api_key::{ApiKeyProvider, EnvApiKey};
use crate::config::Config;
use crate::llm::{DashScopeLLM, StatelessLLMInterface};

#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn StatelessLLMInterface>,
    pub api_key: Arc<dyn ApiKeyProvider>,
}

impl AppState {
    /// Wire the DashScope client and an environment-backed key from config.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let llm = Arc::new(DashScopeLLM::from_config(&config.llm_config)?);
        let api_key = Arc::new(EnvApiKey::new(config.llm_config.api_key_env.clone()));
        Ok(Self::with_parts(llm, api_key))
    }

    pub fn with_parts(
        llm: Arc<dyn StatelessLLMInterface>,
        api_key: Arc<dyn ApiKeyProvider>,
    ) -> Self {
        Self {
            llm,
            api_key,
        }
    }
}
