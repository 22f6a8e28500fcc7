use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use anyhow::Result;
use regex::Regex;

pub const DASHSCOPE_GENERATION_URL: &str =
    "https://dashscope.aliyuncs.com/api/v1/services/aigc/text-generation/generation";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    #[serde(default)]
    pub llm_config: LLMConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Settings for the remote text-generation provider.
///
/// The API key is deliberately absent: only the name of the environment
/// variable holding it lives here, and the value is read per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Outbound request timeout. `None` leaves the call unbounded.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DASHSCOPE_GENERATION_URL.to_string()
}

fn default_model() -> String {
    "qwen-max".to_string()
}

fn default_api_key_env() -> String {
    "DASHSCOPE_API_KEY".to_string()
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            timeout_secs: None,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            anyhow::bail!("Configuration file not found: {}", path);
        }

        let content = fs::read_to_string(path)?;
        let content = substitute_env_vars(&content)?;

        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".jsonld") || path_lower.ends_with(".json") {
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            let config: Config = serde_yaml::from_str(&content)?;
            Ok(config)
        }
    }
}

/// Replace `${VAR_NAME}` with the value from the environment.
/// Unset variables are left as written.
fn substitute_env_vars(content: &str) -> Result<String> {
    let pattern = Regex::new(r"\$\{(\w+)\}")?;
    let replaced = pattern.replace_all(content, |caps: &regex::Captures| {
        std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
    });
    Ok(replaced.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, content: &str) -> String {
        let path = std::env::temp_dir().join(format!(
            "intent-proxy-{}-{}",
            std::process::id(),
            name
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn empty_yaml_document_uses_defaults() {
        let path = write_temp("empty.yaml", "{}\n");
        let config = Config::load(&path).unwrap();

        assert_eq!(config.system_config.port, 3000);
        assert_eq!(config.llm_config.model, "qwen-max");
        assert_eq!(config.llm_config.api_key_env, "DASHSCOPE_API_KEY");
        assert_eq!(config.llm_config.base_url, DASHSCOPE_GENERATION_URL);
        assert!(config.llm_config.timeout_secs.is_none());
    }

    #[test]
    fn loads_json_by_extension() {
        let path = write_temp(
            "conf.json",
            r#"{"system_config":{"host":"127.0.0.1","port":8088},"llm_config":{"timeout_secs":15}}"#,
        );
        let config = Config::load(&path).unwrap();

        assert_eq!(config.system_config.host, "127.0.0.1");
        assert_eq!(config.system_config.port, 8088);
        assert_eq!(config.llm_config.timeout_secs, Some(15));
    }

    #[test]
    fn substitutes_set_variables_and_keeps_unset_ones() {
        std::env::set_var("INTENT_PROXY_TEST_MODEL", "qwen-plus");
        let out = substitute_env_vars(
            "model: ${INTENT_PROXY_TEST_MODEL}\nother: ${INTENT_PROXY_TEST_UNSET_VAR}",
        )
        .unwrap();

        assert_eq!(out, "model: qwen-plus\nother: ${INTENT_PROXY_TEST_UNSET_VAR}");
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(Config::load("/definitely/not/here/conf.yaml").is_err());
    }
}
