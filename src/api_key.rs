/// Source of the provider API key, consulted on every request.
pub trait ApiKeyProvider: Send + Sync {
    /// Name reported when the key is missing.
    fn name(&self) -> &str;

    /// Current key, `None` when unset or empty.
    fn api_key(&self) -> Option<String>;
}

/// Reads the key from a process environment variable at call time.
pub struct EnvApiKey {
    var: String,
}

impl EnvApiKey {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl ApiKeyProvider for EnvApiKey {
    fn name(&self) -> &str {
        &self.var
    }

    fn api_key(&self) -> Option<String> {
        std::env::var(&self.var).ok().filter(|key| !key.is_empty())
    }
}

/// Fixed key, mostly for tests.
pub struct StaticApiKey {
    name: String,
    key: Option<String>,
}

impl StaticApiKey {
    pub fn new(name: impl Into<String>, key: Option<String>) -> Self {
        Self {
            name: name.into(),
            key,
        }
    }
}

impl ApiKeyProvider for StaticApiKey {
    fn name(&self) -> &str {
        &self.name
    }

    fn api_key(&self) -> Option<String> {
        self.key.clone().filter(|key| !key.is_empty())
    }
}
