//! Connection configuration for the search engine client.

/// Default search engine address.
pub const DEFAULT_ENGINE_URL: &str = "http://localhost:9200";

/// Address and credentials used to reach the search engine.
#[derive(Clone, Default)]
pub struct EngineConfig {
    /// Base URL of the cluster node (e.g. "http://localhost:9200").
    pub url: String,
    /// Basic auth user. Empty means anonymous access.
    pub username: String,
    /// Basic auth password.
    pub password: String,
}

impl EngineConfig {
    /// Create a config for an anonymous connection to the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            username: String::new(),
            password: String::new(),
        }
    }

    /// Attach basic auth credentials.
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    /// Basic auth credentials, if a username was configured.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        if self.username.is_empty() {
            None
        } else {
            Some((self.username.as_str(), self.password.as_str()))
        }
    }
}

// Keeps the password out of logs.
impl std::fmt::Debug for EngineConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
