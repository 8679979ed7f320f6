//! Client configuration: base path, API key, user agent, default headers and timeout.

use std::collections::BTreeMap;
use std::time::Duration;

/// Production API root.
pub const DEFAULT_BASE_PATH: &str = "https://api-v2.intrinio.com";

/// Request timeout used unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings shared by every request a [`Client`](crate::Client) sends.
///
/// Built once and treated as immutable after the client is constructed.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// Base URL for the API. Defaults to `https://api-v2.intrinio.com`.
    pub base_path: String,
    /// Sent as the `api_key` query parameter when set.
    pub api_key: Option<String>,
    pub user_agent: String,
    /// Headers added to every request.
    pub default_headers: BTreeMap<String, String>,
    pub timeout: Duration,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
            api_key: None,
            user_agent: format!("intrinio-rust/{}", env!("CARGO_PKG_VERSION")),
            default_headers: BTreeMap::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Configuration {
    /// Reads `INTRINIO_API_KEY` and `INTRINIO_BASE_PATH` from the environment,
    /// falling back to defaults for anything unset or empty.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(key) = non_empty_var("INTRINIO_API_KEY") {
            config.api_key = Some(key);
        }
        if let Some(base) = non_empty_var("INTRINIO_BASE_PATH") {
            config.base_path = base;
        }
        config
    }

    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    pub fn with_base_path(mut self, base_path: &str) -> Self {
        self.base_path = base_path.to_string();
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn with_default_header(mut self, name: &str, value: &str) -> Self {
        self.default_headers
            .insert(name.to_ascii_lowercase(), value.to_string());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The configured key, or `None` when it is unset or blank.
    pub fn effective_api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_production() {
        let config = Configuration::default();
        assert_eq!(config.base_path, DEFAULT_BASE_PATH);
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(config.user_agent.starts_with("intrinio-rust/"));
    }

    #[test]
    fn builder_methods_override_fields() {
        let config = Configuration::default()
            .with_api_key("key")
            .with_base_path("http://localhost:1234")
            .with_default_header("X-Trace", "abc")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.api_key.as_deref(), Some("key"));
        assert_eq!(config.base_path, "http://localhost:1234");
        assert_eq!(
            config.default_headers.get("x-trace").map(String::as_str),
            Some("abc")
        );
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn blank_api_key_is_ignored() {
        let config = Configuration::default().with_api_key("   ");
        assert_eq!(config.effective_api_key(), None);
    }
}
