// src/common/config.rs
//! Client configuration loaded from the environment (and `.env`)

use std::env;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub token: Option<String>,
    pub role: Option<String>,
    pub timeout_seconds: u64,
    pub page_size: u32,
    pub login_path: String,
    pub toast_seconds: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
            role: None,
            timeout_seconds: 30, // backend PDF generation can be slow
            page_size: 10,
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            toast_seconds: 5,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_source(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset or unparsable values keep
    /// their defaults.
    pub fn from_source<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        // RECRUIT_API_URL - backend base URL, trailing slash optional
        if let Some(url) = get("RECRUIT_API_URL").filter(|s| !s.trim().is_empty()) {
            config.api_url = url.trim().trim_end_matches('/').to_string();
        }

        // RECRUIT_API_TOKEN - bearer token for an existing session
        config.token = get("RECRUIT_API_TOKEN").filter(|s| !s.trim().is_empty());

        // RECRUIT_ROLE - overrides the role claim read from the token
        config.role = get("RECRUIT_ROLE").filter(|s| !s.trim().is_empty());

        if let Some(val) = get("RECRUIT_TIMEOUT_SECONDS").and_then(|v| v.parse::<u64>().ok()) {
            config.timeout_seconds = val;
        }

        if let Some(val) = get("RECRUIT_PAGE_SIZE")
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|v| *v > 0)
        {
            config.page_size = val;
        }

        if let Some(path) = get("RECRUIT_LOGIN_PATH").filter(|s| s.starts_with('/')) {
            config.login_path = path;
        }

        if let Some(val) = get("RECRUIT_TOAST_SECONDS").and_then(|v| v.parse::<u64>().ok()) {
            config.toast_seconds = val;
        }

        config
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn toast_ttl(&self) -> Duration {
        Duration::from_secs(self.toast_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::from_source(|_| None);
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api_url, "http://localhost:5000");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_config_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("RECRUIT_API_URL", "https://hr.example.com/"),
            ("RECRUIT_API_TOKEN", "abc.def.ghi"),
            ("RECRUIT_PAGE_SIZE", "25"),
            ("RECRUIT_TIMEOUT_SECONDS", "not-a-number"),
            ("RECRUIT_LOGIN_PATH", "account/login"),
        ]);

        let config = ClientConfig::from_source(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.api_url, "https://hr.example.com");
        assert_eq!(config.token.as_deref(), Some("abc.def.ghi"));
        assert_eq!(config.page_size, 25);
        assert_eq!(config.timeout_seconds, 30);
        assert_eq!(config.login_path, "/login");
    }

    #[test]
    fn test_zero_page_size_ignored() {
        let config = ClientConfig::from_source(|key| {
            (key == "RECRUIT_PAGE_SIZE").then(|| "0".to_string())
        });
        assert_eq!(config.page_size, 10);
    }
}
