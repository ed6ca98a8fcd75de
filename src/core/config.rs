//! Run configuration, built once before any report is fetched.

use crate::{cli::types::ApiToken, Result, BASE_URL_ENV_VAR, DEFAULT_BASE_URL};

use super::credentials::load_token;

/// Everything the data gateway needs. Immutable for the run.
#[derive(Debug, Clone)]
pub struct Config {
    pub token: ApiToken,
    pub base_url: String,
}

impl Config {
    /// Configuration against the public API.
    pub fn new(token: ApiToken) -> Self {
        Self {
            token,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at another API root (a trailing `/` is added if missing).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    /// Apply a `FOOTBALL_DATA_BASE_URL` value; blank or absent keeps the default.
    pub fn with_base_url_override(self, value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(url) if !url.is_empty() => self.with_base_url(url),
            _ => self,
        }
    }

    /// Load the token (prompting if needed) and honour `FOOTBALL_DATA_BASE_URL`.
    pub fn load() -> Result<Self> {
        let base_url = std::env::var(BASE_URL_ENV_VAR).ok();
        Ok(Self::new(load_token()?).with_base_url_override(base_url.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = Config::new(ApiToken::new("t"));
        assert_eq!(config.base_url, "https://api.football-data.org/v4/");
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let config = Config::new(ApiToken::new("t")).with_base_url("http://127.0.0.1:9000");
        assert_eq!(config.base_url, "http://127.0.0.1:9000/");

        let config = Config::new(ApiToken::new("t")).with_base_url("http://localhost/v4/");
        assert_eq!(config.base_url, "http://localhost/v4/");
    }

    #[test]
    fn test_base_url_override() {
        let config =
            Config::new(ApiToken::new("t")).with_base_url_override(Some(" http://mock:8080 "));
        assert_eq!(config.base_url, "http://mock:8080/");
    }

    #[test]
    fn test_blank_or_missing_override_keeps_default() {
        for value in [None, Some(""), Some("   ")] {
            let config = Config::new(ApiToken::new("t")).with_base_url_override(value);
            assert_eq!(config.base_url, DEFAULT_BASE_URL, "override {value:?}");
        }
    }

    #[test]
    fn test_debug_hides_token() {
        let config = Config::new(ApiToken::new("hidden-value"));
        assert!(!format!("{:?}", config).contains("hidden-value"));
    }
}
