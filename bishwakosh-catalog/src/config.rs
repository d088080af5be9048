//! Client configuration
//!
//! Everything has a working default. The only value read from the environment
//! is the enrichment credential.

use std::time::Duration;

use crate::types::OutputLanguage;

/// Country directory endpoint, restricted to the fields the brief needs.
pub const DEFAULT_DIRECTORY_URL: &str =
    "https://restcountries.com/v3.1/all?fields=name,flags,cca2,maps";
/// Generative Language API root.
pub const DEFAULT_ENRICHMENT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// Model used for structured country facts.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
/// 默认请求超时（秒）
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// 默认连接超时（秒）
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Environment variables searched for the enrichment credential, in order.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Settings shared by the directory and enrichment clients.
#[derive(Clone)]
pub struct CatalogConfig {
    pub directory_url: String,
    pub enrichment_base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    /// Language used by `describe_country` when the caller does not pick one.
    pub language: OutputLanguage,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            directory_url: DEFAULT_DIRECTORY_URL.to_string(),
            enrichment_base_url: DEFAULT_ENRICHMENT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            language: OutputLanguage::default(),
        }
    }
}

impl CatalogConfig {
    /// Defaults plus the credential from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults plus the credential from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = API_KEY_VARS
            .iter()
            .filter_map(|var| lookup(var))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty());

        if api_key.is_none() {
            log::warn!(
                "No enrichment credential found in {}; country details will be unavailable",
                API_KEY_VARS.join(" / ")
            );
        }

        Self {
            api_key,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    #[must_use]
    pub fn with_directory_url(mut self, url: impl Into<String>) -> Self {
        self.directory_url = url.into();
        self
    }

    #[must_use]
    pub fn with_enrichment_base_url(mut self, url: impl Into<String>) -> Self {
        self.enrichment_base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: OutputLanguage) -> Self {
        self.language = language;
        self
    }
}

// api_key 不得出现在日志中
impl std::fmt::Debug for CatalogConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogConfig")
            .field("directory_url", &self.directory_url)
            .field("enrichment_base_url", &self.enrichment_base_url)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("request_timeout", &self.request_timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("language", &self.language)
            .finish()
    }
}
