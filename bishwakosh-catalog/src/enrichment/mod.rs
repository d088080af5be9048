//! Country enrichment client (Gemini structured output)

mod prompt;
mod types;
mod validate;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::{API_KEY_VARS, CatalogConfig};
use crate::error::{CatalogError, Result};
use crate::http_client::{HttpUtils, create_http_client};
use crate::traits::CountryEnricher;
use crate::types::{CountryDetails, OutputLanguage};

pub use prompt::{REQUIRED_FIELDS, build_prompt, response_schema};
pub use validate::details_from_payload;

use types::{
    ApiErrorEnvelope, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    Part,
};

/// Service identifier used in errors and logs.
pub const ENRICHMENT_SERVICE: &str = "gemini";

/// Gemini `generateContent` client with a fixed response schema.
pub struct GeminiEnricher {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
    language: OutputLanguage,
}

impl GeminiEnricher {
    /// Build a client from `config`.
    ///
    /// A missing credential is not an error here; every call will fail with
    /// `MissingCredential` instead, so the country list stays usable.
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        Ok(Self {
            client: create_http_client(
                ENRICHMENT_SERVICE,
                config.connect_timeout,
                config.request_timeout,
            )?,
            base_url: config.enrichment_base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            language: config.language,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    fn build_request(country_name: &str, language: OutputLanguage) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(build_prompt(country_name, language)),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: response_schema(),
            },
        }
    }
}

#[async_trait]
impl CountryEnricher for GeminiEnricher {
    fn id(&self) -> &'static str {
        ENRICHMENT_SERVICE
    }

    fn default_language(&self) -> OutputLanguage {
        self.language
    }

    async fn describe_country_in(
        &self,
        name: &str,
        language: OutputLanguage,
    ) -> Result<CountryDetails> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| CatalogError::MissingCredential {
                service: ENRICHMENT_SERVICE.to_string(),
                variable: API_KEY_VARS[0].to_string(),
            })?;

        let url = self.endpoint();
        let body = Self::build_request(name, language);
        let request = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body);

        let (status, text) = HttpUtils::execute_request(
            request,
            ENRICHMENT_SERVICE,
            "POST",
            &format!("{}:generateContent ({name}, {})", self.model, language.code()),
        )
        .await?;

        HttpUtils::ensure_success(status, &text, ENRICHMENT_SERVICE, extract_error_message)?;

        let response: GenerateContentResponse = HttpUtils::parse_json(&text, ENRICHMENT_SERVICE)?;
        let Some(payload) = response.text() else {
            log::warn!(
                "[{ENRICHMENT_SERVICE}] No data received for '{name}' (reason: {})",
                response.empty_reason().unwrap_or("unknown")
            );
            return Err(CatalogError::EmptyResponse {
                service: ENRICHMENT_SERVICE.to_string(),
            });
        };

        details_from_payload(&payload)
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    let envelope: ApiErrorEnvelope = serde_json::from_str(body).ok()?;
    Some(match envelope.error.status {
        Some(status) => format!("{status}: {}", envelope.error.message),
        None => envelope.error.message,
    })
}
