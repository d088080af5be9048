//! Country directory client (REST Countries v3.1)

mod types;

use std::collections::HashSet;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::http_client::{HttpUtils, create_http_client};
use crate::traits::CountryDirectory;
use crate::types::{CountryBrief, GLOBE_GLYPH};
use crate::utils::locale_compare;

pub(crate) use types::RawCountry;

/// Service identifier used in errors and logs.
pub const DIRECTORY_SERVICE: &str = "restcountries";

/// REST Countries directory client.
pub struct RestCountriesDirectory {
    client: Client,
    url: String,
}

impl RestCountriesDirectory {
    /// Build a client for `config.directory_url`.
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        Ok(Self {
            client: create_http_client(
                DIRECTORY_SERVICE,
                config.connect_timeout,
                config.request_timeout,
            )?,
            url: config.directory_url.clone(),
        })
    }
}

#[async_trait]
impl CountryDirectory for RestCountriesDirectory {
    fn id(&self) -> &'static str {
        DIRECTORY_SERVICE
    }

    async fn list_countries(&self) -> Result<Vec<CountryBrief>> {
        let request = self.client.get(&self.url);
        let (status, body) =
            HttpUtils::execute_request(request, DIRECTORY_SERVICE, "GET", &self.url).await?;

        HttpUtils::ensure_success(status, &body, DIRECTORY_SERVICE, extract_error_message)?;

        let raw: Vec<RawCountry> = HttpUtils::parse_json(&body, DIRECTORY_SERVICE)?;
        let countries = normalize_countries(raw)?;
        log::info!("[{DIRECTORY_SERVICE}] Loaded {} countries", countries.len());
        Ok(countries)
    }
}

/// REST Countries 错误体: `{"status": 404, "message": "Not Found"}`
fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
}

/// Narrow raw directory records into sorted [`CountryBrief`]s.
///
/// A record without `name.common` or a two-letter `cca2`, or a code that
/// appears twice, makes the whole response invalid.
pub(crate) fn normalize_countries(raw: Vec<RawCountry>) -> Result<Vec<CountryBrief>> {
    let mut seen = HashSet::with_capacity(raw.len());
    let mut countries = Vec::with_capacity(raw.len());

    for (index, record) in raw.into_iter().enumerate() {
        let display_name = record
            .name
            .and_then(|n| n.common)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| parse_error(format!("record {index}: missing name.common")))?;

        let two_letter_code = record
            .cca2
            .map(|s| s.trim().to_ascii_uppercase())
            .filter(|s| s.len() == 2 && s.bytes().all(|b| b.is_ascii_alphabetic()))
            .ok_or_else(|| {
                parse_error(format!("record {index} ({display_name}): missing or malformed cca2"))
            })?;

        if !seen.insert(two_letter_code.clone()) {
            return Err(parse_error(format!(
                "record {index} ({display_name}): duplicate cca2 '{two_letter_code}'"
            )));
        }

        let flag_image_url = record
            .flags
            .and_then(|f| f.svg)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| GLOBE_GLYPH.to_string());

        let external_map_url = record
            .maps
            .and_then(|m| m.google_maps)
            .filter(|s| !s.trim().is_empty());

        countries.push(CountryBrief {
            display_name,
            flag_image_url,
            two_letter_code,
            external_map_url,
        });
    }

    countries.sort_by(|a, b| locale_compare(&a.display_name, &b.display_name));
    Ok(countries)
}

fn parse_error(detail: String) -> CatalogError {
    log::error!("[{DIRECTORY_SERVICE}] {detail}");
    CatalogError::ParseError {
        service: DIRECTORY_SERVICE.to_string(),
        detail,
    }
}
