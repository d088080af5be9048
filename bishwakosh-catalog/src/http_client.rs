//! Generic HTTP client tools
//!
//! Shared request plumbing for the directory and enrichment clients. Each
//! client still builds its own `RequestBuilder` (URL, headers, body) and
//! decides what a non-success status means for it.
//!
//! No retries: one request per call, failures go straight back to the caller.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::{CatalogError, Result};
use crate::utils::truncate_for_log;

/// 创建带超时配置的 HTTP Client
pub fn create_http_client(
    service: &str,
    connect_timeout: Duration,
    request_timeout: Duration,
) -> Result<Client> {
    Client::builder()
        .connect_timeout(connect_timeout)
        .timeout(request_timeout)
        .build()
        .map_err(|e| CatalogError::NetworkError {
            service: service.to_string(),
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns status code and response text
    ///
    /// Unified processing: sending requests, logging, error handling.
    /// Any status is returned as-is; callers map non-success codes.
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (URL, headers, body)
    /// * `service` - upstream name (for logging and errors)
    /// * `method_name` - request method name (for logging)
    /// * `url_or_action` - URL or action name (for logging, must not carry secrets)
    pub async fn execute_request(
        request_builder: RequestBuilder,
        service: &str,
        method_name: &str,
        url_or_action: &str,
    ) -> Result<(u16, String)> {
        log::debug!("[{service}] {method_name} {url_or_action}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                CatalogError::Timeout {
                    service: service.to_string(),
                    detail: e.to_string(),
                }
            } else {
                CatalogError::NetworkError {
                    service: service.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{service}] Response Status: {status_code}");

        let response_text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                CatalogError::Timeout {
                    service: service.to_string(),
                    detail: format!("Timed out reading response body: {e}"),
                }
            } else {
                CatalogError::NetworkError {
                    service: service.to_string(),
                    detail: format!("Failed to read response body: {e}"),
                }
            }
        })?;

        log::debug!(
            "[{service}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(CatalogError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str, service: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{service}] JSON parse failed: {e}");
            log::error!("[{service}] Raw response: {}", truncate_for_log(response_text));
            CatalogError::ParseError {
                service: service.to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// Fail with `HttpStatus` unless the status is 2xx.
    ///
    /// `extract_message` pulls a human-readable message out of the error body;
    /// when it finds nothing the truncated body is used instead.
    pub fn ensure_success(
        status: u16,
        body: &str,
        service: &str,
        extract_message: impl FnOnce(&str) -> Option<String>,
    ) -> Result<()> {
        if (200..300).contains(&status) {
            return Ok(());
        }

        let raw_message = extract_message(body).or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| truncate_for_log(trimmed))
        });
        log::warn!("[{service}] Upstream returned HTTP {status}");

        Err(CatalogError::HttpStatus {
            service: service.to_string(),
            status,
            raw_message,
        })
    }
}
