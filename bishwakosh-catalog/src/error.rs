use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the directory and enrichment clients.
///
/// Each variant includes a `service` field identifying which upstream produced
/// the error, plus variant-specific context. All variants are serializable for
/// structured error reporting.
///
/// Nothing in this crate retries on error. Callers decide how to degrade.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum CatalogError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Service that produced the error.
        service: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Service that produced the error.
        service: String,
        /// Error details.
        detail: String,
    },

    /// The upstream answered with a non-success HTTP status.
    HttpStatus {
        /// Service that produced the error.
        service: String,
        /// HTTP status code.
        status: u16,
        /// Error message from the upstream body, if one could be extracted.
        raw_message: Option<String>,
    },

    /// The response body was not well-formed JSON, or not the expected shape.
    ParseError {
        /// Service that produced the error.
        service: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// The upstream answered successfully but carried no payload.
    EmptyResponse {
        /// Service that produced the error.
        service: String,
    },

    /// The payload is JSON but violates the declared output schema.
    SchemaViolation {
        /// Service that produced the error.
        service: String,
        /// Offending field (`$` for the payload root).
        field: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// No credential is configured for a service that needs one.
    MissingCredential {
        /// Service that produced the error.
        service: String,
        /// Environment variable the credential is read from.
        variable: String,
    },
}

impl CatalogError {
    /// 是否为预期行为（AI 输出不合规、未配置凭证等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::EmptyResponse { .. }
                | Self::SchemaViolation { .. }
                | Self::MissingCredential { .. }
        )
    }

    /// Service identifier carried by every variant.
    #[must_use]
    pub fn service(&self) -> &str {
        match self {
            Self::NetworkError { service, .. }
            | Self::Timeout { service, .. }
            | Self::HttpStatus { service, .. }
            | Self::ParseError { service, .. }
            | Self::EmptyResponse { service }
            | Self::SchemaViolation { service, .. }
            | Self::MissingCredential { service, .. } => service,
        }
    }
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { service, detail } => {
                write!(f, "[{service}] Network error: {detail}")
            }
            Self::Timeout { service, detail } => {
                write!(f, "[{service}] Request timeout: {detail}")
            }
            Self::HttpStatus {
                service,
                status,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{service}] HTTP {status}: {msg}")
                } else {
                    write!(f, "[{service}] HTTP {status}")
                }
            }
            Self::ParseError { service, detail } => {
                write!(f, "[{service}] Parse error: {detail}")
            }
            Self::EmptyResponse { service } => {
                write!(f, "[{service}] No data received")
            }
            Self::SchemaViolation {
                service,
                field,
                detail,
            } => {
                write!(f, "[{service}] Schema violation at '{field}': {detail}")
            }
            Self::MissingCredential { service, variable } => {
                write!(f, "[{service}] Missing credential (set {variable})")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Convenience type alias for `Result<T, CatalogError>`.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Workflow-level failure as seen by a view.
///
/// `List` is recovered by showing an empty list; `Details` is surfaced to the
/// user and recovered by returning to the idle view.
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    /// Loading the country directory failed.
    #[error("failed to load country list: {0}")]
    List(#[source] CatalogError),

    /// Enriching a single country failed.
    #[error("failed to load details for '{country}': {source}")]
    Details {
        country: String,
        #[source]
        source: CatalogError,
    },
}

impl LoadError {
    /// Underlying client error.
    #[must_use]
    pub fn cause(&self) -> &CatalogError {
        match self {
            Self::List(source) | Self::Details { source, .. } => source,
        }
    }
}
