//! 查询与补全流程服务
//!
//! Composes the directory and the enricher into the two workflow steps a view
//! needs, and maps client errors into the two load-error kinds.

use std::sync::Arc;

use crate::error::{CatalogError, LoadError};
use crate::traits::{CountryDirectory, CountryEnricher};
use crate::types::{CountryBrief, CountryDetails, OutputLanguage};

/// Country lookup and on-demand enrichment service.
#[derive(Clone)]
pub struct CatalogService {
    directory: Arc<dyn CountryDirectory>,
    enricher: Arc<dyn CountryEnricher>,
}

impl CatalogService {
    #[must_use]
    pub fn new(directory: Arc<dyn CountryDirectory>, enricher: Arc<dyn CountryEnricher>) -> Self {
        Self {
            directory,
            enricher,
        }
    }

    /// Load the full, sorted country list.
    pub async fn load_countries(&self) -> Result<Vec<CountryBrief>, LoadError> {
        self.directory.list_countries().await.map_err(|e| {
            log_failure(&e, "Error loading country list");
            LoadError::List(e)
        })
    }

    /// Enrich one brief.
    ///
    /// The returned details carry the brief's `external_map_url`, whatever the
    /// enrichment service produced.
    pub async fn describe(
        &self,
        brief: &CountryBrief,
        language: OutputLanguage,
    ) -> Result<CountryDetails, LoadError> {
        match self
            .enricher
            .describe_country_in(&brief.display_name, language)
            .await
        {
            Ok(details) => Ok(details.with_map_url(brief.external_map_url.clone())),
            Err(e) => {
                log_failure(
                    &e,
                    &format!("Error loading details for '{}'", brief.display_name),
                );
                Err(LoadError::Details {
                    country: brief.display_name.clone(),
                    source: e,
                })
            }
        }
    }

    /// Language used when the view does not choose one.
    pub fn default_language(&self) -> OutputLanguage {
        self.enricher.default_language()
    }
}

fn log_failure(error: &CatalogError, context: &str) {
    if error.is_expected() {
        log::warn!("{context}: {error}");
    } else {
        log::error!("{context}: {error}");
    }
}
