//! Client factory functions.

use std::sync::Arc;

use crate::config::CatalogConfig;
use crate::directory::RestCountriesDirectory;
use crate::enrichment::GeminiEnricher;
use crate::error::Result;
use crate::service::CatalogService;
use crate::traits::{CountryDirectory, CountryEnricher};

/// Creates the default [`CountryDirectory`] (REST Countries).
///
/// Wrapped in `Arc<dyn CountryDirectory>` for sharing across async tasks.
pub fn create_directory(config: &CatalogConfig) -> Result<Arc<dyn CountryDirectory>> {
    Ok(Arc::new(RestCountriesDirectory::new(config)?))
}

/// Creates the default [`CountryEnricher`] (Gemini).
pub fn create_enricher(config: &CatalogConfig) -> Result<Arc<dyn CountryEnricher>> {
    Ok(Arc::new(GeminiEnricher::new(config)?))
}

/// Creates a [`CatalogService`] wired to the default clients.
///
/// # Examples
///
/// ```rust,no_run
/// use bishwakosh_catalog::{CatalogConfig, create_service};
///
/// let service = create_service(&CatalogConfig::from_env()).unwrap();
/// ```
pub fn create_service(config: &CatalogConfig) -> Result<CatalogService> {
    Ok(CatalogService::new(
        create_directory(config)?,
        create_enricher(config)?,
    ))
}
