//! # bishwakosh-catalog
//!
//! Country lookup and on-demand enrichment for the Bishwakosh country browser.
//!
//! ## Components
//!
//! | Component | Upstream | Entry point |
//! |-----------|----------|-------------|
//! | Directory client | [REST Countries](https://restcountries.com/) v3.1 | [`CountryDirectory::list_countries`] |
//! | Enrichment client | Gemini `generateContent` with a response schema | [`CountryEnricher::describe_country`] |
//! | Search filter | none (in memory) | [`filter_countries`] |
//! | Map embed | none (URL template) | [`map_embed_url`] |
//!
//! [`CatalogService`] composes the two clients into the workflow a view needs:
//! load the list once, enrich one country per selection, and stitch the
//! directory's map link into the generated details.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bishwakosh_catalog::{CatalogConfig, OutputLanguage, create_service, filter_countries};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Credential comes from GEMINI_API_KEY (or API_KEY)
//!     let service = create_service(&CatalogConfig::from_env())?;
//!
//!     // 2. Load and search the directory
//!     let countries = service.load_countries().await?;
//!     let hits = filter_countries(&countries, "br");
//!
//!     // 3. Enrich one country
//!     if let Some(brazil) = hits.first() {
//!         let details = service.describe(brazil, OutputLanguage::English).await?;
//!         println!("{}: {} ({})", details.name, details.capital, details.iso_code_pair);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Client calls return [`CatalogError`]. [`CatalogService`] wraps them into
//! [`LoadError::List`] or [`LoadError::Details`]. Nothing is retried.

pub mod config;
pub mod directory;
pub mod enrichment;
pub mod error;
mod factory;
pub mod filter;
pub mod http_client;
pub mod map;
pub mod service;
mod traits;
pub mod types;
pub mod utils;

pub use config::CatalogConfig;
pub use directory::{DIRECTORY_SERVICE, RestCountriesDirectory};
pub use enrichment::{ENRICHMENT_SERVICE, GeminiEnricher};
pub use error::{CatalogError, LoadError, Result};
pub use factory::{create_directory, create_enricher, create_service};
pub use filter::{filter_countries, matches_query};
pub use map::map_embed_url;
pub use service::CatalogService;
pub use traits::{CountryDirectory, CountryEnricher};
pub use types::{CountryBrief, CountryDetails, GLOBE_GLYPH, OutputLanguage};
