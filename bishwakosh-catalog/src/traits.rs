use async_trait::async_trait;

use crate::error::Result;
use crate::types::{CountryBrief, CountryDetails, OutputLanguage};

/// 国家目录 Trait
///
/// Enumerates every country once. Implementations return the list already
/// normalized (required fields present, codes unique) and sorted by
/// locale-aware display name.
#[async_trait]
pub trait CountryDirectory: Send + Sync {
    /// 目录服务标识符
    fn id(&self) -> &'static str;

    /// 获取全部国家（已排序）
    async fn list_countries(&self) -> Result<Vec<CountryBrief>>;
}

/// 国家信息补全 Trait
///
/// One upstream request per call: no batching, no caching, no deduplication
/// of concurrent identical requests, no retry.
#[async_trait]
pub trait CountryEnricher: Send + Sync {
    /// 补全服务标识符
    fn id(&self) -> &'static str;

    /// Language used by [`describe_country`](Self::describe_country).
    fn default_language(&self) -> OutputLanguage;

    /// Generate details for `name` in the default language.
    async fn describe_country(&self, name: &str) -> Result<CountryDetails> {
        self.describe_country_in(name, self.default_language()).await
    }

    /// Generate details for `name` in `language`.
    ///
    /// The returned record never carries a `map_url`; that link belongs to
    /// the directory brief.
    async fn describe_country_in(
        &self,
        name: &str,
        language: OutputLanguage,
    ) -> Result<CountryDetails>;
}
