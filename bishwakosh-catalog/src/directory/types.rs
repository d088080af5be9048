//! REST Countries 响应类型
//!
//! Every field is optional here. Narrowing into [`CountryBrief`] happens in
//! [`normalize_countries`](super::normalize_countries).
//!
//! [`CountryBrief`]: crate::types::CountryBrief

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct RawCountry {
    pub name: Option<RawName>,
    pub flags: Option<RawFlags>,
    pub cca2: Option<String>,
    pub maps: Option<RawMaps>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawName {
    pub common: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawFlags {
    pub svg: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawMaps {
    #[serde(rename = "googleMaps")]
    pub google_maps: Option<String>,
}
