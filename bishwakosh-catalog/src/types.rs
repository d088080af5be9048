use serde::{Deserialize, Serialize};

/// Glyph shown in place of a flag image when the directory has none.
pub const GLOBE_GLYPH: &str = "🌍";

// ============ 国家列表 ============

/// Minimal per-country record used for listing.
///
/// Built once from the directory response and never mutated afterwards.
/// `two_letter_code` is unique across a loaded list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryBrief {
    /// Common English name (`name.common`).
    pub display_name: String,
    /// SVG flag URL, or [`GLOBE_GLYPH`] when the directory has none.
    pub flag_image_url: String,
    /// ISO 3166-1 alpha-2 code, upper case.
    pub two_letter_code: String,
    /// External map link (`maps.googleMaps`), if the directory provides one.
    pub external_map_url: Option<String>,
}

impl CountryBrief {
    /// Regional-indicator flag emoji for the two-letter code.
    ///
    /// Returns `None` for codes that are not two ASCII letters.
    pub fn flag_emoji(&self) -> Option<String> {
        let code = self.two_letter_code.as_bytes();
        if code.len() != 2 || !code.iter().all(u8::is_ascii_alphabetic) {
            return None;
        }
        code.iter()
            .map(|b| char::from_u32(0x1F1E6 + u32::from(b.to_ascii_uppercase() - b'A')))
            .collect()
    }

    /// Whether the directory supplied a real flag image.
    pub fn has_flag_image(&self) -> bool {
        self.flag_image_url != GLOBE_GLYPH
    }
}

// ============ 国家详情 ============

/// Full descriptive record produced by the enrichment service.
///
/// The wire names of the twelve generated fields follow the response schema
/// (`bdtExchangeRate`, `isoCode`, ...). `map_url` is never generated: it is
/// copied from the originating [`CountryBrief`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryDetails {
    pub name: String,
    pub continent: String,
    pub capital: String,
    pub language: String,
    pub population: String,
    pub religion: String,
    pub area: String,
    pub currency: String,
    /// Local currency → BDT and USD → local currency, as one sentence.
    #[serde(rename = "bdtExchangeRate")]
    pub exchange_rate_summary: String,
    /// `<alpha-2>/<alpha-3>`, e.g. `BD/BGD`.
    #[serde(rename = "isoCode")]
    pub iso_code_pair: String,
    pub dialing_code: String,
    pub history: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_url: Option<String>,
}

impl CountryDetails {
    /// Replace the map link with the one carried by the brief.
    #[must_use]
    pub fn with_map_url(mut self, map_url: Option<String>) -> Self {
        self.map_url = map_url;
        self
    }

    /// Split `iso_code_pair` into `(alpha-2, alpha-3)`.
    pub fn iso_codes(&self) -> Option<(&str, &str)> {
        self.iso_code_pair.split_once('/')
    }
}

// ============ 输出语言 ============

/// Language the enrichment service writes its answer in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputLanguage {
    /// বাংলা
    #[default]
    Bengali,
    English,
}

impl OutputLanguage {
    /// Language name as written into the prompt.
    pub fn prompt_name(self) -> &'static str {
        match self {
            Self::Bengali => "Bengali",
            Self::English => "English",
        }
    }

    /// BCP 47 code.
    pub fn code(self) -> &'static str {
        match self {
            Self::Bengali => "bn-BD",
            Self::English => "en-US",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brief(code: &str) -> CountryBrief {
        CountryBrief {
            display_name: "Bangladesh".into(),
            flag_image_url: "https://flagcdn.com/bd.svg".into(),
            two_letter_code: code.into(),
            external_map_url: None,
        }
    }

    #[test]
    fn flag_emoji_from_code() {
        assert_eq!(brief("BD").flag_emoji().as_deref(), Some("🇧🇩"));
        assert_eq!(brief("jp").flag_emoji().as_deref(), Some("🇯🇵"));
    }

    #[test]
    fn flag_emoji_rejects_bad_codes() {
        assert_eq!(brief("B").flag_emoji(), None);
        assert_eq!(brief("B1").flag_emoji(), None);
    }

    #[test]
    fn details_wire_names_follow_schema() {
        let json = r#"{
            "name": "Bangladesh", "continent": "Asia", "capital": "Dhaka",
            "language": "Bengali", "population": "170M", "religion": "Islam",
            "area": "148,460 km2", "currency": "Taka",
            "bdtExchangeRate": "1 BDT = 1 BDT (1 USD = 120 BDT)",
            "isoCode": "BD/BGD", "dialingCode": "+880", "history": "..."
        }"#;
        let details: CountryDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.iso_code_pair, "BD/BGD");
        assert_eq!(details.iso_codes(), Some(("BD", "BGD")));
        assert_eq!(details.dialing_code, "+880");
        assert_eq!(details.map_url, None);
    }

    #[test]
    fn with_map_url_overrides_link() {
        let details = CountryDetails {
            name: "Japan".into(),
            continent: String::new(),
            capital: String::new(),
            language: String::new(),
            population: String::new(),
            religion: String::new(),
            area: String::new(),
            currency: String::new(),
            exchange_rate_summary: String::new(),
            iso_code_pair: "JP/JPN".into(),
            dialing_code: String::new(),
            history: String::new(),
            map_url: Some("https://ai.example/hallucinated".into()),
        }
        .with_map_url(Some("https://goo.gl/maps/NGM".into()));
        assert_eq!(details.map_url.as_deref(), Some("https://goo.gl/maps/NGM"));
    }
}
