//! Prompt text and response schema for country enrichment

use serde_json::{Value, json};

use crate::types::OutputLanguage;

/// Required output fields, in display order.
pub const REQUIRED_FIELDS: [&str; 12] = [
    "name",
    "continent",
    "capital",
    "language",
    "population",
    "religion",
    "area",
    "currency",
    "bdtExchangeRate",
    "isoCode",
    "dialingCode",
    "history",
];

/// Build the user prompt for `country_name`.
pub fn build_prompt(country_name: &str, language: OutputLanguage) -> String {
    let example = match language {
        OutputLanguage::Bengali => "১ [Local Currency] = [X] টাকা (১ ডলার = [Y] [Local Currency])",
        OutputLanguage::English => "1 [Local Currency] = [X] BDT (1 USD = [Y] [Local Currency])",
    };

    format!(
        "Provide detailed information about the country \"{country_name}\" in {lang}. \
         Include approximate current data.\n\
         For the \"bdtExchangeRate\" field, provide a single string that includes both:\n\
         1. The approximate value of 1 unit of their local currency in Bangladeshi Taka (BDT).\n\
         2. The approximate value of 1 US Dollar (USD) in their local currency units.\n\
         Example format: \"{example}\"\n\n\
         For the \"isoCode\" field, strictly provide both the ISO Alpha-2 and Alpha-3 codes \
         separated by a slash, for example: \"BD/BGD\" for Bangladesh.",
        lang = language.prompt_name(),
    )
}

/// Response schema: an OBJECT of twelve required STRING properties.
pub fn response_schema() -> Value {
    let mut properties = serde_json::Map::new();
    for field in REQUIRED_FIELDS {
        let property = if field == "isoCode" {
            json!({
                "type": "STRING",
                "description": "Format: Alpha-2/Alpha-3 (e.g. BD/BGD)",
            })
        } else {
            json!({ "type": "STRING" })
        };
        properties.insert(field.to_string(), property);
    }

    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": REQUIRED_FIELDS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_requires_every_field_as_string() {
        let schema = response_schema();
        assert_eq!(schema["type"], "OBJECT");
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(required, REQUIRED_FIELDS);
        for field in REQUIRED_FIELDS {
            assert_eq!(schema["properties"][field]["type"], "STRING", "{field}");
        }
        assert!(
            schema["properties"]["isoCode"]["description"]
                .as_str()
                .unwrap()
                .contains("Alpha-2/Alpha-3")
        );
    }

    #[test]
    fn prompt_names_country_and_language() {
        let prompt = build_prompt("Japan", OutputLanguage::Bengali);
        assert!(prompt.contains("\"Japan\" in Bengali"));
        assert!(prompt.contains("টাকা"));
        assert!(prompt.contains("BD/BGD"));

        let prompt = build_prompt("Japan", OutputLanguage::English);
        assert!(prompt.contains("in English"));
        assert!(prompt.contains("1 USD"));
    }
}
