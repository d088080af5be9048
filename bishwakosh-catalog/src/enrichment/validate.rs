//! Boundary validation of generated country details
//!
//! The response schema is only advisory on the model side, so the payload is
//! checked field by field before it reaches a view.

use serde_json::{Map, Value};

use crate::error::{CatalogError, Result};
use crate::http_client::HttpUtils;
use crate::types::CountryDetails;

use super::ENRICHMENT_SERVICE;
use super::prompt::REQUIRED_FIELDS;

/// Parse and validate the model's JSON text.
///
/// - not JSON → `ParseError`
/// - not an object, a required field missing or not a string, blank `name`
///   or `history`, malformed `isoCode` → `SchemaViolation`
///
/// Unknown extra fields are ignored.
pub fn details_from_payload(text: &str) -> Result<CountryDetails> {
    let value: Value = HttpUtils::parse_json(text, ENRICHMENT_SERVICE)?;
    let map = match value {
        Value::Object(map) => map,
        other => {
            return Err(violation(
                "$",
                format!("expected an object, found {}", kind(&other)),
            ));
        }
    };

    let extra: Vec<&str> = map
        .keys()
        .map(String::as_str)
        .filter(|k| !REQUIRED_FIELDS.contains(k))
        .collect();
    if !extra.is_empty() {
        log::debug!("[{ENRICHMENT_SERVICE}] Ignoring extra fields: {extra:?}");
    }

    let details = CountryDetails {
        name: non_blank(&map, "name")?,
        continent: string_field(&map, "continent")?,
        capital: string_field(&map, "capital")?,
        language: string_field(&map, "language")?,
        population: string_field(&map, "population")?,
        religion: string_field(&map, "religion")?,
        area: string_field(&map, "area")?,
        currency: string_field(&map, "currency")?,
        exchange_rate_summary: string_field(&map, "bdtExchangeRate")?,
        iso_code_pair: iso_code_pair(&map)?,
        dialing_code: string_field(&map, "dialingCode")?,
        history: non_blank(&map, "history")?,
        map_url: None,
    };

    Ok(details)
}

fn string_field(map: &Map<String, Value>, field: &str) -> Result<String> {
    match map.get(field) {
        Some(Value::String(s)) => Ok(s.trim().to_string()),
        Some(other) => Err(violation(
            field,
            format!("expected a string, found {}", kind(other)),
        )),
        None => Err(violation(field, "missing required field".to_string())),
    }
}

fn non_blank(map: &Map<String, Value>, field: &str) -> Result<String> {
    let value = string_field(map, field)?;
    if value.is_empty() {
        return Err(violation(field, "must not be blank".to_string()));
    }
    Ok(value)
}

/// `isoCode` 必须是 `AA/AAA`（拉丁字母，统一转大写）
fn iso_code_pair(map: &Map<String, Value>) -> Result<String> {
    let raw = string_field(map, "isoCode")?;
    let pair = raw.replace(' ', "").to_ascii_uppercase();

    let well_formed = pair.split_once('/').is_some_and(|(alpha2, alpha3)| {
        alpha2.len() == 2
            && alpha3.len() == 3
            && alpha2.bytes().chain(alpha3.bytes()).all(|b| b.is_ascii_uppercase())
    });

    if well_formed {
        Ok(pair)
    } else {
        Err(violation(
            "isoCode",
            format!("expected '<alpha-2>/<alpha-3>', found '{raw}'"),
        ))
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn violation(field: &str, detail: String) -> CatalogError {
    log::warn!("[{ENRICHMENT_SERVICE}] Schema violation at '{field}': {detail}");
    CatalogError::SchemaViolation {
        service: ENRICHMENT_SERVICE.to_string(),
        field: field.to_string(),
        detail,
    }
}
