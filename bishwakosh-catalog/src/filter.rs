//! Search filter over the loaded country list
//!
//! Recomputed from the full list on every query change. No index: a few
//! hundred briefs are scanned in well under a frame.

use crate::types::CountryBrief;

/// Whether `country` matches an already lower-cased needle.
fn matches_lowered(country: &CountryBrief, needle: &str) -> bool {
    country.display_name.to_lowercase().contains(needle)
        || country.two_letter_code.to_lowercase().contains(needle)
}

/// Case-insensitive substring match on display name or two-letter code.
pub fn matches_query(country: &CountryBrief, query: &str) -> bool {
    matches_lowered(country, &query.to_lowercase())
}

/// Filter `countries` by `query`, preserving input order.
///
/// An empty query keeps everything.
pub fn filter_countries<'a>(countries: &'a [CountryBrief], query: &str) -> Vec<&'a CountryBrief> {
    if query.is_empty() {
        return countries.iter().collect();
    }
    let needle = query.to_lowercase();
    countries
        .iter()
        .filter(|c| matches_lowered(c, &needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brief(name: &str, code: &str) -> CountryBrief {
        CountryBrief {
            display_name: name.to_string(),
            flag_image_url: String::new(),
            two_letter_code: code.to_string(),
            external_map_url: None,
        }
    }

    fn sample() -> Vec<CountryBrief> {
        vec![
            brief("Bangladesh", "BD"),
            brief("Brazil", "BR"),
            brief("Gibraltar", "GI"),
            brief("Japan", "JP"),
            brief("United Kingdom", "GB"),
        ]
    }

    fn names<'a>(list: &[&'a CountryBrief]) -> Vec<&'a str> {
        list.iter().map(|c| c.display_name.as_str()).collect()
    }

    #[test]
    fn br_matches_brazil_and_not_bangladesh() {
        let countries = vec![brief("Bangladesh", "BD"), brief("Brazil", "BR")];
        assert_eq!(names(&filter_countries(&countries, "br")), vec!["Brazil"]);
    }

    #[test]
    fn substring_anywhere_in_name() {
        let countries = sample();
        assert_eq!(names(&filter_countries(&countries, "br")), vec!["Brazil", "Gibraltar"]);
    }

    #[test]
    fn code_match_is_case_insensitive() {
        let countries = sample();
        assert_eq!(names(&filter_countries(&countries, "gb")), vec!["United Kingdom"]);
        assert_eq!(names(&filter_countries(&countries, "JP")), vec!["Japan"]);
    }

    #[test]
    fn empty_query_keeps_everything_in_order() {
        let countries = sample();
        assert_eq!(filter_countries(&countries, "").len(), countries.len());
    }

    #[test]
    fn no_match_is_empty() {
        let countries = sample();
        assert!(filter_countries(&countries, "xyz").is_empty());
        assert!(filter_countries(&[], "br").is_empty());
    }

    #[test]
    fn filter_is_sound_and_complete() {
        let countries = sample();
        for query in ["a", "an", "B", "d", "ng", "GI", "o", " ", "z"] {
            let needle = query.to_lowercase();
            let result = filter_countries(&countries, query);

            for c in &result {
                assert!(
                    c.display_name.to_lowercase().contains(&needle)
                        || c.two_letter_code.to_lowercase().contains(&needle),
                    "{query}: {} should not match",
                    c.display_name
                );
            }
            for c in &countries {
                if matches_query(c, query) {
                    assert!(
                        result.iter().any(|r| r.two_letter_code == c.two_letter_code),
                        "{query}: {} missing",
                        c.display_name
                    );
                }
            }
        }
    }
}
