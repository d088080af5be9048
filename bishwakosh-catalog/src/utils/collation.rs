//! Locale-aware name ordering
//!
//! Country names are compared on a primary key with diacritics stripped and
//! case folded, so `Åland Islands` lands among the `A`s and `Curaçao` next to
//! `Cuba`. Ties on the primary key fall back to the raw string so the order is
//! total and stable.

use std::cmp::Ordering;

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Primary collation key: NFD, combining marks removed, lower-cased.
pub fn collation_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Compare two display names the way a locale-aware sort would.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}
