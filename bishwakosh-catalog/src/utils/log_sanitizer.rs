//! Log sanitization utilities
//!
//! Upstream bodies (a whole country directory, or a generated history essay)
//! are too long to log in full at debug level.

/// Maximum number of characters kept in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Truncate a string for logging.
///
/// Counts characters rather than bytes, so Bengali text is never split inside
/// a code point.
pub fn truncate_for_log(s: &str) -> String {
    match s.char_indices().nth(TRUNCATE_LIMIT) {
        None => s.to_string(),
        Some((cut, _)) => format!(
            "{}... [truncated, total {} bytes]",
            &s[..cut],
            s.len()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_string_unchanged() {
        assert_eq!(truncate_for_log("hello"), "hello");
    }

    #[test]
    fn exactly_at_limit() {
        let s = "a".repeat(TRUNCATE_LIMIT);
        assert_eq!(truncate_for_log(&s), s);
    }

    #[test]
    fn over_limit_truncated() {
        let s = "a".repeat(TRUNCATE_LIMIT + 10);
        let out = truncate_for_log(&s);
        assert!(out.starts_with(&"a".repeat(TRUNCATE_LIMIT)));
        assert!(out.ends_with(&format!("total {} bytes]", TRUNCATE_LIMIT + 10)));
    }

    #[test]
    fn bengali_text_kept_whole() {
        let s = "বাংলাদেশ".repeat(100);
        let out = truncate_for_log(&s);
        assert!(out.contains("... [truncated, total"));
    }
}
