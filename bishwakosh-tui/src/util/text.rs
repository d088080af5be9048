//! 按终端显示宽度处理文本

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// 截断到 `max` 列以内，超出时以省略号结尾
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let budget = max - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push(ELLIPSIS);
    out
}

/// 保留末尾不超过 `max` 列的部分（输入框光标始终在末尾）
pub fn tail_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }

    let mut used = 0;
    let mut start = s.len();
    for (i, c) in s.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > max {
            break;
        }
        used += w;
        start = i;
    }
    s[start..].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(truncate_to_width("Japan", 10), "Japan");
        assert_eq!(tail_to_width("Japan", 5), "Japan");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("United Kingdom", 8), "United …");
        assert_eq!(truncate_to_width("United Kingdom", 8).width(), 8);
        assert_eq!(truncate_to_width("Japan", 0), "");
    }

    #[test]
    fn truncate_respects_wide_characters() {
        // 每个汉字占两列
        let cut = truncate_to_width("中华人民共和国", 6);
        assert_eq!(cut, "中华…");
        assert!(cut.width() <= 6);
    }

    #[test]
    fn tail_keeps_end_of_query() {
        assert_eq!(tail_to_width("bangladesh", 4), "desh");
        assert_eq!(tail_to_width("বাংলাদেশ", 0), "");
        assert!(tail_to_width("বাংলাদেশ", 3).width() <= 3);
    }
}
