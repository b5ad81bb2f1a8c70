use std::sync::LazyLock;

use regex::Regex;

static CJK_IDEOGRAPH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\u{4e00}-\u{9fff}]").expect("CJK ideograph pattern is a valid regex")
});

/// True when the input holds at least one CJK Unified Ideograph (U+4E00..=U+9FFF).
pub fn contains_chinese(input: &str) -> bool {
    CJK_IDEOGRAPH.is_match(input)
}
