//! Mock 模式下的离线文本处理
//!
//! 未配置上游 API 时代替 LLM 调用，输出完全确定，便于测试和离线使用

use std::collections::BTreeSet;

use crate::common::{truncate_chars, truncate_with_ellipsis};

/// 标题最大字符数（mock 与真实调用共用）
pub const TITLE_MAX_CHARS: usize = 60;

/// 摘要截断长度（不含省略号）
pub const SUMMARY_MAX_CHARS: usize = 150;

/// 空标题的默认值
pub const DEFAULT_TITLE: &str = "Untitled";

/// 空摘要的默认值
pub const DEFAULT_SUMMARY: &str = "No content.";

pub fn mock_generate(prompt: &str) -> String {
    format!("(mock) you said: {}", prompt)
}

/// 取去除首尾空白后的前 60 个字符作为标题
pub fn mock_title(text: &str) -> String {
    let cleaned = text.trim();
    if cleaned.is_empty() {
        return DEFAULT_TITLE.to_string();
    }
    truncate_chars(cleaned, TITLE_MAX_CHARS).trim_end().to_string()
}

/// 超过 150 个字符时截断并追加 "..."
pub fn mock_summary(text: &str) -> String {
    let cleaned = text.trim();
    if cleaned.is_empty() {
        return DEFAULT_SUMMARY.to_string();
    }
    truncate_with_ellipsis(cleaned, SUMMARY_MAX_CHARS)
}

/// 按非单词字符切分、转小写、去重并按字典序排列
pub fn mock_keywords(text: &str) -> Vec<String> {
    text.split(|c: char| !is_word_char(c))
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_generate_echoes_prompt() {
        assert_eq!(mock_generate("hi"), "(mock) you said: hi");
        assert_eq!(mock_generate(""), "(mock) you said: ");
    }

    #[test]
    fn test_mock_title_blank_defaults() {
        assert_eq!(mock_title(""), "Untitled");
        assert_eq!(mock_title("   "), "Untitled");
        assert_eq!(mock_title("\n\t"), "Untitled");
    }

    #[test]
    fn test_mock_title_truncates_to_60_chars() {
        assert_eq!(mock_title("  hello world  "), "hello world");

        let long = "x".repeat(100);
        assert_eq!(mock_title(&long).chars().count(), 60);

        // 多字节字符按字符计数
        let cjk = "标".repeat(80);
        assert_eq!(mock_title(&cjk).chars().count(), 60);
    }

    #[test]
    fn test_mock_summary_blank() {
        assert_eq!(mock_summary(""), "No content.");
        assert_eq!(mock_summary("    "), "No content.");
    }

    #[test]
    fn test_mock_summary_short_unchanged() {
        assert_eq!(mock_summary("  a short note "), "a short note");
        let exact = "y".repeat(150);
        assert_eq!(mock_summary(&exact), exact);
    }

    #[test]
    fn test_mock_summary_truncates() {
        let text = "lorem ".repeat(100);
        let summary = mock_summary(&text);
        assert!(summary.ends_with("..."));
        assert!(summary.chars().count() <= 153);
        assert!(!summary.trim_end_matches("...").ends_with(' '));

        let dense = "z".repeat(400);
        assert_eq!(mock_summary(&dense).chars().count(), 153);
    }

    #[test]
    fn test_mock_keywords_sorted_and_unique() {
        let words = mock_keywords("alpha beta gamma delta alpha");
        assert_eq!(words, vec!["alpha", "beta", "delta", "gamma"]);
    }

    #[test]
    fn test_mock_keywords_punctuation_and_case() {
        let words = mock_keywords("Rust, rust! RUST? snake_case; x-y");
        assert_eq!(words, vec!["rust", "snake_case", "x", "y"]);

        assert!(mock_keywords("").is_empty());
        assert!(mock_keywords(" ... !!! ").is_empty());
    }

    #[test]
    fn test_mock_keywords_invariants() {
        let inputs = [
            "The quick brown fox jumps over the lazy dog",
            "b a c a b",
            "中文 测试 中文",
            "42 7 42 seven",
        ];
        for input in inputs {
            let words = mock_keywords(input);
            let mut sorted = words.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(words, sorted, "input: {}", input);
        }
    }
}
