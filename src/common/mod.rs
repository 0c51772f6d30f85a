//! 公共工具模块

/// 按字符数截断字符串，不会在多字节字符中间截断
///
/// 返回不超过 `max_chars` 个字符的前缀
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// 截断到 `max_chars` 个字符并追加省略号
///
/// 截断后会先去掉尾部空白，结果最长为 `max_chars + 3` 个字符
pub fn truncate_with_ellipsis(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }

    let truncated = truncate_chars(s, max_chars).trim_end();
    format!("{}...", truncated)
}
