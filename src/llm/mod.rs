//! 上游 LLM 补全适配层
//!
//! 把一次领域请求（原始 prompt，或 文本 + 固定提示词）映射为一次 Chat Completions 调用，
//! 并把回复整理成响应需要的形状

mod client;
mod prompt;
pub mod types;

pub use client::{ChatCompletion, CompletionClient, CompletionError};

use crate::common::truncate_chars;
use crate::mock::TITLE_MAX_CHARS;

/// 整理模型返回的标题：去除首尾空白并限制为 60 个字符
///
/// 返回空字符串表示模型没有给出可用标题，由调用方决定默认值
pub fn clean_title(raw: &str) -> String {
    truncate_chars(raw.trim(), TITLE_MAX_CHARS).trim_end().to_string()
}

/// 解析模型返回的关键词
///
/// 优先按 JSON 字符串数组解析；失败（或不是数组）时按逗号切分。
/// 两种方式都保留模型给出的顺序，并丢弃空白项
pub fn parse_keywords(raw: &str) -> Vec<String> {
    let items = match serde_json::from_str::<Vec<String>>(raw.trim()) {
        Ok(list) => list,
        Err(_) => raw.split(',').map(str::to_string).collect(),
    };

    items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
