//! 调用日志数据模型

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 请求类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Generate,
    Title,
    Summarize,
    Keywords,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Generate => "generate",
            Mode::Title => "title",
            Mode::Summarize => "summarize",
            Mode::Keywords => "keywords",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "generate" => Ok(Mode::Generate),
            "title" => Ok(Mode::Title),
            "summarize" => Ok(Mode::Summarize),
            "keywords" => Ok(Mode::Keywords),
            other => Err(anyhow::anyhow!("未知的日志类型: {}", other)),
        }
    }
}

/// 单条调用日志
///
/// `input` / `output` 在库中以 JSON 文本保存，读取时还原为结构化值
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: i64,
    /// UTC 时间，格式 `%Y-%m-%dT%H:%M:%SZ`
    pub timestamp: String,
    pub mode: Mode,
    pub input: serde_json::Value,
    pub output: serde_json::Value,
}
