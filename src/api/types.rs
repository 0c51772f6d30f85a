//! API 请求/响应类型

use serde::{Deserialize, Serialize};

// === 错误响应 ===

/// API 错误响应
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// 错误详情
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                error_type: error_type.into(),
                message: message.into(),
            },
        }
    }
}

// === 请求 ===

/// POST /generate 请求体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

/// POST /title、/summarize、/keywords 请求体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRequest {
    pub text: String,
}

/// GET /history 查询参数
#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<i64>,
}

/// history 默认条数
pub const DEFAULT_HISTORY_LIMIT: u32 = 10;

/// history 单次最多返回条数
pub const MAX_HISTORY_LIMIT: u32 = 100;

impl HistoryQuery {
    /// 有效条数，限制在 [1, 100]
    pub fn effective_limit(&self) -> u32 {
        match self.limit {
            Some(limit) => limit.clamp(1, MAX_HISTORY_LIMIT as i64) as u32,
            None => DEFAULT_HISTORY_LIMIT,
        }
    }
}

// === 响应 ===

/// generate / title / summarize 响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextResponse {
    pub text: String,
}

/// keywords 响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordsResponse {
    pub keywords: Vec<String>,
}

/// health 响应
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}
