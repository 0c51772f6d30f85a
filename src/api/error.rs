//! API 错误类型
//!
//! 错误种类到 HTTP 状态码的映射只在 `status_code` 中维护一份

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::llm::CompletionError;

use super::types::ErrorResponse;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 请求体或查询参数不合法
    #[error("{0}")]
    Validation(String),
    /// 缺少上游凭据等配置问题
    #[error("{0}")]
    Configuration(String),
    /// 上游补全 API 调用失败
    #[error("{0}")]
    Upstream(String),
    /// 日志写入/读取失败
    #[error("{0}")]
    Storage(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "invalid_request_error",
            ApiError::Configuration(_) => "configuration_error",
            ApiError::Upstream(_) => "upstream_error",
            ApiError::Storage(_) => "internal_error",
        }
    }

    pub fn storage(err: anyhow::Error) -> Self {
        ApiError::Storage(format!("{:#}", err))
    }

    pub fn into_response_body(self) -> ErrorResponse {
        ErrorResponse::new(self.error_type(), self.to_string())
    }
}

impl From<CompletionError> for ApiError {
    fn from(err: CompletionError) -> Self {
        match err {
            CompletionError::Configuration(message) => ApiError::Configuration(message),
            CompletionError::Upstream(message) => ApiError::Upstream(message),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(kind = self.error_type(), "请求处理失败: {}", self);
        }
        (status, Json(self.into_response_body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_table() {
        assert_eq!(
            ApiError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Configuration("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Upstream("x".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::Storage("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_completion_error_mapping() {
        let err: ApiError = CompletionError::missing_api_key().into();
        assert!(matches!(err, ApiError::Configuration(_)));
        assert_eq!(err.to_string(), "Missing OPENAI_API_KEY");

        let err: ApiError = CompletionError::Upstream("timeout".into()).into();
        assert!(matches!(err, ApiError::Upstream(ref m) if m == "timeout"));
    }

    #[test]
    fn test_response_body_shape() {
        let body = ApiError::Validation("prompt must not be empty".into()).into_response_body();
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["error"]["type"], "invalid_request_error");
        assert_eq!(value["error"]["message"], "prompt must not be empty");
    }
}
