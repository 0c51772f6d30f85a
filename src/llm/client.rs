//! 上游 Chat Completions 客户端

use async_trait::async_trait;
use reqwest::Client;

use crate::http_client::build_client;
use crate::model::config::Config;
use crate::store::Mode;

use super::prompt::build_request;
use super::types::ChatResponse;

/// 上游调用错误
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// 缺少凭据等配置问题，不会发起网络请求
    #[error("{0}")]
    Configuration(String),
    /// 网络错误、非 2xx 状态或响应格式不符
    #[error("{0}")]
    Upstream(String),
}

impl CompletionError {
    pub fn missing_api_key() -> Self {
        Self::Configuration("Missing OPENAI_API_KEY".to_string())
    }
}

/// 补全接口
///
/// 一次调用对应一次上游请求，返回第一条回复的原始文本
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(&self, mode: Mode, input: &str) -> Result<String, CompletionError>;
}

/// OpenAI 兼容 API 客户端
pub struct CompletionClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl CompletionClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = build_client(config.proxy_url.as_deref(), config.request_timeout_secs)?;
        Ok(Self {
            client,
            base_url: config.openai_base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key().map(str::to_string),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl ChatCompletion for CompletionClient {
    async fn complete(&self, mode: Mode, input: &str) -> Result<String, CompletionError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(CompletionError::missing_api_key)?;

        let body = build_request(&self.model, mode, input);
        tracing::debug!(mode = %mode, model = %self.model, "发送上游补全请求");

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::Upstream(format!("上游请求失败: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(CompletionError::Upstream(format!(
                "上游 API 返回错误 {}: {}",
                status, text
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::Upstream(format!("解析上游响应失败: {}", e)))?;

        parsed
            .first_text()
            .map(str::to_string)
            .ok_or_else(|| CompletionError::Upstream("上游响应中没有回复内容".to_string()))
    }
}
