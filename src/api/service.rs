//! 文本处理业务逻辑
//!
//! 每个请求：选择 mock 或真实调用 → 写入调用日志 → 返回响应。
//! 日志写入失败时整个请求失败，保证成功返回的请求都有记录

use std::sync::Arc;

use crate::llm::{self, ChatCompletion};
use crate::mock::{self, DEFAULT_SUMMARY, DEFAULT_TITLE};
use crate::store::{LogEntry, LogStore, Mode};

use super::error::ApiError;
use super::types::{GenerateRequest, KeywordsResponse, TextRequest, TextResponse};

pub struct TextService {
    mock_mode: bool,
    completion: Arc<dyn ChatCompletion>,
    store: LogStore,
}

impl TextService {
    pub fn new(mock_mode: bool, completion: Arc<dyn ChatCompletion>, store: LogStore) -> Self {
        Self {
            mock_mode,
            completion,
            store,
        }
    }

    pub async fn generate(&self, req: GenerateRequest) -> Result<TextResponse, ApiError> {
        if req.prompt.trim().is_empty() {
            return Err(ApiError::Validation("prompt must not be empty".to_string()));
        }

        let text = if self.mock_mode {
            mock::mock_generate(&req.prompt)
        } else {
            self.completion.complete(Mode::Generate, &req.prompt).await?
        };

        let payload = TextResponse { text };
        self.record(Mode::Generate, &req, &payload).await?;
        Ok(payload)
    }

    pub async fn title(&self, req: TextRequest) -> Result<TextResponse, ApiError> {
        let cleaned = req.text.trim();
        let text = if self.mock_mode {
            mock::mock_title(&req.text)
        } else if cleaned.is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            let raw = self.completion.complete(Mode::Title, cleaned).await?;
            let title = llm::clean_title(&raw);
            if title.is_empty() {
                DEFAULT_TITLE.to_string()
            } else {
                title
            }
        };

        let payload = TextResponse { text };
        self.record(Mode::Title, &req, &payload).await?;
        Ok(payload)
    }

    pub async fn summarize(&self, req: TextRequest) -> Result<TextResponse, ApiError> {
        let cleaned = req.text.trim();
        let text = if self.mock_mode {
            mock::mock_summary(&req.text)
        } else if cleaned.is_empty() {
            DEFAULT_SUMMARY.to_string()
        } else {
            self.completion.complete(Mode::Summarize, cleaned).await?
        };

        let payload = TextResponse { text };
        self.record(Mode::Summarize, &req, &payload).await?;
        Ok(payload)
    }

    pub async fn keywords(&self, req: TextRequest) -> Result<KeywordsResponse, ApiError> {
        let cleaned = req.text.trim();
        let keywords = if self.mock_mode {
            mock::mock_keywords(&req.text)
        } else if cleaned.is_empty() {
            Vec::new()
        } else {
            let raw = self.completion.complete(Mode::Keywords, cleaned).await?;
            llm::parse_keywords(&raw)
        };

        let payload = KeywordsResponse { keywords };
        self.record(Mode::Keywords, &req, &payload).await?;
        Ok(payload)
    }

    pub async fn history(&self, limit: u32) -> Result<Vec<LogEntry>, ApiError> {
        tracing::debug!(limit, "查询调用历史");
        self.store.recent(limit).await.map_err(ApiError::storage)
    }

    async fn record<I, O>(&self, mode: Mode, input: &I, output: &O) -> Result<(), ApiError>
    where
        I: serde::Serialize + ?Sized,
        O: serde::Serialize + ?Sized,
    {
        self.store
            .record(mode, input, output)
            .await
            .map(|_| ())
            .map_err(ApiError::storage)
    }
}
