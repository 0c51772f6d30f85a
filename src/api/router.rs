//! API 路由与共享状态

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{generate, health, history, keywords, summarize, title};
use super::service::TextService;
use super::ui;

/// 应用共享状态
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<TextService>,
    /// 静态 UI 目录（None 时使用内嵌文件）
    pub ui_dir: Option<PathBuf>,
}

impl AppState {
    pub fn new(service: TextService) -> Self {
        Self {
            service: Arc::new(service),
            ui_dir: None,
        }
    }

    /// 设置磁盘上的 UI 目录
    pub fn with_ui_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.ui_dir = Some(dir.into());
        self
    }
}

/// CORS 中间件层
///
/// 允许任意来源、方法和请求头，便于本地 UI 或其他前端直接调用
pub fn cors_layer() -> tower_http::cors::CorsLayer {
    use tower_http::cors::{Any, CorsLayer};

    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// 创建 API 路由
///
/// # 端点
/// - `GET /health` - 存活检查
/// - `POST /generate` - 自由生成
/// - `POST /title` - 生成标题
/// - `POST /summarize` - 生成摘要
/// - `POST /keywords` - 提取关键词
/// - `GET /history?limit=N` - 最近的调用记录（新到旧）
/// - `GET /ui` - 静态页面
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/generate", post(generate))
        .route("/title", post(title))
        .route("/summarize", post(summarize))
        .route("/keywords", post(keywords))
        .route("/history", get(history))
        .route("/ui", get(ui::index))
        .route("/ui/{*path}", get(ui::asset))
        .layer(cors_layer())
        .with_state(state)
}
