//! HTTP API 模块
//!
//! # 功能
//! - generate / title / summarize / keywords 四种文本处理
//! - 调用历史查询
//! - 存活检查
//! - 静态 UI 服务

mod error;
mod handlers;
mod router;
mod service;
pub mod types;
mod ui;

pub use router::{AppState, create_router};
pub use service::TextService;
