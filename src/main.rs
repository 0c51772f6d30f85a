mod api;
mod common;
mod http_client;
mod llm;
mod mock;
mod model;
mod store;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use api::{AppState, TextService, create_router};
use llm::CompletionClient;
use model::arg::Args;
use model::config::Config;
use store::LogStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 不存在时忽略
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config_path = args
        .config
        .unwrap_or_else(|| Config::default_config_path().to_string());
    let mut config = Config::load(&config_path)
        .with_context(|| format!("加载配置失败: {}", config_path))?;
    config.apply_env()?;
    if args.mock {
        config.mock_mode = true;
    }

    if let Some(path) = config.config_path().filter(|p| p.exists()) {
        tracing::info!("已加载配置: {}", path.display());
    } else {
        tracing::info!("配置文件 {} 不存在，使用默认配置", config_path);
    }
    tracing::info!(
        model = %config.model,
        base_url = %config.openai_base_url,
        db_path = %config.db_path.display(),
        timeout_secs = config.request_timeout_secs,
        has_api_key = config.api_key().is_some(),
        "服务配置"
    );
    if config.mock_mode {
        tracing::warn!("Mock 模式已开启，所有请求使用本地文本处理，不访问上游 API");
    } else if config.api_key().is_none() {
        tracing::warn!("未配置 OPENAI_API_KEY，非空请求将返回配置错误");
    }

    let store = LogStore::open(&config.db_path)?;
    let completion = CompletionClient::new(&config).context("创建上游 HTTP 客户端失败")?;
    let service = TextService::new(config.mock_mode, Arc::new(completion), store);

    let mut state = AppState::new(service);
    if let Some(dir) = &config.ui_dir {
        tracing::info!("UI 目录: {}", dir.display());
        state = state.with_ui_dir(dir.clone());
    }
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("启动 HTTP 服务器: {}", addr);
    tracing::info!("可用 API:");
    tracing::info!("  GET  /health");
    tracing::info!("  POST /generate");
    tracing::info!("  POST /title");
    tracing::info!("  POST /summarize");
    tracing::info!("  POST /keywords");
    tracing::info!("  GET  /history?limit=N");
    tracing::info!("  GET  /ui");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("监听地址失败: {}", addr))?;
    axum::serve(listener, app).await?;
    Ok(())
}
