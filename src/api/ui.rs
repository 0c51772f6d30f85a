//! 静态 UI 服务
//!
//! 默认使用编译时内嵌的 `static/` 目录，配置 `uiDir` 后改为从磁盘读取

use std::path::{Component, Path, PathBuf};

use axum::{
    body::Body,
    extract::{Path as PathParam, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

use super::router::AppState;

#[derive(RustEmbed)]
#[folder = "static/"]
struct Assets;

const INDEX_FILE: &str = "index.html";

/// GET /ui
pub async fn index(State(state): State<AppState>) -> Response {
    serve(state.ui_dir.as_deref(), INDEX_FILE).await
}

/// GET /ui/{*path}
pub async fn asset(State(state): State<AppState>, PathParam(path): PathParam<String>) -> Response {
    let path = if path.is_empty() { INDEX_FILE } else { path.as_str() };
    serve(state.ui_dir.as_deref(), path).await
}

async fn serve(ui_dir: Option<&Path>, path: &str) -> Response {
    let Some(relative) = sanitize(path) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let bytes = match ui_dir {
        Some(dir) => match tokio::fs::read(dir.join(&relative)).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!("读取 UI 文件失败 {}: {}", relative.display(), e);
                return StatusCode::NOT_FOUND.into_response();
            }
        },
        None => match Assets::get(&relative.to_string_lossy().replace('\\', "/")) {
            Some(file) => file.data.into_owned(),
            None => return StatusCode::NOT_FOUND.into_response(),
        },
    };

    let mime = mime_guess::from_path(&relative).first_or_octet_stream();
    (
        [(header::CONTENT_TYPE, mime.as_ref().to_string())],
        Body::from(bytes),
    )
        .into_response()
}

/// 只允许普通路径分量，拒绝 `..` 和绝对路径
fn sanitize(path: &str) -> Option<PathBuf> {
    let path = Path::new(path);
    let mut clean = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => clean.push(part),
            Component::CurDir => {}
            _ => return None,
        }
    }
    if clean.as_os_str().is_empty() {
        None
    } else {
        Some(clean)
    }
}
