//! 调用日志存储
//!
//! 底层为单个 SQLite 连接，所有操作通过 `spawn_blocking` 执行，不阻塞异步运行时

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use parking_lot::Mutex;
use rusqlite::{Connection, params};
use serde::Serialize;

use super::model::{LogEntry, Mode};

/// 时间戳格式（秒级精度，以 Z 结尾）
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// 底层 SQLite 存储（同步）
struct SqliteLog {
    conn: Mutex<Connection>,
}

impl SqliteLog {
    fn open(db_path: &str) -> Result<Self> {
        let conn = Connection::open(db_path)
            .with_context(|| format!("打开日志数据库失败: {}", db_path))?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS logs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                ts TEXT NOT NULL,
                mode TEXT NOT NULL,
                input TEXT NOT NULL,
                output TEXT NOT NULL
            );",
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn insert(&self, mode: Mode, input: &str, output: &str) -> Result<i64> {
        let ts = Utc::now().format(TIMESTAMP_FORMAT).to_string();
        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO logs (ts, mode, input, output) VALUES (?1, ?2, ?3, ?4)",
            params![ts, mode.as_str(), input, output],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn recent(&self, limit: u32) -> Result<Vec<LogEntry>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(
            "SELECT id, ts, mode, input, output FROM logs ORDER BY id DESC LIMIT ?1",
        )?;
        let rows = stmt
            .query_map([limit as i64], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                ))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(id, timestamp, mode, input, output)| -> Result<LogEntry> {
                Ok(LogEntry {
                    id,
                    timestamp,
                    mode: mode.parse()?,
                    input: serde_json::from_str(&input)
                        .with_context(|| format!("日志 #{} 的 input 不是合法 JSON", id))?,
                    output: serde_json::from_str(&output)
                        .with_context(|| format!("日志 #{} 的 output 不是合法 JSON", id))?,
                })
            })
            .collect()
    }
}

/// 异步日志服务（公开 API）
///
/// 只追加、不修改；`id` 由 SQLite 自增分配
#[derive(Clone)]
pub struct LogStore {
    inner: Arc<SqliteLog>,
}

impl LogStore {
    /// 打开（必要时创建）数据库文件
    ///
    /// 父目录不存在时自动创建；传入 `:memory:` 时使用内存数据库
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self> {
        let db_path = db_path.as_ref();
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("创建数据库目录失败: {}", parent.display()))?;
            }
        }
        let path = db_path.to_string_lossy();
        Ok(Self {
            inner: Arc::new(SqliteLog::open(&path)?),
        })
    }

    /// 内存数据库，进程退出即丢弃
    #[cfg(test)]
    pub fn in_memory() -> Result<Self> {
        Self::open(":memory:")
    }

    /// 记录一次调用，返回分配的 id
    pub async fn record<I, O>(&self, mode: Mode, input: &I, output: &O) -> Result<i64>
    where
        I: Serialize + ?Sized,
        O: Serialize + ?Sized,
    {
        let input = serde_json::to_string(input).context("序列化请求失败")?;
        let output = serde_json::to_string(output).context("序列化响应失败")?;
        let inner = self.inner.clone();
        tokio::task::spawn_blocking(move || inner.insert(mode, &input, &output)).await?
    }

    /// 按 id 倒序返回最近的 `limit` 条记录
    pub async fn recent(&self, limit: u32) -> Result<Vec<LogEntry>> {
        let inner = self.inner.clone();
        tokio::task::spawn_blocking(move || inner.recent(limit)).await?
    }
}
