//! 调用日志模块
//!
//! 每次处理完的请求追加一条记录，支持按时间倒序查询

pub mod model;
#[allow(clippy::module_inception)]
mod store;

pub use model::{LogEntry, Mode};
pub use store::LogStore;
