use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 应用配置
///
/// 先从 JSON 文件加载（不存在时使用默认值），再由环境变量覆盖
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Mock 模式：不访问上游 API，使用本地确定性文本处理
    #[serde(default)]
    pub mock_mode: bool,

    /// 上游 API 密钥（未配置时真实调用返回配置错误）
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openai_api_key: Option<String>,

    /// OpenAI 兼容 API 地址（不含 /chat/completions）
    #[serde(default = "default_openai_base_url")]
    pub openai_base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// SQLite 日志数据库路径
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,

    /// 上游请求超时（秒）
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// HTTP 代理地址（可选）
    /// 支持格式: http://host:port, https://host:port, socks5://host:port
    #[serde(default)]
    pub proxy_url: Option<String>,

    /// 静态 UI 目录（可选，配置后从磁盘读取而不是使用内嵌文件）
    #[serde(default)]
    pub ui_dir: Option<PathBuf>,

    /// 配置文件路径（运行时元数据，不写入 JSON）
    #[serde(skip)]
    config_path: Option<PathBuf>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_db_path() -> PathBuf {
    PathBuf::from("api-log.db")
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            mock_mode: false,
            openai_api_key: None,
            openai_base_url: default_openai_base_url(),
            model: default_model(),
            db_path: default_db_path(),
            request_timeout_secs: default_request_timeout_secs(),
            proxy_url: None,
            ui_dir: None,
            config_path: None,
        }
    }
}

impl Config {
    /// 获取默认配置文件路径
    pub fn default_config_path() -> &'static str {
        "config.json"
    }

    /// 从文件加载配置
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            // 配置文件不存在，返回默认配置
            let mut config = Self::default();
            config.config_path = Some(path.to_path_buf());
            return Ok(config);
        }

        let content = fs::read_to_string(path)?;
        let mut config: Config = serde_json::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// 获取配置文件路径（如果有）
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// 用进程环境变量覆盖配置
    pub fn apply_env(&mut self) -> anyhow::Result<()> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// 用给定的查找函数覆盖配置
    ///
    /// 识别的变量：`MOCK_MODE`（"1" 开启）、`OPENAI_API_KEY`、`OPENAI_BASE_URL`、
    /// `OPENAI_MODEL`、`DB_PATH`、`HOST`、`PORT`。空白的 `OPENAI_API_KEY` 被忽略
    pub fn apply_env_with<F>(&mut self, lookup: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("MOCK_MODE") {
            self.mock_mode = value.trim() == "1";
        }
        // 空白值不覆盖配置文件中的密钥
        if let Some(value) = lookup("OPENAI_API_KEY").filter(|v| !v.trim().is_empty()) {
            self.openai_api_key = Some(value);
        }
        if let Some(value) = lookup("OPENAI_BASE_URL") {
            self.openai_base_url = value;
        }
        if let Some(value) = lookup("OPENAI_MODEL") {
            self.model = value;
        }
        if let Some(value) = lookup("DB_PATH") {
            self.db_path = PathBuf::from(value);
        }
        if let Some(value) = lookup("HOST") {
            self.host = value;
        }
        if let Some(value) = lookup("PORT") {
            self.port = value
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("PORT 环境变量无效 ({}): {}", value, e))?;
        }
        Ok(())
    }

    /// 获取有效的 API 密钥，空白字符串视为未配置
    pub fn api_key(&self) -> Option<&str> {
        self.openai_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert!(!config.mock_mode);
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.db_path, PathBuf::from("api-log.db"));
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.api_key().is_none());
    }

    #[test]
    fn test_parse_camel_case_with_defaults() {
        let json = r#"{"port": 9000, "mockMode": true, "dbPath": "data/log.db"}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.port, 9000);
        assert!(config.mock_mode);
        assert_eq!(config.db_path, PathBuf::from("data/log.db"));
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.openai_base_url, "https://api.openai.com/v1");
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_env_with(lookup_from(&[
                ("MOCK_MODE", "1"),
                ("OPENAI_API_KEY", "sk-test"),
                ("DB_PATH", "/tmp/x.db"),
                ("PORT", "3000"),
            ]))
            .unwrap();
        assert!(config.mock_mode);
        assert_eq!(config.api_key(), Some("sk-test"));
        assert_eq!(config.db_path, PathBuf::from("/tmp/x.db"));
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_mock_mode_only_enabled_by_one() {
        let mut config = Config::default();
        config.mock_mode = true;
        config
            .apply_env_with(lookup_from(&[("MOCK_MODE", "0")]))
            .unwrap();
        assert!(!config.mock_mode);

        config
            .apply_env_with(lookup_from(&[("MOCK_MODE", "true")]))
            .unwrap();
        assert!(!config.mock_mode);
    }

    #[test]
    fn test_invalid_port_env() {
        let mut config = Config::default();
        assert!(config
            .apply_env_with(lookup_from(&[("PORT", "eighty")]))
            .is_err());
    }

    #[test]
    fn test_blank_env_api_key_keeps_file_key() {
        let mut config = Config::default();
        config.openai_api_key = Some("sk-from-file".to_string());
        config
            .apply_env_with(lookup_from(&[("OPENAI_API_KEY", "  ")]))
            .unwrap();
        assert_eq!(config.api_key(), Some("sk-from-file"));
    }

    #[test]
    fn test_blank_api_key_is_missing() {
        let mut config = Config::default();
        config.openai_api_key = Some("   ".to_string());
        assert!(config.api_key().is_none());
    }

    #[test]
    fn test_example_config_has_no_api_key() {
        let config: Config =
            serde_json::from_str(include_str!("../../config.example.json")).unwrap();
        assert!(config.api_key().is_none());
        assert!(!config.mock_mode);
        assert_eq!(config.db_path, PathBuf::from("data/api-log.db"));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = Config::load("definitely-not-here/config.json").unwrap();
        assert_eq!(config.port, 8080);
        assert!(config.config_path().is_some());
    }
}
