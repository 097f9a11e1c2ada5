//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 模型文件配置
    #[serde(default)]
    pub model: ModelConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 请求体大小上限（字节）
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_max_body_bytes() -> usize {
    1024 * 1024 // 1 MB
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 模型文件配置
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// 模型名称（用于日志和 /api/model）
    #[serde(default = "default_model_name")]
    pub name: String,

    /// 回归模型文件路径（.json 或 .bin）
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,

    /// 缩放器文件路径（.json 或 .bin）
    #[serde(default = "default_scaler_path")]
    pub scaler_path: PathBuf,
}

fn default_model_name() -> String {
    "fashion_model".to_string()
}

fn default_model_path() -> PathBuf {
    PathBuf::from("models/fashion_model.json")
}

fn default_scaler_path() -> PathBuf {
    PathBuf::from("models/scaler.json")
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: default_model_name(),
            model_path: default_model_path(),
            scaler_path: default_scaler_path(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
