//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{
    Config, ConfigError as ConfigCrateError, Environment, File, FileFormat, FileSourceFile,
};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 允许的日志级别
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `VERDANT_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `VERDANT_SERVER__HOST=127.0.0.1`
/// - `VERDANT_SERVER__PORT=8080`
/// - `VERDANT_MODEL__MODEL_PATH=/models/fashion_model.json`
/// - `VERDANT_MODEL__SCALER_PATH=/models/scaler.json`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则在当前目录搜索
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    match config_path {
        Some(path) => build_config(vec![File::from(path).required(true)]),
        None => load_config_from_dir(Path::new(".")),
    }
}

/// 在指定目录下搜索 config.toml / config.local.toml，后者优先
pub fn load_config_from_dir(dir: &Path) -> Result<AppConfig, ConfigError> {
    let files = CONFIG_FILE_NAMES
        .iter()
        .map(|name| File::with_name(&dir.join(name).to_string_lossy()).required(false))
        .collect();
    build_config(files)
}

/// 合并默认值、配置文件和环境变量
fn build_config(files: Vec<File<FileSourceFile, FileFormat>>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5000)?
        .set_default("server.max_body_bytes", 1024 * 1024)?
        .set_default("model.name", "fashion_model")?
        .set_default("model.model_path", "models/fashion_model.json")?
        .set_default("model.scaler_path", "models/scaler.json")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件（后添加的覆盖先添加的）
    for file in files {
        builder = builder.add_source(file);
    }

    // 3. 环境变量（最高优先级）
    // 例如: VERDANT_MODEL__MODEL_PATH=/models/model.json
    // 注意: 环境变量名会被转换为小写
    builder = builder.add_source(
        Environment::with_prefix("VERDANT")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.server.max_body_bytes == 0 {
        return Err(ConfigError::ValidationError(
            "Max body size cannot be 0".to_string(),
        ));
    }

    if config.model.model_path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Model path cannot be empty".to_string(),
        ));
    }

    if config.model.scaler_path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Scaler path cannot be empty".to_string(),
        ));
    }

    if !LOG_LEVELS.contains(&config.log.level.to_lowercase().as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "Unknown log level: {}",
            config.log.level
        )));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Max Body Size: {} bytes", config.server.max_body_bytes);
    tracing::info!("Model Name: {}", config.model.name);
    tracing::info!("Model Path: {:?}", config.model.model_path);
    tracing::info!("Scaler Path: {:?}", config.model.scaler_path);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("Log JSON: {}", config.log.json);
    tracing::info!("=================================");
}
