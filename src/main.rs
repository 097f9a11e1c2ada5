//! Verdant - 可持续时尚回归预测服务
//!
//! 启动时加载模型与缩放器各一次，之后只读提供 /predict 服务

use std::sync::Arc;

use anyhow::Context;
use verdant::config::{load_config, print_config, LogConfig};
use verdant::infrastructure::http::{AppState, HttpServer, ServerConfig};
use verdant::infrastructure::ScaledRegressor;

fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},verdant={},tower_http=debug", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Verdant - Sustainable Fashion AI API");
    print_config(&config);

    // 加载模型与缩放器
    let predictor = ScaledRegressor::load(&config.model).with_context(|| {
        format!(
            "Failed to load model artifacts ({} / {})",
            config.model.model_path.display(),
            config.model.scaler_path.display()
        )
    })?;

    let state = AppState::new(Arc::new(predictor));
    let server = HttpServer::new(ServerConfig::from(&config.server), state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
