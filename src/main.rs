//! Alarm Voice - 角色语音闹钟 TTS 网关
//!
//! 启动顺序：配置 → 日志 → Registry → 引擎客户端（探测版本）→ HTTP 服务器

use std::sync::Arc;

use alarm_voice::application::SynthesisEnginePort;
use alarm_voice::config::{load_config, print_config};
use alarm_voice::domain::character::CharacterRegistry;
use alarm_voice::infrastructure::adapters::{HttpEngineClient, HttpEngineClientConfig};
use alarm_voice::infrastructure::http::{AppState, HttpServer, ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},alarm_voice={},tower_http=debug",
        config.log.level, config.log.level
    );
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter));
    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    tracing::info!("Alarm Voice - 角色语音闹钟 TTS 网关");
    print_config(&config);

    // 人设表
    let registry = Arc::new(CharacterRegistry::builtin()?);
    tracing::info!(characters = registry.len(), "Character registry loaded");

    // VOICEVOX 引擎客户端
    let engine_config = HttpEngineClientConfig {
        base_url: config.engine.url.clone(),
        timeout_secs: config.engine.timeout_secs,
    };
    let engine = Arc::new(HttpEngineClient::new(engine_config)?);

    // 连通性探测，失败只告警
    if config.engine.probe_on_startup {
        match engine.version().await {
            Ok(version) => tracing::info!(version = %version, "✅ VOICEVOXエンジンとの接続確認完了"),
            Err(e) => {
                tracing::warn!(error = %e, "❌ VOICEVOXエンジンに接続できません。先に起動してください。");
                tracing::warn!("   {} で確認できます", engine.base_url());
            }
        }
    }

    let state = AppState::new(registry, engine, config.server.image_base_url());
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, state);

    tracing::info!("Server running on {}", config.server.public_base_url());

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
