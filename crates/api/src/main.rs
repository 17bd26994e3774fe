use anyhow::Context;

use deepauth_api::config::ServerConfig;
use deepauth_engine::AnalysisEngine;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    deepauth_observability::init();

    let config = ServerConfig::from_env();
    let app = deepauth_api::app::build_app(AnalysisEngine::new());

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
