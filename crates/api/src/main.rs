use std::sync::Arc;

use anyhow::Context;

use restock_infra::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();
    restock_observability::init();

    let config = AppConfig::from_env().context("invalid configuration")?;
    let services = Arc::new(restock_api::app::services::build_services(&config).await?);
    let app = restock_api::app::build_app(services);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
