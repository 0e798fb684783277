use std::sync::Arc;

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use openchat_relay::{config::Config, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before the filter so RUST_LOG can come from it.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()
        .inspect_err(|e| error!(error = %e, "invalid configuration"))
        .context("loading configuration")?;

    let state = AppState::from_config(&config)
        .inspect_err(|e| error!(error = %e, "content policy could not be built"))
        .context("building content policy")?;

    let app = routes::create_router(&config.static_dir).with_state(Arc::new(state));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .inspect_err(|e| error!(error = %e, %addr, "bind failed"))
        .with_context(|| format!("binding {addr}"))?;

    info!(model = %config.model, base_url = %config.base_url, "completion service configured");
    info!("🚀 OpenChat relay running at http://{addr}");
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
