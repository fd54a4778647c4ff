use anyhow::Context;
use std::sync::Arc;

use mentor_backend::{config::Config, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let config = Config::from_env()?;
    let state = Arc::new(AppState::from_config(&config));

    let app = routes::create_router(&config.templates_dir).with_state(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("🚀 mentor backend running at http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,mentor_backend=debug,tower_http=info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
