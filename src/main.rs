use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mergington::config::ServerConfig;
use mergington::web::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Config: .env first, real environment wins
    let config = ServerConfig::from_env();

    // 2. Start logging (RUST_LOG overrides the default filter)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("mergington=info,tower_http=info")),
        )
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "starting mergington");

    // 3. Build the app on a freshly seeded directory
    let app = build_router(AppState::seeded(), &config.static_dir);

    // 4. Start the server (with fallback port)
    let addr = config.addr()?;
    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!(%addr, %fallback, error = %e, "bind failed, trying fallback port");
            TcpListener::bind(fallback)
                .await
                .with_context(|| format!("cannot bind fallback address {}", fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("serving on http://{}", bound_addr);
    info!("activities at http://{}/activities", bound_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
