use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use skillscope::config::Config;
use skillscope::routes::build_router;
use skillscope::state::AppState;
use skillscope::trends::{HttpHtmlFetcher, InMemoryTrendsCache, SkillTrendsService};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Skillscope API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the article fetcher
    let fetcher = HttpHtmlFetcher::new(
        config.source_url.clone(),
        &config.user_agent,
        config.fetch_timeout,
    )?;
    info!(
        "Skill source: {} (timeout {}s)",
        config.source_url,
        config.fetch_timeout.as_secs()
    );

    // Process-wide trends cache and the service that guards it
    let trends = SkillTrendsService::new(
        Arc::new(fetcher),
        Arc::new(InMemoryTrendsCache::new()),
        config.cache_ttl,
    );
    info!("Skill trends cache TTL: {}s", config.cache_ttl.as_secs());

    // Build app state
    let state = AppState {
        config: config.clone(),
        trends: Arc::new(trends),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
