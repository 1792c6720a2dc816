use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use campus_guide_backend::config::Config;
use campus_guide_backend::routes::create_router;
use campus_guide_backend::services::record_store::RecordStore;
use campus_guide_backend::services::text_provider::TextProvider;
use campus_guide_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let store = RecordStore::load(&config.faculty_data, &config.rooms_data).await;
    if !store.is_loaded() {
        tracing::warn!("record store unavailable; faculty and room queries will fail");
    }

    let provider = TextProvider::new(
        config.provider_base_url,
        config.provider_model,
        config.provider_api_key,
    );

    let state = Arc::new(AppState::new(store, provider));

    // Idle rate-limit buckets are only pruned on re-check; sweep them
    // out in the background so one-off clients don't accumulate.
    let limiter = state.limiter.clone();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(std::time::Duration::from_secs(15 * 60));
        loop {
            ticker.tick().await;
            let removed = limiter.purge_idle().await;
            if removed > 0 {
                tracing::debug!(removed, "purged idle rate-limit clients");
            }
        }
    });

    // Browser widget may be served from elsewhere during development.
    let app = create_router(state).layer(CorsLayer::very_permissive());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("campus guide service running on http://{addr}");
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("server exited")
}
