//! Psyche API — situation-to-archetype resolution server.
//!
//! Accepts free-text situation descriptions over REST, resolves each to a
//! Major Arcana card plus a generated interpretation via the configured
//! vendor, and degrades to the deterministic local oracle when the vendor
//! is unavailable.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use psyche_api::config::{ApiConfig, ProviderKind};
use psyche_api::routes;
use psyche_api::state::AppState;
use psyche_resolver::{
    GeminiClient, GeminiConfig, OpenRouterClient, OpenRouterConfig, TextGenerator,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "psyche-api starting");

    let config = ApiConfig::from_env();
    let generator = build_generator(config.provider)?;
    let state = AppState::new(generator);

    let app = routes::build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, provider = ?config.provider, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the vendor adapter selected by configuration. Credentials come
/// from the environment once, here — never mid-call.
fn build_generator(provider: ProviderKind) -> anyhow::Result<Arc<dyn TextGenerator>> {
    Ok(match provider {
        ProviderKind::Gemini => Arc::new(GeminiClient::new(GeminiConfig::from_env()?)),
        ProviderKind::OpenRouter => Arc::new(OpenRouterClient::new(OpenRouterConfig::from_env()?)),
    })
}
