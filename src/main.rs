//! Entry point for the translation server.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use garhwali_translation_server::config;
use garhwali_translation_server::lookup::{HttpDictionaryClient, LookupGateway};
use garhwali_translation_server::moderation::ModerationService;
use garhwali_translation_server::server::{self, AppState};
use garhwali_translation_server::store::{RequestQueue, TranslationStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = config::load(Path::new("."))?;

    let translations = Arc::new(TranslationStore::load(settings.translations_path())?);
    let requests = Arc::new(RequestQueue::load(settings.requests_path())?);
    let moderation = Arc::new(ModerationService::new(Arc::clone(&translations), Arc::clone(&requests)));

    let upstream = Arc::new(HttpDictionaryClient::new(
        &settings.upstream.base_url,
        Duration::from_secs(settings.upstream.timeout_secs),
    )?);
    let lookup = Arc::new(LookupGateway::new(upstream, Arc::clone(&translations)));

    let state = AppState::new(moderation, lookup);

    let addr: SocketAddr = settings.bind_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, server::router(state)).await?;

    Ok(())
}
