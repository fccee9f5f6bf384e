use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use transcript_service::application::services::{
    RequestValidator, TranscriptProvider, TranscriptionService,
};
use transcript_service::infrastructure::audio::TranscriptionEngineFactory;
use transcript_service::infrastructure::observability::{TracingConfig, init_tracing};
use transcript_service::infrastructure::storage::LocalScratchStore;
use transcript_service::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(
        TracingConfig::from_settings(&settings.logging, environment.as_str()),
        settings.server.port,
    );

    if settings.auth.api_key.as_deref().is_none_or(str::is_empty) {
        tracing::warn!("No API key configured; every transcript request will be rejected");
    }

    let scratch_dir = settings.scratch.directory_path();
    let scratch_store = LocalScratchStore::new(scratch_dir.clone())
        .with_context(|| format!("Failed to prepare scratch directory {}", scratch_dir.display()))?;
    tracing::info!(path = %scratch_dir.display(), "Scratch directory ready");

    let engines = TranscriptionEngineFactory::new(settings.engines.clone());
    let provider = TranscriptProvider::new(Arc::new(engines), Arc::new(scratch_store));
    let validator = RequestValidator::new(settings.validation.max_upload_bytes);
    let service = TranscriptionService::new(validator, provider);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server host/port")?;

    let router = create_router(AppState::new(service, settings));

    tracing::info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
