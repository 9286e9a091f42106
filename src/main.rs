use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use medscribe::application::ports::{AudioStore, JobRepository};
use medscribe::application::services::PipelineService;
use medscribe::infrastructure::llm::GeminiClient;
use medscribe::infrastructure::observability::{TracingConfig, init_tracing};
use medscribe::infrastructure::persistence::InMemoryJobRepository;
use medscribe::infrastructure::storage::LocalAudioStore;
use medscribe::infrastructure::transcription::DeepgramEngine;
use medscribe::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env().context("failed to load configuration")?;

    init_tracing(TracingConfig::default(), settings.server.port);

    // Provider clients are constructed once and reused for the process
    // lifetime.
    let transcription_engine = Arc::new(DeepgramEngine::new(
        settings.deepgram.api_key.clone(),
        settings.deepgram.base_url.clone(),
        settings.deepgram.model.clone(),
        settings.request_timeout(),
    ));
    let report_generator = Arc::new(GeminiClient::new(
        settings.gemini.api_key.clone(),
        settings.gemini.base_url.clone(),
        settings.gemini.model.clone(),
        settings.request_timeout(),
    ));

    let audio_store: Arc<dyn AudioStore> = Arc::new(
        LocalAudioStore::new(PathBuf::from(&settings.storage.upload_dir))
            .context("failed to open upload directory")?,
    );
    let job_repository: Arc<dyn JobRepository> = Arc::new(InMemoryJobRepository::new());

    let pipeline = Arc::new(PipelineService::new(
        Arc::clone(&audio_store),
        transcription_engine,
        report_generator,
        Arc::clone(&job_repository),
    ));

    let state = AppState {
        pipeline,
        job_repository,
        audio_store,
    };

    let router = create_router(state, settings.max_upload_bytes());

    let host: std::net::IpAddr = settings
        .server
        .host
        .parse()
        .context("invalid server host")?;
    let addr = SocketAddr::from((host, settings.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
