use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use pdfgate::application::ports::StagingStore;
use pdfgate::application::services::UploadService;
use pdfgate::infrastructure::conversion::default_converter;
use pdfgate::infrastructure::observability::{TracingConfig, init_tracing};
use pdfgate::infrastructure::pdf::PdfTextProcessor;
use pdfgate::infrastructure::storage::LocalStagingStore;
use pdfgate::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(&settings.logging, environment));

    let staging_store: Arc<dyn StagingStore> = Arc::new(
        LocalStagingStore::new(PathBuf::from(&settings.storage.upload_dir))
            .context("Failed to prepare upload directory")?,
    );

    let converter = Arc::new(default_converter(settings.processing.conversion_timeout()));
    tracing::info!(
        extensions = ?converter.supported_extensions(),
        "Document converters registered"
    );

    let pdf_processor = Arc::new(PdfTextProcessor::new(
        settings.processing.extraction_timeout(),
    ));

    let upload_service = Arc::new(UploadService::new(
        staging_store,
        converter,
        pdf_processor,
        settings.storage.naming,
        settings.storage.retain_artifacts,
    ));

    let addr = settings.socket_addr().context("Invalid server address")?;

    tracing::info!(
        environment = %environment,
        upload_dir = %settings.storage.upload_dir,
        naming = ?settings.storage.naming,
        error_mode = ?settings.errors.mode,
        "Server initialized"
    );

    let router = create_router(AppState {
        upload_service,
        settings,
    });

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}
