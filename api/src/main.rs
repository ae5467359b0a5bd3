use anyhow::Result;
use api::{create_router, AppState, Settings};
use pdf_chat::{DocumentStore, GeminiService, PdfExtractor};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize environment variables and logging
    dotenv::dotenv().ok();
    env_logger::init();

    let settings = Settings::from_env()?;
    let gemini = GeminiService::from_env()?;
    log::info!("Using Gemini model {}", gemini.model());

    let state = AppState::new(
        Arc::new(PdfExtractor::new()),
        Arc::new(gemini),
        Arc::new(DocumentStore::new()),
    );
    let app = create_router(state, &settings);

    let listener = tokio::net::TcpListener::bind(settings.bind_addr).await?;
    log::info!(
        "Listening on {} (allowed origin {:?})",
        listener.local_addr()?,
        settings.allowed_origin
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
    }
}
