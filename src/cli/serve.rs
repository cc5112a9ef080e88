use std::path::Path;
use std::sync::Arc;
use crate::api::{self, AppState};
use crate::cli::commands::ServeArgs;
use crate::errors::FuzzError;
use crate::probe::HttpProber;
use crate::wordlist::Wordlist;
use tracing::info;

pub async fn handle_serve(args: ServeArgs) -> Result<(), FuzzError> {
    let config = super::load_config(args.config.as_deref()).await?;

    let host = args.host.as_deref().unwrap_or(config.host()).to_string();
    let port = args.port.unwrap_or(config.port());
    let wordlist_path = args.wordlist.as_deref().unwrap_or(config.wordlist_path()).to_string();
    let reporter = super::build_reporter(&config, args.report.as_deref(), args.found.as_deref());

    let wordlist = Wordlist::load(Path::new(&wordlist_path)).await?;
    let prober = Arc::new(HttpProber::new()?);
    let report_path = reporter.path().display().to_string();
    let state = AppState::new(wordlist, prober, reporter);
    let app = api::build_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(report = %report_path, "Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| FuzzError::Internal(format!("Server error: {}", e)))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
