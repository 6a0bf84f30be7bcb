mod config;
mod errors;
mod extraction;
mod language;
mod matching;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::language::{EnglishModel, StopWords};
use crate::matching::matcher::Matcher;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume matcher v{}", env!("CARGO_PKG_VERSION"));

    // Language model is built once and shared read-only by every request
    let stop_words = match &config.stop_words_path {
        Some(path) => StopWords::from_file(path)?,
        None => StopWords::english(),
    };
    info!(
        "Stop words loaded: {} ({} entries)",
        stop_words.version(),
        stop_words.len()
    );
    let matcher = Matcher::new(Arc::new(EnglishModel::new(stop_words)));
    info!("Language model ready: {}", matcher.model_name());

    info!("Upload limit: {} bytes", config.max_upload_bytes);

    let state = AppState::new(config.clone(), matcher);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
