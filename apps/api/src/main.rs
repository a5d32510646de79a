mod config;
mod editing;
mod enhance;
mod errors;
mod llm_client;
mod models;
mod preview;
mod routes;
mod session;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::enhance::TextEnhancer;
use crate::llm_client::{LlmClient, TextGenerator};
use crate::models::resume::ResumeDocument;
use crate::routes::build_router;
use crate::session::EditorSession;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails only on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Lebenslauf v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client; without a key the editor runs with AI features disabled
    let enhancer = match &config.api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone())?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            TextEnhancer::new(Some(Arc::new(llm) as Arc<dyn TextGenerator>))
        }
        None => {
            warn!("No API key configured (API_KEY / GEMINI_API_KEY); AI features disabled");
            TextEnhancer::disabled()
        }
    };

    // The session's document starts from the sample résumé and lives until exit
    let session = Arc::new(EditorSession::new(ResumeDocument::sample(), enhancer));
    let state = AppState { session };

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
