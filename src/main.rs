//! Retention flow service binary.
//!
//! Loads configuration, wires the in-memory store and scripted responder
//! behind the application handlers, and serves the HTTP API.

use std::sync::Arc;
use std::time::Duration;

use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use retention_flow::adapters::http::{api_router, RetentionHandlers};
use retention_flow::adapters::random::ThreadRngSource;
use retention_flow::adapters::store::InMemoryConversationStore;
use retention_flow::application::handlers::{
    GetConversationHandler, ResolveOfferHandler, SendMessageHandler, StartConversationHandler,
};
use retention_flow::config::{AppConfig, ConfigError};
use retention_flow::domain::offer::OfferGenerator;
use retention_flow::domain::responder::Responder;
use retention_flow::ports::{ConversationStore, RandomSource};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    let store: Arc<dyn ConversationStore> = Arc::new(InMemoryConversationStore::new());
    let random: Arc<dyn RandomSource> = Arc::new(ThreadRngSource::new());

    let responder = Responder::new(random.clone());
    let offer_generator = OfferGenerator::new(random);

    let handlers = RetentionHandlers::new(
        Arc::new(StartConversationHandler::new(store.clone())),
        Arc::new(SendMessageHandler::new(
            store.clone(),
            responder.clone(),
            offer_generator,
        )),
        Arc::new(ResolveOfferHandler::new(store.clone(), responder)),
        Arc::new(GetConversationHandler::new(store)),
    );

    let app = api_router(handlers)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Retention flow service listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
