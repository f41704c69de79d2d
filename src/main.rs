//! Dropout-Watch Server
//!
//! Scores uploaded student rosters for dropout risk and generates
//! counselling messages.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                      DROPOUT-WATCH                         │
//! ├────────────────────────────────────────────────────────────┤
//! │  upload (CSV) → roster validation → feature extraction     │
//! │               → logistic classifier → report + messages    │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! The classifier artifact is loaded once at startup and shared read-only
//! across requests; everything else is request-scoped.

mod config;
mod error;
mod handlers;
mod logic;
mod models;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use logic::classifier::{Classifier, LogisticModel};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dropout_watch=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!(
        "Dropout-Watch server starting ({})",
        if config.is_production() {
            "production"
        } else {
            "development"
        }
    );

    // Load the classifier artifact; the server is useless without it.
    let classifier = LogisticModel::load(&config.model_path)
        .with_context(|| format!("failed to load classifier artifact {}", config.model_path))?;

    let state = AppState {
        classifier: Arc::new(classifier),
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<dyn Classifier>,
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::page::index))
        .route("/health", get(handlers::health::check))
        .route("/api/v1/report", post(handlers::report::generate))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
