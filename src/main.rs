mod config;
mod errors;
mod handlers;
mod jokes;
mod model;
mod models;
mod pages;
mod routes;

use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::handlers::AppState;
use crate::model::OnnxRiskModel;

/// Main entry point for the application.
///
/// Initializes logging and configuration, deserializes the model artifact
/// (fatal if missing or corrupt, before any UI is served), builds the shared
/// state and HTTP routes, and starts the Axum server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "credit_risk_bench=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // Deserialize the classifier once at startup. No fallback and no retry:
    // the artifact is a required build-time dependency.
    let model = OnnxRiskModel::load(&config.model_path).map_err(|e| {
        anyhow::anyhow!(
            "failed to load model artifact '{}': {}",
            config.model_path,
            e
        )
    })?;
    tracing::info!("Model artifact loaded from {}", config.model_path);

    let addr = format!("{}:{}", config.host, config.port);

    // Build application state; the model is read-only from here on.
    let app_state = Arc::new(AppState::new(config, Arc::new(model)));

    // Configure rate limiter: 10 requests/second per IP, burst of 20
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(10)
            .burst_size(20)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .unwrap(),
    );

    let app = routes::build_router(app_state)
        .layer(
            ServiceBuilder::new()
                // Request size limit: 1MB max payload (the form is tiny)
                .layer(RequestBodyLimitLayer::new(1024 * 1024))
                .layer(GovernorLayer {
                    config: governor_conf,
                }),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
