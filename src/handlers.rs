use crate::config::Config;
use crate::errors::{AppError, ResultExt};
use crate::jokes;
use crate::model::Classifier;
use crate::models::{BorrowerRecord, JokeResponse, ModelInfo, PredictionResponse, RiskLabel};
use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;
use std::sync::Arc;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Classifier loaded once at startup; immutable and shared by all requests.
    pub model: Arc<dyn Classifier>,
}

impl AppState {
    pub fn new(config: Config, model: Arc<dyn Classifier>) -> Self {
        Self { config, model }
    }
}

/// Health check endpoint.
///
/// Returns the service status, version, and health information.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is healthy"))
)]
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "credit-risk-bench",
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}

/// POST /api/v1/predict
///
/// Scores one borrower record. Fields are clamped to their declared bounds,
/// packed into the fixed-order feature vector, and fed to the classifier in a
/// single predict call. Nothing about the request or result is persisted.
#[utoipa::path(
    post,
    path = "/api/v1/predict",
    request_body = BorrowerRecord,
    responses(
        (status = 200, description = "Binary default-risk prediction", body = PredictionResponse),
        (status = 500, description = "The model artifact violated its output contract"),
    )
)]
pub async fn predict_risk(
    State(state): State<Arc<AppState>>,
    Json(record): Json<BorrowerRecord>,
) -> Result<Json<PredictionResponse>, AppError> {
    tracing::info!("POST /api/v1/predict");

    let outcome = run_prediction(&state, &record)?;

    tracing::info!("Prediction complete: label={}", outcome.as_u8());
    Ok(Json(PredictionResponse::new(outcome)))
}

/// Shared inference path for the JSON API and the HTML form.
///
/// Synchronous on purpose: one in-process predict call, no suspension points.
pub fn run_prediction(state: &AppState, record: &BorrowerRecord) -> Result<RiskLabel, AppError> {
    let features = record.clamped().to_feature_vector();
    state
        .model
        .predict_label(features)
        .context("model inference failed")
}

/// GET /api/v1/jokes/random
///
/// Uniform random selection from the fixed joke list. Stateless: re-rolling is
/// just another request.
#[utoipa::path(
    get,
    path = "/api/v1/jokes/random",
    responses((status = 200, description = "One joke from the fixed list", body = JokeResponse))
)]
pub async fn random_joke() -> Json<JokeResponse> {
    let (index, joke) = jokes::random_joke(&mut rand::rng());
    tracing::debug!("Serving joke {}", index);
    Json(JokeResponse {
        index,
        joke: joke.to_string(),
    })
}

/// GET /api/v1/model
///
/// Describes the loaded classifier's input contract.
#[utoipa::path(
    get,
    path = "/api/v1/model",
    responses((status = 200, description = "Model input contract", body = ModelInfo))
)]
pub async fn model_info() -> Json<ModelInfo> {
    Json(ModelInfo::current())
}
