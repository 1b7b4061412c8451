use crate::handlers::{self, AppState};
use crate::models;
use crate::pages;
use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use utoipa::OpenApi;

/// OpenAPI document for the JSON endpoints, generated from the handler
/// annotations.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health,
        handlers::predict_risk,
        handlers::random_joke,
        handlers::model_info,
    ),
    components(schemas(
        models::BorrowerRecord,
        models::RiskLabel,
        models::PredictionResponse,
        models::JokeResponse,
        models::ModelInfo,
    )),
    info(
        title = "Credit Risk Benchmark API",
        description = "Binary loan-default prediction over a pre-trained classifier"
    )
)]
pub struct ApiDoc;

/// Serves the generated OpenAPI specification as JSON.
async fn serve_openapi_spec() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// Serves the Swagger UI HTML page.
///
/// Returns an HTML page that embeds the Swagger UI, configured to load the
/// OpenAPI document served by `serve_openapi_spec`.
async fn serve_swagger_ui() -> impl IntoResponse {
    let html = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Credit Risk Benchmark API - Swagger UI</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
    <style>
        body { margin: 0; padding: 0; }
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-standalone-preset.js"></script>
    <script>
        window.onload = function() {
            window.ui = SwaggerUIBundle({
                url: "/api-docs/openapi.json",
                dom_id: '#swagger-ui',
                deepLinking: true,
                presets: [
                    SwaggerUIBundle.presets.apis,
                    SwaggerUIStandalonePreset
                ],
                layout: "StandaloneLayout"
            });
        };
    </script>
</body>
</html>
"#;
    (
        StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, "text/html; charset=utf-8")],
        html,
    )
}

/// Builds the application router.
///
/// Shared between `main` and the integration tests; cross-cutting layers
/// (rate limiting, tracing, CORS) are applied by the caller.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check (bypasses rate limiting in main)
        .route("/health", get(handlers::health))
        // Interactive views
        .route("/", get(pages::home_page))
        .route("/predict", get(pages::predict_page).post(pages::submit_prediction))
        .route("/jokes", get(pages::joke_page))
        // API Documentation
        .route("/docs", get(serve_swagger_ui))
        .route("/api-docs/openapi.json", get(serve_openapi_spec))
        // API endpoints
        .route("/api/v1/predict", post(handlers::predict_risk))
        .route("/api/v1/jokes/random", get(handlers::random_joke))
        .route("/api/v1/model", get(handlers::model_info))
        // Fallback 404
        .fallback(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Endpoint not found" })),
            )
        })
        .with_state(state)
}
