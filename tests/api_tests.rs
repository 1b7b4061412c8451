/// Router-level tests with a stub classifier standing in for the model
/// artifact. Exercises the JSON API, the HTML views, and the form flow
/// end to end without needing an ONNX file on disk.
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use credit_risk_bench::config::Config;
use credit_risk_bench::handlers::AppState;
use credit_risk_bench::jokes::JOKES;
use credit_risk_bench::model::Classifier;
use credit_risk_bench::models::{JokeResponse, ModelInfo, PredictionResponse, RiskLabel, FEATURE_COUNT};
use credit_risk_bench::routes::build_router;
use http_body_util::BodyExt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Stub classifier returning a fixed label and counting predict calls.
struct StubClassifier {
    label: RiskLabel,
    calls: AtomicUsize,
    last_features: Mutex<Option<[f32; FEATURE_COUNT]>>,
}

impl StubClassifier {
    fn new(label: RiskLabel) -> Self {
        Self {
            label,
            calls: AtomicUsize::new(0),
            last_features: Mutex::new(None),
        }
    }
}

impl Classifier for StubClassifier {
    fn predict_label(&self, features: [f32; FEATURE_COUNT]) -> anyhow::Result<RiskLabel> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_features.lock().unwrap() = Some(features);
        Ok(self.label)
    }
}

/// Stub classifier that always fails, for the output-contract error path.
struct BrokenClassifier;

impl Classifier for BrokenClassifier {
    fn predict_label(&self, _features: [f32; FEATURE_COUNT]) -> anyhow::Result<RiskLabel> {
        anyhow::bail!("model returned an empty label tensor")
    }
}

fn test_config() -> Config {
    Config {
        model_path: "model.onnx".to_string(),
        host: "127.0.0.1".to_string(),
        port: 3000,
    }
}

fn test_app(model: Arc<dyn Classifier>) -> axum::Router {
    build_router(Arc::new(AppState::new(test_config(), model)))
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

const RECORD_JSON: &str = r#"{
    "revolving_utilization": 443.08,
    "debt_ratio": 322.299,
    "monthly_income": 5000.0,
    "age": 48,
    "late_payments_30_59": 0,
    "open_credit_lines": 8,
    "late_payments_90_plus": 0,
    "late_payments_60_89": 0,
    "dependents": 0,
    "real_estate_loans": 1
}"#;

#[tokio::test]
async fn test_health_check() {
    let app = test_app(Arc::new(StubClassifier::new(RiskLabel::Repay)));

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("healthy"));
}

#[tokio::test]
async fn test_predict_calls_model_once_with_exact_vector() {
    let stub = Arc::new(StubClassifier::new(RiskLabel::Repay));
    let app = test_app(stub.clone());

    let response = app
        .oneshot(
            Request::post("/api/v1/predict")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(RECORD_JSON))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        stub.last_features.lock().unwrap().unwrap(),
        [443.08, 322.299, 5000.0, 48.0, 0.0, 8.0, 0.0, 0.0, 0.0, 1.0]
    );

    let parsed: PredictionResponse = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(parsed.label, 0);
    assert_eq!(parsed.outcome, RiskLabel::Repay);
    assert_eq!(parsed.message, RiskLabel::Repay.message());
}

#[tokio::test]
async fn test_predict_default_label_yields_warning_message() {
    let app = test_app(Arc::new(StubClassifier::new(RiskLabel::Default)));

    let response = app
        .oneshot(
            Request::post("/api/v1/predict")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(RECORD_JSON))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let parsed: PredictionResponse = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(parsed.label, 1);
    assert_eq!(parsed.message, "Prediction: The borrower is likely to default.");
}

#[tokio::test]
async fn test_predict_broken_model_returns_500() {
    let app = test_app(Arc::new(BrokenClassifier));

    let response = app
        .oneshot(
            Request::post("/api/v1/predict")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(RECORD_JSON))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_string(response).await;
    assert!(body.contains("error"));
}

#[tokio::test]
async fn test_random_joke_is_from_the_fixed_list() {
    let app = test_app(Arc::new(StubClassifier::new(RiskLabel::Repay)));

    for _ in 0..20 {
        let response = app
            .clone()
            .oneshot(
                Request::get("/api/v1/jokes/random")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let parsed: JokeResponse = serde_json::from_str(&body_string(response).await).unwrap();
        assert!(parsed.index < JOKES.len());
        assert_eq!(JOKES[parsed.index], parsed.joke);
    }
}

#[tokio::test]
async fn test_model_info_describes_input_contract() {
    let app = test_app(Arc::new(StubClassifier::new(RiskLabel::Repay)));

    let response = app
        .oneshot(Request::get("/api/v1/model").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let parsed: ModelInfo = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(parsed.input_shape, vec![1, FEATURE_COUNT]);
    assert_eq!(parsed.features.len(), FEATURE_COUNT);
}

#[tokio::test]
async fn test_home_page_links_all_views() {
    let app = test_app(Arc::new(StubClassifier::new(RiskLabel::Repay)));

    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Credit Risk Benchmark App"));
    assert!(body.contains("href=\"/predict\""));
    assert!(body.contains("href=\"/jokes\""));
}

#[tokio::test]
async fn test_predict_form_declares_control_bounds() {
    let app = test_app(Arc::new(StubClassifier::new(RiskLabel::Repay)));

    let response = app
        .oneshot(Request::get("/predict").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    // The age slider carries the closed [21, 101] range
    assert!(body.contains("name=\"age\""));
    assert!(body.contains("min=\"21\""));
    assert!(body.contains("max=\"101\""));
    // Continuous control bounds
    assert!(body.contains("max=\"22000\""));
    assert!(body.contains("max=\"61106.5\""));
}

#[tokio::test]
async fn test_form_submission_renders_result_banner() {
    let stub = Arc::new(StubClassifier::new(RiskLabel::Default));
    let app = test_app(stub.clone());

    let form_body = "revolving_utilization=443.08&debt_ratio=322.299&monthly_income=5000\
&age=48&late_payments_30_59=0&open_credit_lines=8&late_payments_90_plus=0\
&late_payments_60_89=0&dependents=0&real_estate_loans=1";

    let response = app
        .oneshot(
            Request::post("/predict")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form_body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    let body = body_string(response).await;
    assert!(body.contains("likely to default"));
}

#[tokio::test]
async fn test_joke_page_offers_reroll() {
    let app = test_app(Arc::new(StubClassifier::new(RiskLabel::Repay)));

    let response = app
        .oneshot(Request::get("/jokes").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Another joke"));
    assert!(JOKES.iter().any(|joke| body.contains(joke)));
}

#[tokio::test]
async fn test_openapi_document_served() {
    let app = test_app(Arc::new(StubClassifier::new(RiskLabel::Repay)));

    let response = app
        .oneshot(
            Request::get("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("/api/v1/predict"));
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let app = test_app(Arc::new(StubClassifier::new(RiskLabel::Repay)));

    let response = app
        .oneshot(Request::get("/api/v1/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
