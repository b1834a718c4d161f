//! Integration tests for the DataWise API.
//!
//! Each test builds its own router around an in-memory store and drives it
//! with `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::NaiveDate;
use serde_json::{json, Value};
use tower::ServiceExt;

use datawise_api::error::ErrorBody;
use datawise_api::handlers::HealthResponse;
use datawise_api::{create_router, AppState};
use datawise_core::config::ServerConfig;
use datawise_core::SalesRecord;
use datawise_store::SalesStore;

// =============================================================================
// Helpers
// =============================================================================

const TEST_IDENTITY: &str = "tests@datawise.example";

fn server_config() -> ServerConfig {
    ServerConfig {
        identity: TEST_IDENTITY.to_string(),
        ..ServerConfig::default()
    }
}

/// The two-row Widget/Boston fixture.
fn scenario_store() -> SalesStore {
    let row = |sales: f64, y: i32, m: u32, d: u32| SalesRecord {
        product: "Widget".to_string(),
        city: "Boston".to_string(),
        region: "East".to_string(),
        rep: "Jane Doe".to_string(),
        sales,
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
    };
    SalesStore::from_records(vec![row(100.0, 2024, 1, 5), row(250.0, 2024, 2, 10)])
}

fn make_app() -> axum::Router {
    create_router(AppState::new(&server_config(), scenario_store()))
}

fn make_empty_app() -> axum::Router {
    create_router(AppState::new(&server_config(), SalesStore::empty()))
}

fn query_request(question: &str) -> Request<Body> {
    let query = serde_urlencoded::to_string([("q", question)]).unwrap();
    Request::get(format!("/query?{}", query))
        .body(Body::empty())
        .unwrap()
}

/// Read full response body bytes.
async fn body_bytes(resp: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .unwrap()
        .to_vec()
}

/// Ask a question and return the parsed JSON body, asserting 200.
async fn ask(app: axum::Router, question: &str) -> Value {
    let resp = app.oneshot(query_request(question)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    serde_json::from_slice(&body_bytes(resp).await).unwrap()
}

// =============================================================================
// /query
// =============================================================================

#[tokio::test]
async fn test_query_total_sales() {
    let body = ask(make_app(), "What is the total sales of Widget in Boston?").await;
    assert_eq!(body, json!({"answer": 350, "email": TEST_IDENTITY}));
}

#[tokio::test]
async fn test_query_rep_count() {
    let body = ask(make_app(), "How many sales reps are there in East?").await;
    assert_eq!(body["answer"], json!(1));
}

#[tokio::test]
async fn test_query_average_sales_is_float() {
    let resp = make_app()
        .oneshot(query_request("What is the average sales for Widget in East?"))
        .await
        .unwrap();
    let raw = String::from_utf8(body_bytes(resp).await).unwrap();
    assert!(raw.contains("\"answer\":175.0"), "body was {}", raw);
}

#[tokio::test]
async fn test_query_average_sales_empty_is_zero() {
    let body = ask(make_app(), "What is the average sales for Gizmo in East?").await;
    assert_eq!(body["answer"], json!(0));
}

#[tokio::test]
async fn test_query_top_sale_date() {
    let body = ask(
        make_app(),
        "On what date did Jane Doe make the highest sale in Boston?",
    )
    .await;
    assert_eq!(body["answer"], json!("2024-02-10"));
}

#[tokio::test]
async fn test_query_top_sale_date_not_found() {
    let body = ask(
        make_app(),
        "On what date did John Roe make the highest sale in Boston?",
    )
    .await;
    assert_eq!(
        body["answer"],
        json!("No sales data found for this rep in this city.")
    );
}

#[tokio::test]
async fn test_query_not_understood() {
    let body = ask(make_app(), "What is the weather today?").await;
    assert_eq!(
        body,
        json!({"answer": "Sorry, I can't answer that question.", "email": TEST_IDENTITY})
    );
}

#[tokio::test]
async fn test_query_case_insensitive_phrasing() {
    let upper = ask(make_app(), "WHAT IS THE TOTAL SALES OF Widget IN Boston?").await;
    let lower = ask(make_app(), "what is the total sales of Widget in Boston?").await;
    assert_eq!(upper, lower);
}

#[tokio::test]
async fn test_query_capture_is_case_sensitive() {
    let body = ask(make_app(), "What is the total sales of widget in Boston?").await;
    assert_eq!(body["answer"], json!(0));
}

#[tokio::test]
async fn test_query_empty_dataset() {
    let body = ask(make_empty_app(), "What is the total sales of Widget in Boston?").await;
    assert_eq!(
        body,
        json!({"answer": "Error: Dataset not loaded.", "email": TEST_IDENTITY})
    );
}

#[tokio::test]
async fn test_query_sets_identity_header() {
    let resp = make_app()
        .oneshot(query_request("What is the weather today?"))
        .await
        .unwrap();
    assert_eq!(
        resp.headers().get("x-email").unwrap().to_str().unwrap(),
        TEST_IDENTITY
    );
}

#[tokio::test]
async fn test_query_missing_q_is_unprocessable() {
    let resp = make_app()
        .oneshot(Request::get("/query").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let err: ErrorBody = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(err.error, "unprocessable_entity");
    assert!(err.message.contains("'q'"));
}

#[tokio::test]
async fn test_query_empty_q_is_not_understood() {
    let resp = make_app()
        .oneshot(Request::get("/query?q=").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(body["answer"], json!("Sorry, I can't answer that question."));
}

// =============================================================================
// /health and middleware
// =============================================================================

#[tokio::test]
async fn test_health_loaded() {
    let resp = make_app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let health: HealthResponse = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(health.status, "healthy");
    assert!(health.dataset_loaded);
    assert_eq!(health.record_count, 2);
    assert_eq!(health.service, "DataWise LLM Analytics");
}

#[tokio::test]
async fn test_health_degraded_when_empty() {
    let resp = make_empty_app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let health: HealthResponse = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(health.status, "degraded");
    assert!(!health.dataset_loaded);
    assert_eq!(health.record_count, 0);
}

#[tokio::test]
async fn test_unknown_route_is_404_with_identity() {
    let resp = make_app()
        .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(resp.headers().get("x-email").unwrap(), TEST_IDENTITY);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let resp = make_app()
        .oneshot(
            Request::get("/health")
                .header("origin", "http://dashboard.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        resp.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_cors_preflight_carries_identity() {
    let resp = make_app()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/query")
                .header("origin", "http://dashboard.example")
                .header("access-control-request-method", "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(resp.status().is_success());
    assert!(resp.headers().contains_key("access-control-allow-origin"));
    assert_eq!(resp.headers().get("x-email").unwrap(), TEST_IDENTITY);
}

#[tokio::test]
async fn test_invalid_identity_disables_header() {
    let server = ServerConfig {
        identity: "bad\nvalue".to_string(),
        ..ServerConfig::default()
    };
    let app = create_router(AppState::new(&server, scenario_store()));
    let resp = app
        .oneshot(query_request("What is the weather today?"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().get("x-email").is_none());
}
