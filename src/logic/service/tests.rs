//! HTTP client tests against an in-process axum service

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::{json, Value};

use super::{AnalysisClient, AnalysisService, ReEvaluateRequest};
use crate::config::DashboardConfig;
use crate::error::ServiceError;
use crate::logic::record::tests::sample_record;
use crate::logic::record::Standard;

type Captured = Arc<Mutex<Option<Value>>>;

async fn spawn_service(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/api", addr)
}

fn client_for(api_url: String, timeout_secs: u64) -> AnalysisClient {
    let config = DashboardConfig {
        api_url,
        timeout_secs,
        ..Default::default()
    };
    AnalysisClient::new(&config).unwrap()
}

fn gdpr_request() -> ReEvaluateRequest {
    ReEvaluateRequest {
        metadata: sample_record().metadata,
        standard: Standard::Gdpr,
    }
}

async fn re_evaluate_ok(State(captured): State<Captured>, Json(body): Json<Value>) -> Json<Value> {
    let standard = body["standard"].as_str().unwrap_or("?").to_string();
    *captured.lock() = Some(body);
    Json(json!({
        "scores": {
            "health_score": 82,
            "dimension_scores": {"completeness": 90},
            "rule_results": {}
        },
        "analysis": {
            "executive_summary": format!("Focus on {} adherence.", standard),
            "risk_assessment": "Low.",
            "remediation_steps": []
        }
    }))
}

#[tokio::test]
async fn test_re_evaluate_sends_metadata_and_standard() {
    let captured: Captured = Arc::new(Mutex::new(None));
    let app = Router::new()
        .route("/api/analyze/re-evaluate", post(re_evaluate_ok))
        .with_state(captured.clone());
    let client = client_for(spawn_service(app).await, 5);

    let result = client.re_evaluate(&gdpr_request()).await.unwrap();
    assert_eq!(result.scores.health_score, 82.0);
    assert_eq!(result.scores.dimension_scores["completeness"], 90.0);
    assert!(result.scores.rule_results.is_empty());
    assert_eq!(result.analysis.executive_summary.as_deref(), Some("Focus on GDPR adherence."));

    let body = captured.lock().take().unwrap();
    assert_eq!(body["standard"], "GDPR");
    assert_eq!(body["metadata"]["total_rows"], 1000);
    assert_eq!(body["metadata"]["columns"], json!({"amount": {}, "date": {}}));
    // Metadata and standard only
    assert_eq!(body.as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn test_re_evaluate_server_error() {
    let app = Router::new().route(
        "/api/analyze/re-evaluate",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "rule engine exploded") }),
    );
    let client = client_for(spawn_service(app).await, 5);

    let err = client.re_evaluate(&gdpr_request()).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert!(matches!(err, ServiceError::Server { ref body, .. } if body == "rule engine exploded"));
}

#[tokio::test]
async fn test_re_evaluate_malformed_body() {
    let app = Router::new().route(
        "/api/analyze/re-evaluate",
        post(|| async { Json(json!({"scores": "not an object"})) }),
    );
    let client = client_for(spawn_service(app).await, 5);

    let err = client.re_evaluate(&gdpr_request()).await.unwrap_err();
    assert!(matches!(err, ServiceError::Parse(_)));
}

#[tokio::test]
async fn test_re_evaluate_timeout() {
    let app = Router::new().route(
        "/api/analyze/re-evaluate",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(3)).await;
            Json(json!({}))
        }),
    );
    let client = client_for(spawn_service(app).await, 1);

    let err = client.re_evaluate(&gdpr_request()).await.unwrap_err();
    assert!(matches!(err, ServiceError::Timeout));
}

#[tokio::test]
async fn test_re_evaluate_unreachable() {
    // Grab a free port, then close it
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(format!("http://{}/api", addr), 5);
    let err = client.re_evaluate(&gdpr_request()).await.unwrap_err();
    assert!(matches!(err, ServiceError::Network(_)));
}

async fn analyze_upload(mut multipart: Multipart) -> Json<Value> {
    let mut filename = String::new();
    let mut size = 0;
    while let Some(field) = multipart.next_field().await.unwrap() {
        if field.name() == Some("file") {
            filename = field.file_name().unwrap_or_default().to_string();
            size = field.bytes().await.unwrap().len();
        }
    }

    Json(json!({
        "filename": filename,
        "metadata": {"total_rows": size, "total_columns": 1},
        "scores": {"health_score": 55.5},
        "analysis": {
            "executive_summary": "AI analysis skipped (GOOGLE_API_KEY not set).",
            "risk_assessment": "Configure the API key to enable GenAI insights.",
            "remediation_steps": []
        },
        "provenance": {"timestamp": "2024-05-01T10:00:00.000001", "fingerprint": "feedface", "signature": "s"}
    }))
}

#[tokio::test]
async fn test_analyze_uploads_multipart() {
    let app = Router::new().route("/api/analyze", post(analyze_upload));
    let client = client_for(spawn_service(app).await, 5);

    let record = client
        .analyze("ledger.csv", b"amount,date\n1,2024-01-01\n".to_vec())
        .await
        .unwrap();

    assert_eq!(record.filename, "ledger.csv");
    assert_eq!(record.metadata.total_rows, 25);
    assert_eq!(record.scores.health_score, 55.5);
    assert!(record.scores.rule_results.is_empty());
    assert_eq!(record.provenance.unwrap().fingerprint, "feedface");
}

#[tokio::test]
async fn test_chat_sends_full_record_as_context() {
    let app = Router::new().route(
        "/api/chat",
        post(|Json(body): Json<Value>| async move {
            Json(json!({
                "response": format!(
                    "{} ({} rules)",
                    body["question"].as_str().unwrap_or_default(),
                    body["context"]["scores"]["rule_results"].as_object().map(|m| m.len()).unwrap_or(0)
                )
            }))
        }),
    );
    let client = client_for(spawn_service(app).await, 5);

    let answer = client.chat("Why adverse?", &sample_record()).await.unwrap();
    assert_eq!(answer, "Why adverse? (3 rules)");
}
