//! HTTP API tests for interface_api

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

use core_kernel::FixedClock;
use domain_adjudication::{Advocate, Auditor, Judge, Pipeline};
use interface_api::{config::ApiConfig, create_router, create_router_with_pipeline};

fn test_server() -> TestServer {
    let clock = Arc::new(FixedClock::at(
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap(),
    ));
    let pipeline = Arc::new(Pipeline::with_steps(
        vec![Box::new(Advocate), Box::new(Auditor), Box::new(Judge)],
        clock,
    ));
    let app = create_router_with_pipeline(pipeline, ApiConfig::default());
    TestServer::new(app).expect("failed to start test server")
}

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::new(create_router(ApiConfig::default())).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_adjudicate_claim_returns_approval_and_audit_trail() {
    let server = test_server();

    let response = server
        .post("/api/v1/claims/adjudicate")
        .json(&json!({
            "claim_id": "C1",
            "policy_text": "Article 4.1: delays over 5 hours are covered.",
            "evidence_paths": ["a.png"]
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();

    assert_eq!(body["claim_id"], "C1");
    assert_eq!(body["status"], "approved");
    assert_eq!(body["decision"]["status"], "approved");
    assert_eq!(body["decision"]["amount_approved"], "150.00");
    assert_eq!(body["decision"]["currency"], "USD");
    assert!(body["decision"].get("rejection_reason").is_none());

    let logs = body["analysis_logs"].as_array().unwrap();
    assert_eq!(logs.len(), 3);
    assert_eq!(logs[0]["node"], "Advocate");
    assert_eq!(logs[1]["node"], "Auditor");
    assert_eq!(logs[2]["node"], "Judge");
}

#[tokio::test]
async fn test_adjudicate_claim_rejects_empty_claim_id() {
    let server = test_server();

    let response = server
        .post("/api/v1/claims/adjudicate")
        .json(&json!({
            "claim_id": "",
            "policy_text": "some policy",
            "evidence_paths": []
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn test_adjudicate_claim_rejects_whitespace_claim_id() {
    // Passes the DTO length check but fails domain construction
    let server = test_server();

    let response = server
        .post("/api/v1/claims/adjudicate")
        .json(&json!({
            "claim_id": "   ",
            "policy_text": "some policy",
            "evidence_paths": []
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_evidence_paths_default_to_empty() {
    let server = test_server();

    let response = server
        .post("/api/v1/claims/adjudicate")
        .json(&json!({
            "claim_id": "C2",
            "policy_text": "policy without evidence"
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "approved");
}

#[tokio::test]
async fn test_adjudication_is_deterministic_across_requests() {
    let server = test_server();
    let payload = json!({
        "claim_id": "C1",
        "policy_text": "policy",
        "evidence_paths": ["a.png"]
    });

    let first: Value = server.post("/api/v1/claims/adjudicate").json(&payload).await.json();
    let second: Value = server.post("/api/v1/claims/adjudicate").json(&payload).await.json();

    assert_eq!(first["analysis_logs"], second["analysis_logs"]);
}
