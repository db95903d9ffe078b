use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::rewards::rewards_router;

fn post_json(uri: &str, payload: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(payload).expect("serialize payload")))
        .expect("request builds")
}

#[tokio::test]
async fn job_seeker_summary_route_returns_output_contract() {
    let router = rewards_router(Arc::new(engine()));

    let response = router
        .oneshot(post_json(
            "/api/v1/rewards/jobseeker/summary",
            &json!({ "success": true, "data": complete_profile_json() }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["completedCount"], 24);
    assert_eq!(payload["totalFields"], 24);
    assert_eq!(payload["percentage"], 100);
    assert_eq!(payload["points"], 250);
    assert_eq!(payload["tier"], "Blue");
    assert_eq!(payload["nextTier"], "Silver");
    assert_eq!(payload["progressToNextTierPercent"], 100);
    assert_eq!(payload["pointsSource"], "computed");
}

#[tokio::test]
async fn employer_summary_route_reports_null_next_tier_at_platinum() {
    let router = rewards_router(Arc::new(engine()));

    let response = router
        .oneshot(post_json(
            "/api/v1/rewards/employer/summary",
            &json!({ "companyName": "Gulf Freight", "points": 640 }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["tier"], "Platinum");
    assert_eq!(payload["nextTier"], Value::Null);
    assert_eq!(payload["pointsSource"], "authoritative");
}

#[tokio::test]
async fn non_object_profiles_still_produce_a_summary() {
    let router = rewards_router(Arc::new(engine()));

    let response = router
        .oneshot(post_json("/api/v1/rewards/jobseeker/summary", &json!([])))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["points"], 50);
    assert_eq!(payload["tier"], "Blue");
}

#[tokio::test]
async fn array_payloads_do_not_fill_profile_fields() {
    let router = rewards_router(Arc::new(engine()));

    let response = router
        .oneshot(post_json(
            "/api/v1/rewards/employer/summary",
            &json!(["Acme", "hr@acme.io", "+9714", "acme.io", "Retail", "5000", 1990, "About"]),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["completedCount"], 0);
    assert_eq!(payload["points"], 50);
}

#[tokio::test]
async fn quote_route_rejects_overdrawn_requests() {
    let router = rewards_router(Arc::new(engine()));

    let response = router
        .oneshot(post_json(
            "/api/v1/rewards/redemptions/quote",
            &json!({ "availablePoints": 10, "requestedPoints": 25, "subtotal": 2500 }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .is_some_and(|message| message.contains("insufficient points")));
}

#[tokio::test]
async fn quote_route_returns_discounted_total() {
    let router = rewards_router(Arc::new(engine()));

    let response = router
        .oneshot(post_json(
            "/api/v1/rewards/redemptions/quote",
            &json!({ "availablePoints": 430, "requestedPoints": 100, "subtotal": 2500 }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["total"], 2400);
}

#[tokio::test]
async fn tier_catalogue_route_lists_employer_bands() {
    let router = rewards_router(Arc::new(engine()));

    let response = router
        .oneshot(
            Request::get("/api/v1/rewards/tiers/employer")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let tiers = payload.as_array().expect("catalogue is a list");
    assert_eq!(tiers.len(), 4);
    assert_eq!(tiers[0]["tier"], "Blue");
    assert_eq!(tiers[0]["employees"], "0-100");
    assert_eq!(tiers[3]["minPoints"], 350);
}

#[tokio::test]
async fn tier_catalogue_route_rejects_unknown_audience() {
    let router = rewards_router(Arc::new(engine()));

    let response = router
        .oneshot(
            Request::get("/api/v1/rewards/tiers/recruiters")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
