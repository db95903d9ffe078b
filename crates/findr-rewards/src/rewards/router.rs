use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use super::domain::{Audience, CompanyProfile, JobSeekerProfile};
use super::redemption::{RedemptionError, RedemptionRequest};
use super::summary::RewardsEngine;
use super::tiers;

/// Router exposing the engine over HTTP. Profiles are posted as the snapshot the caller
/// fetched from the profile service.
pub fn rewards_router(engine: Arc<RewardsEngine>) -> Router {
    Router::new()
        .route(
            "/api/v1/rewards/jobseeker/summary",
            post(job_seeker_summary_handler),
        )
        .route(
            "/api/v1/rewards/employer/summary",
            post(employer_summary_handler),
        )
        .route(
            "/api/v1/rewards/redemptions/quote",
            post(redemption_quote_handler),
        )
        .route("/api/v1/rewards/tiers/:audience", get(tier_catalogue_handler))
        .with_state(engine)
}

pub(crate) async fn job_seeker_summary_handler(
    State(engine): State<Arc<RewardsEngine>>,
    Json(payload): Json<Value>,
) -> Response {
    let profile = JobSeekerProfile::from_json_value(payload);
    let summary = engine.job_seeker_summary(&profile);
    (StatusCode::OK, Json(summary)).into_response()
}

pub(crate) async fn employer_summary_handler(
    State(engine): State<Arc<RewardsEngine>>,
    Json(payload): Json<Value>,
) -> Response {
    let company = CompanyProfile::from_json_value(payload);
    let summary = engine.employer_summary(&company);
    (StatusCode::OK, Json(summary)).into_response()
}

pub(crate) async fn redemption_quote_handler(Json(request): Json<RedemptionRequest>) -> Response {
    match request.quote() {
        Ok(quote) => (StatusCode::OK, Json(quote)).into_response(),
        Err(error @ RedemptionError::InsufficientPoints { .. }) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn tier_catalogue_handler(Path(audience): Path<String>) -> Response {
    let audience = match audience.to_ascii_lowercase().as_str() {
        "jobseeker" | "job-seeker" | "jobseekers" => Audience::JobSeeker,
        "employer" | "employers" => Audience::Employer,
        _ => {
            let payload = json!({
                "error": format!("unknown audience '{audience}'"),
            });
            return (StatusCode::NOT_FOUND, Json(payload)).into_response();
        }
    };

    (StatusCode::OK, Json(tiers::catalogue(audience))).into_response()
}
