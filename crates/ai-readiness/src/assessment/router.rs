use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::catalog;
use super::delivery::PayloadDelivery;
use super::responses::ResponseSet;
use super::service::{AssessmentService, AssessmentServiceError, AssessmentSubmission};

/// Router builder exposing the catalog, scoring, and submission endpoints.
pub fn assessment_router<D>(service: Arc<AssessmentService<D>>) -> Router
where
    D: PayloadDelivery + 'static,
{
    Router::new()
        .route("/api/v1/assessment/questions", get(questions_handler))
        .route("/api/v1/assessment/score", post(score_handler::<D>))
        .route("/api/v1/assessment/submit", post(submit_handler::<D>))
        .with_state(service)
}

pub(crate) async fn questions_handler() -> Response {
    let payload = json!({
        "sections": catalog::sections(),
        "questions": catalog::questions_in_order().collect::<Vec<_>>(),
        "totalQuestions": catalog::total_question_count(),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn score_handler<D>(
    State(service): State<Arc<AssessmentService<D>>>,
    axum::Json(responses): axum::Json<ResponseSet>,
) -> Response
where
    D: PayloadDelivery + 'static,
{
    let result = service.score(&responses);
    (StatusCode::OK, axum::Json(result)).into_response()
}

pub(crate) async fn submit_handler<D>(
    State(service): State<Arc<AssessmentService<D>>>,
    axum::Json(submission): axum::Json<AssessmentSubmission>,
) -> Response
where
    D: PayloadDelivery + 'static,
{
    match service.submit(submission).await {
        Ok(outcome) => (StatusCode::ACCEPTED, axum::Json(outcome)).into_response(),
        Err(AssessmentServiceError::Delivery(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_GATEWAY, axum::Json(payload)).into_response()
        }
    }
}
