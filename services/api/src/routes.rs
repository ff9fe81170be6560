use crate::infra::{AppState, ChatReply, ChatRequest};
use ai_readiness::assessment::{assessment_router, AssessmentService, PayloadDelivery};
use ai_readiness::error::AppError;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use axum::Json;
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;

const MAX_QUESTION_CHARS: usize = 1000;

pub(crate) fn with_service_routes<D>(service: Arc<AssessmentService<D>>) -> axum::Router
where
    D: PayloadDelivery + 'static,
{
    assessment_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/advisor/chat",
            axum::routing::post(advisor_chat_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn advisor_chat_endpoint(
    Extension(state): Extension<AppState>,
    Json(mut request): Json<ChatRequest>,
) -> Result<Response, AppError> {
    let question = request.question.trim();
    if question.is_empty() {
        let payload = json!({ "error": "question must not be empty" });
        return Ok((StatusCode::BAD_REQUEST, Json(payload)).into_response());
    }
    request.question = question.chars().take(MAX_QUESTION_CHARS).collect();

    let reply: ChatReply = state.advisor.ask(&request, Utc::now()).await?;
    Ok((StatusCode::OK, Json(reply)).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{AdvisorRelay, CHAT_DEMO_REPLY};
    use ai_readiness::assessment::DemoDelivery;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tower::ServiceExt;

    fn app_state(ready: bool) -> AppState {
        let handle = PrometheusBuilder::new().build_recorder().handle();
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(handle),
            advisor: Arc::new(AdvisorRelay::new(reqwest::Client::new(), None)),
        }
    }

    fn app(state: AppState) -> axum::Router {
        let service = Arc::new(AssessmentService::new(Arc::new(DemoDelivery)));
        with_service_routes(service).layer(Extension(state))
    }

    async fn read_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    fn chat_request(question: &str) -> axum::http::Request<axum::body::Body> {
        let body = json!({
            "name": "Sam",
            "email": "sam@example.com",
            "question": question,
            "conversationHistory": [{ "role": "user", "content": "Hello" }]
        });
        axum::http::Request::post("/api/v1/advisor/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(axum::body::Body::from(body.to_string()))
            .expect("request builds")
    }

    #[tokio::test]
    async fn readiness_reflects_startup_flag() {
        let state = app_state(false);
        let flag = state.readiness.clone();
        let router = app(state);

        let request = || {
            axum::http::Request::get("/ready")
                .body(axum::body::Body::empty())
                .expect("request builds")
        };

        let response = router.clone().oneshot(request()).await.expect("route executes");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        flag.store(true, Ordering::Release);
        let response = router.oneshot(request()).await.expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await["status"], "ready");
    }

    #[tokio::test]
    async fn health_and_catalog_routes_share_router() {
        let router = app(app_state(true));

        let response = router
            .clone()
            .oneshot(
                axum::http::Request::get("/health")
                    .body(axum::body::Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);

        let response = router
            .oneshot(
                axum::http::Request::get("/api/v1/assessment/questions")
                    .body(axum::body::Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn advisor_chat_returns_demo_reply_without_webhook() {
        let router = app(app_state(true));

        let response = router
            .oneshot(chat_request("  How do we start with AI?  "))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json(response).await;
        assert_eq!(payload["mode"], "demo");
        assert_eq!(payload["response"], CHAT_DEMO_REPLY);
    }

    #[tokio::test]
    async fn advisor_chat_rejects_blank_questions() {
        let router = app(app_state(true));

        let response = router
            .oneshot(chat_request("   "))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
