use crate::cli::ServeArgs;
use crate::infra::{http_client, AdvisorRelay, AppState, ConfiguredDelivery};
use crate::routes::with_service_routes;
use ai_readiness::assessment::AssessmentService;
use ai_readiness::config::AppConfig;
use ai_readiness::error::AppError;
use ai_readiness::telemetry;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let client = http_client()?;
    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        advisor: Arc::new(AdvisorRelay::new(
            client.clone(),
            config.webhooks.chat_endpoint.clone(),
        )),
    };

    let delivery = Arc::new(ConfiguredDelivery::from_config(&config.webhooks, &client));
    let assessment_service = Arc::new(AssessmentService::new(delivery));

    let app = with_service_routes(assessment_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        demo_mode = config.webhooks.demo_mode(),
        "ai readiness assessment service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
