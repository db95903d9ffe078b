use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_rewards_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use findr_rewards::config::AppConfig;
use findr_rewards::error::AppError;
use findr_rewards::rewards::RewardsEngine;
use findr_rewards::telemetry;
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

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let employer_rule = config.rewards.employer_tier_rule;
    let engine = Arc::new(RewardsEngine::new(config.rewards.clone()));

    let app = with_rewards_routes(engine)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, ?employer_rule, %addr, "rewards service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
