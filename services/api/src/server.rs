use crate::cli::ServeArgs;
use crate::infra::{load_catalog, AppState};
use crate::routes::with_recommendation_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use shoe_advisor::config::AppConfig;
use shoe_advisor::error::AppError;
use shoe_advisor::recommendation::{tables, RecommendationState};
use shoe_advisor::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
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
    if let Some(catalog) = args.catalog.take() {
        config.recommendation.catalog_path = Some(catalog);
    }

    telemetry::init(&config.telemetry)?;
    tables::validate_tables()?;

    let catalog = load_catalog(config.recommendation.catalog_path.as_deref())?;
    info!(
        shoes = catalog.len(),
        source = ?config.recommendation.catalog_path,
        "shoe catalog loaded"
    );

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let recommendation_state =
        RecommendationState::new(catalog, config.recommendation.default_limit);
    let app = with_recommendation_routes(recommendation_state)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "shoe recommendation service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
