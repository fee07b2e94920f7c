use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryReportStore};
use crate::mailer::ResultMailer;
use crate::routes::with_assessment_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use mindtrx::assessment::AssessmentService;
use mindtrx::config::AppConfig;
use mindtrx::error::AppError;
use mindtrx::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

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

    let store = Arc::new(InMemoryReportStore::default());
    let mailer = Arc::new(ResultMailer::from_config(config.delivery.smtp.as_ref())?);
    match &config.delivery.smtp {
        Some(smtp) => info!(host = %smtp.host, port = smtp.port, "smtp delivery enabled"),
        None => warn!("SMTP_HOST not set; result emails will be refused"),
    }
    let service = Arc::new(AssessmentService::new(
        store,
        mailer,
        config.delivery.clone(),
    ));

    let app = with_assessment_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        public_url = %config.delivery.public_url,
        "assessment service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
