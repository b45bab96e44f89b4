use axum::{extract::Extension, http::header, response::IntoResponse, routing::get};
use prometheus_client::{encoding::text::encode, registry::Registry};
use shared::errors::{AppErrorHttp, ServiceError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

const OPENMETRICS_CONTENT_TYPE: &str = "application/openmetrics-text; version=1.0.0; charset=utf-8";

pub async fn get_metrics(
    Extension(registry): Extension<Arc<Registry>>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let mut body = String::new();
    encode(&mut body, &registry)
        .map_err(|e| ServiceError::Custom(format!("failed to encode metrics: {e}")))?;

    Ok(([(header::CONTENT_TYPE, OPENMETRICS_CONTENT_TYPE)], body))
}

pub fn metrics_routes(registry: Arc<Registry>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/metrics", get(get_metrics))
        .layer(Extension(registry))
}
