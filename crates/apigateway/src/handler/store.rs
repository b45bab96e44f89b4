use crate::di::BackendServices;
use axum::{
    Json,
    extract::{Extension, Path},
    response::IntoResponse,
    routing::get,
};
use shared::{
    abstract_trait::store::service::DynStoreService,
    domain::{
        requests::StoreRevenueRequest,
        responses::{ApiResponse, StoreResponse},
    },
    errors::AppErrorHttp,
};
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/v1/{backend}/stores/highest-revenue/{month}/{year}",
    tag = "Store",
    params(
        ("backend" = String, Path, description = "Storage backend: `sql` or `no-sql`"),
        StoreRevenueRequest
    ),
    responses(
        (status = 200, description = "Store with the highest revenue, null when the month is empty", body = ApiResponse<Option<StoreResponse>>),
        (status = 400, description = "Invalid month or year"),
        (status = 503, description = "Storage unavailable")
    )
)]
pub async fn get_highest_revenue_store(
    Extension(service): Extension<DynStoreService>,
    Path(req): Path<StoreRevenueRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.highest_revenue(&req).await?;
    Ok(Json(response))
}

pub fn store_routes(services: &BackendServices) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/stores/highest-revenue/{month}/{year}",
            get(get_highest_revenue_store),
        )
        .layer(Extension(services.store.clone()))
}
