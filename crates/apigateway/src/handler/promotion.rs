use crate::di::BackendServices;
use axum::{
    Json,
    extract::{Extension, Path},
    response::IntoResponse,
    routing::{get, patch},
};
use shared::{
    abstract_trait::promotion::service::DynPromotionService,
    domain::{
        requests::{AvailablePromotionsRequest, ExtendValidityRequest},
        responses::{
            ApiResponse, AvailablePromotionsResponse, MostUsedPromotionResponse,
            PromotionResponse,
        },
    },
    errors::AppErrorHttp,
    model::promotion::PromotionType,
};
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    patch,
    path = "/v1/{backend}/promotions/financing/{code}",
    tag = "Promotion",
    params(
        ("backend" = String, Path, description = "Storage backend: `sql` or `no-sql`"),
        ("code" = String, Path, description = "Financing code")
    ),
    request_body = ExtendValidityRequest,
    responses(
        (status = 200, description = "Validity extended", body = ApiResponse<PromotionResponse>),
        (status = 400, description = "New end date precedes the start date"),
        (status = 404, description = "Financing not found"),
        (status = 503, description = "Storage unavailable")
    )
)]
pub async fn extend_financing_validity(
    Extension(service): Extension<DynPromotionService>,
    Path(code): Path<String>,
    Json(body): Json<ExtendValidityRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service
        .extend_validity(PromotionType::Financing, &code, &body)
        .await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/v1/{backend}/promotions/financing/{code}",
    tag = "Promotion",
    params(
        ("backend" = String, Path, description = "Storage backend: `sql` or `no-sql`"),
        ("code" = String, Path, description = "Financing code")
    ),
    responses(
        (status = 200, description = "Financing marked as deleted", body = ApiResponse<bool>),
        (status = 404, description = "Financing not found"),
        (status = 503, description = "Storage unavailable")
    )
)]
pub async fn delete_financing(
    Extension(service): Extension<DynPromotionService>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.delete(PromotionType::Financing, &code).await?;
    Ok(Json(response))
}

#[utoipa::path(
    patch,
    path = "/v1/{backend}/promotions/discount/{code}",
    tag = "Promotion",
    params(
        ("backend" = String, Path, description = "Storage backend: `sql` or `no-sql`"),
        ("code" = String, Path, description = "Discount code")
    ),
    request_body = ExtendValidityRequest,
    responses(
        (status = 200, description = "Validity extended", body = ApiResponse<PromotionResponse>),
        (status = 400, description = "New end date precedes the start date"),
        (status = 404, description = "Discount not found"),
        (status = 503, description = "Storage unavailable")
    )
)]
pub async fn extend_discount_validity(
    Extension(service): Extension<DynPromotionService>,
    Path(code): Path<String>,
    Json(body): Json<ExtendValidityRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service
        .extend_validity(PromotionType::Discount, &code, &body)
        .await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/v1/{backend}/promotions/discount/{code}",
    tag = "Promotion",
    params(
        ("backend" = String, Path, description = "Storage backend: `sql` or `no-sql`"),
        ("code" = String, Path, description = "Discount code")
    ),
    responses(
        (status = 200, description = "Discount marked as deleted", body = ApiResponse<bool>),
        (status = 404, description = "Discount not found"),
        (status = 503, description = "Storage unavailable")
    )
)]
pub async fn delete_discount(
    Extension(service): Extension<DynPromotionService>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.delete(PromotionType::Discount, &code).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/v1/{backend}/promotions/{cuit}/{start_date}/{end_date}",
    tag = "Promotion",
    params(
        ("backend" = String, Path, description = "Storage backend: `sql` or `no-sql`"),
        AvailablePromotionsRequest
    ),
    responses(
        (status = 200, description = "Promotions of the store valid within the range", body = ApiResponse<AvailablePromotionsResponse>),
        (status = 400, description = "Invalid date range"),
        (status = 503, description = "Storage unavailable")
    )
)]
pub async fn get_available_promotions(
    Extension(service): Extension<DynPromotionService>,
    Path(req): Path<AvailablePromotionsRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.available_for_store(&req).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/v1/{backend}/promotions/most-used",
    tag = "Promotion",
    params(("backend" = String, Path, description = "Storage backend: `sql` or `no-sql`")),
    responses(
        (status = 200, description = "Promotion quoted by the most purchases", body = ApiResponse<MostUsedPromotionResponse>),
        (status = 404, description = "No purchase references a promotion"),
        (status = 503, description = "Storage unavailable")
    )
)]
pub async fn get_most_used_promotion(
    Extension(service): Extension<DynPromotionService>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.most_used().await?;
    Ok(Json(response))
}

pub fn promotion_routes(services: &BackendServices) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/promotions/financing/{code}",
            patch(extend_financing_validity).delete(delete_financing),
        )
        .route(
            "/promotions/discount/{code}",
            patch(extend_discount_validity).delete(delete_discount),
        )
        .route("/promotions/most-used", get(get_most_used_promotion))
        .route(
            "/promotions/{cuit}/{start_date}/{end_date}",
            get(get_available_promotions),
        )
        .layer(Extension(services.promotion.clone()))
}
