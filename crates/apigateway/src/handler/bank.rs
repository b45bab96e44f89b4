use crate::{di::BackendServices, middleware::validate::SimpleValidatedJson};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    abstract_trait::bank::service::DynBankService,
    domain::{
        requests::AddFinancingPromotionRequest,
        responses::{ApiResponse, BankCustomerCountResponse, PromotionResponse},
    },
    errors::AppErrorHttp,
};
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/v1/{backend}/promotions/add-promotion",
    tag = "Bank",
    params(("backend" = String, Path, description = "Storage backend: `sql` or `no-sql`")),
    request_body = AddFinancingPromotionRequest,
    responses(
        (status = 201, description = "Financing promotion added", body = ApiResponse<PromotionResponse>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Bank not found"),
        (status = 409, description = "Promotion code already in use"),
        (status = 503, description = "Storage unavailable")
    )
)]
pub async fn add_financing_promotion(
    Extension(service): Extension<DynBankService>,
    SimpleValidatedJson(body): SimpleValidatedJson<AddFinancingPromotionRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.add_financing_promotion(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/v1/{backend}/banks/customers/count",
    tag = "Bank",
    params(("backend" = String, Path, description = "Storage backend: `sql` or `no-sql`")),
    responses(
        (status = 200, description = "Customers per bank", body = ApiResponse<Vec<BankCustomerCountResponse>>),
        (status = 503, description = "Storage unavailable")
    )
)]
pub async fn get_customer_counts(
    Extension(service): Extension<DynBankService>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.customer_counts().await?;
    Ok(Json(response))
}

pub fn bank_routes(services: &BackendServices) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/promotions/add-promotion", post(add_financing_promotion))
        .route("/banks/customers/count", get(get_customer_counts))
        .layer(Extension(services.bank.clone()))
}
