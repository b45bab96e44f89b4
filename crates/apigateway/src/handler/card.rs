use crate::di::BackendServices;
use axum::{
    Json,
    extract::{Extension, Path},
    response::IntoResponse,
    routing::get,
};
use shared::{
    abstract_trait::card::service::DynCardService,
    domain::{
        requests::{ExpiringCardsRequest, PaymentSummaryRequest, PurchaseLookupRequest},
        responses::{
            ApiResponse, ExpiringCardResponse, MonthlyPaymentResponse, PaymentSummaryResponse,
            SinglePaymentResponse, TopCardResponse,
        },
    },
    errors::AppErrorHttp,
};
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/v1/{backend}/cards/summary/{card_number}/{month}/{year}",
    tag = "Card",
    params(
        ("backend" = String, Path, description = "Storage backend: `sql` or `no-sql`"),
        PaymentSummaryRequest
    ),
    responses(
        (status = 200, description = "Monthly payment summary", body = ApiResponse<PaymentSummaryResponse>),
        (status = 400, description = "Invalid month or year"),
        (status = 404, description = "Card not found"),
        (status = 503, description = "Storage unavailable")
    )
)]
pub async fn get_payment_summary(
    Extension(service): Extension<DynCardService>,
    Path(req): Path<PaymentSummaryRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.payment_summary(&req).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/v1/{backend}/cards/expiring/{day}/{month}/{year}",
    tag = "Card",
    params(
        ("backend" = String, Path, description = "Storage backend: `sql` or `no-sql`"),
        ExpiringCardsRequest
    ),
    responses(
        (status = 200, description = "Cards due in the next 30 days", body = ApiResponse<Vec<ExpiringCardResponse>>),
        (status = 400, description = "Invalid date"),
        (status = 503, description = "Storage unavailable")
    )
)]
pub async fn get_expiring_cards(
    Extension(service): Extension<DynCardService>,
    Path(req): Path<ExpiringCardsRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.expiring_cards(&req).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/v1/{backend}/cards/purchase/single/{cuit}/{final_amount}/{payment_voucher}",
    tag = "Card",
    params(
        ("backend" = String, Path, description = "Storage backend: `sql` or `no-sql`"),
        PurchaseLookupRequest
    ),
    responses(
        (status = 200, description = "Single-payment purchase", body = ApiResponse<SinglePaymentResponse>),
        (status = 404, description = "Purchase not found"),
        (status = 503, description = "Storage unavailable")
    )
)]
pub async fn get_single_purchase(
    Extension(service): Extension<DynCardService>,
    Path(req): Path<PurchaseLookupRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_single_purchase(&req).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/v1/{backend}/cards/purchase/monthly/{cuit}/{final_amount}/{payment_voucher}",
    tag = "Card",
    params(
        ("backend" = String, Path, description = "Storage backend: `sql` or `no-sql`"),
        PurchaseLookupRequest
    ),
    responses(
        (status = 200, description = "Monthly-payment purchase with quotas", body = ApiResponse<MonthlyPaymentResponse>),
        (status = 404, description = "Purchase not found"),
        (status = 503, description = "Storage unavailable")
    )
)]
pub async fn get_monthly_purchase(
    Extension(service): Extension<DynCardService>,
    Path(req): Path<PurchaseLookupRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_monthly_purchase(&req).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/v1/{backend}/cards/top",
    tag = "Card",
    params(("backend" = String, Path, description = "Storage backend: `sql` or `no-sql`")),
    responses(
        (status = 200, description = "Cards with the most purchases", body = ApiResponse<Vec<TopCardResponse>>),
        (status = 503, description = "Storage unavailable")
    )
)]
pub async fn get_top_cards(
    Extension(service): Extension<DynCardService>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.top_cards().await?;
    Ok(Json(response))
}

pub fn card_routes(services: &BackendServices) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/cards/summary/{card_number}/{month}/{year}",
            get(get_payment_summary),
        )
        .route("/cards/expiring/{day}/{month}/{year}", get(get_expiring_cards))
        .route(
            "/cards/purchase/single/{cuit}/{final_amount}/{payment_voucher}",
            get(get_single_purchase),
        )
        .route(
            "/cards/purchase/monthly/{cuit}/{final_amount}/{payment_voucher}",
            get(get_monthly_purchase),
        )
        .route("/cards/top", get(get_top_cards))
        .layer(Extension(services.card.clone()))
}
