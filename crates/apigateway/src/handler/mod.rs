mod bank;
mod card;
mod metrics;
mod promotion;
mod store;

use crate::{di::BackendServices, state::AppState};
use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use shared::utils::shutdown_signal;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::bank::bank_routes;
pub use self::card::card_routes;
pub use self::metrics::metrics_routes;
pub use self::promotion::promotion_routes;
pub use self::store::store_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        bank::add_financing_promotion,
        bank::get_customer_counts,

        card::get_payment_summary,
        card::get_expiring_cards,
        card::get_single_purchase,
        card::get_monthly_purchase,
        card::get_top_cards,

        promotion::extend_financing_validity,
        promotion::delete_financing,
        promotion::extend_discount_validity,
        promotion::delete_discount,
        promotion::get_available_promotions,
        promotion::get_most_used_promotion,

        store::get_highest_revenue_store,
    ),
    tags(
        (name = "Bank", description = "Bank promotions and customer statistics"),
        (name = "Card", description = "Payment summaries, due dates and card rankings"),
        (name = "Promotion", description = "Promotion validity, deletion and usage"),
        (name = "Store", description = "Store revenue reports"),
    )
)]
struct ApiDoc;

/// Every report route bound to one backend's services.
fn backend_routes(services: &BackendServices) -> OpenApiRouter {
    OpenApiRouter::new()
        .merge(bank_routes(services))
        .merge(card_routes(services))
        .merge(promotion_routes(services))
        .merge(store_routes(services))
}

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, app_state: AppState, cancel: CancellationToken) -> Result<()> {
        let di = &app_state.di_container;

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .nest("/v1/sql", backend_routes(&di.sql))
            .nest("/v1/no-sql", backend_routes(&di.no_sql))
            .merge(metrics_routes(app_state.registry.clone()));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(1024 * 1024))
            .layer(TraceLayer::new_for_http());

        let (app_router, api) = router_with_layers.split_for_parts();

        let app = app_router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal(cancel))
            .await?;

        Ok(())
    }
}
