use crate::{
    abstract_trait::store::{repository::DynStoreRepository, service::StoreServiceTrait},
    domain::{
        requests::StoreRevenueRequest,
        responses::{ApiResponse, StoreResponse},
    },
    errors::ServiceError,
    service::{context::EngineContext, policy::pick_top_store},
    utils::{Method, month_window},
};
use async_trait::async_trait;
use std::time::Instant;
use tracing::info;

pub struct StoreService {
    repo: DynStoreRepository,
    ctx: EngineContext,
}

impl StoreService {
    pub fn new(repo: DynStoreRepository, ctx: EngineContext) -> Self {
        Self { repo, ctx }
    }

    async fn find_highest_revenue(
        &self,
        req: &StoreRevenueRequest,
    ) -> Result<ApiResponse<Option<StoreResponse>>, ServiceError> {
        let window = month_window(req.month, req.year)?;

        info!(
            "💰 Ranking stores by revenue | Period: {}/{}",
            req.month, req.year
        );

        let revenues = self
            .ctx
            .call(
                &format!("store revenue {}/{}", req.month, req.year),
                self.repo.revenue_between(window.start, window.end),
            )
            .await?;

        let candidates = revenues.len();
        let top = pick_top_store(revenues).map(StoreResponse::from);

        let message = match &top {
            Some(store) => {
                info!(
                    "💰 Store {} ({}) leads {candidates} stores with {:.2}",
                    store.name, store.cuit, store.total_amount
                );
                "Highest revenue store retrieved successfully"
            }
            None => {
                info!("💰 No purchases in {}/{}", req.month, req.year);
                "No purchases registered in the requested month"
            }
        };

        Ok(ApiResponse {
            status: "success".to_string(),
            message: message.to_string(),
            data: top,
        })
    }
}

#[async_trait]
impl StoreServiceTrait for StoreService {
    async fn highest_revenue(
        &self,
        req: &StoreRevenueRequest,
    ) -> Result<ApiResponse<Option<StoreResponse>>, ServiceError> {
        let started = Instant::now();
        let result = self.find_highest_revenue(req).await;
        self.ctx
            .finish("highest_revenue_store", Method::Get, started, &result);
        result
    }
}
