use crate::{
    domain::{
        requests::StoreRevenueRequest,
        responses::{ApiResponse, StoreResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynStoreService = Arc<dyn StoreServiceTrait + Send + Sync>;

#[async_trait]
pub trait StoreServiceTrait {
    /// `data` is `None` when no purchase falls in the month.
    async fn highest_revenue(
        &self,
        req: &StoreRevenueRequest,
    ) -> Result<ApiResponse<Option<StoreResponse>>, ServiceError>;
}
