use crate::{
    domain::{
        requests::{AvailablePromotionsRequest, ExtendValidityRequest},
        responses::{
            ApiResponse, AvailablePromotionsResponse, MostUsedPromotionResponse,
            PromotionResponse,
        },
    },
    errors::ServiceError,
    model::promotion::PromotionType,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynPromotionService = Arc<dyn PromotionServiceTrait + Send + Sync>;

#[async_trait]
pub trait PromotionServiceTrait {
    async fn extend_validity(
        &self,
        kind: PromotionType,
        code: &str,
        req: &ExtendValidityRequest,
    ) -> Result<ApiResponse<PromotionResponse>, ServiceError>;

    async fn delete(
        &self,
        kind: PromotionType,
        code: &str,
    ) -> Result<ApiResponse<bool>, ServiceError>;

    async fn available_for_store(
        &self,
        req: &AvailablePromotionsRequest,
    ) -> Result<ApiResponse<AvailablePromotionsResponse>, ServiceError>;

    async fn most_used(&self) -> Result<ApiResponse<MostUsedPromotionResponse>, ServiceError>;
}
