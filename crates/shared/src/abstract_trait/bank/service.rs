use crate::{
    domain::{
        requests::AddFinancingPromotionRequest,
        responses::{ApiResponse, BankCustomerCountResponse, PromotionResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynBankService = Arc<dyn BankServiceTrait + Send + Sync>;

#[async_trait]
pub trait BankServiceTrait {
    async fn add_financing_promotion(
        &self,
        req: &AddFinancingPromotionRequest,
    ) -> Result<ApiResponse<PromotionResponse>, ServiceError>;

    async fn customer_counts(
        &self,
    ) -> Result<ApiResponse<Vec<BankCustomerCountResponse>>, ServiceError>;
}
