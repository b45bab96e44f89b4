use crate::{
    domain::{
        requests::{ExpiringCardsRequest, PaymentSummaryRequest, PurchaseLookupRequest},
        responses::{
            ApiResponse, ExpiringCardResponse, MonthlyPaymentResponse, PaymentSummaryResponse,
            SinglePaymentResponse, TopCardResponse,
        },
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCardService = Arc<dyn CardServiceTrait + Send + Sync>;

#[async_trait]
pub trait CardServiceTrait {
    async fn payment_summary(
        &self,
        req: &PaymentSummaryRequest,
    ) -> Result<ApiResponse<PaymentSummaryResponse>, ServiceError>;

    async fn expiring_cards(
        &self,
        req: &ExpiringCardsRequest,
    ) -> Result<ApiResponse<Vec<ExpiringCardResponse>>, ServiceError>;

    async fn find_single_purchase(
        &self,
        req: &PurchaseLookupRequest,
    ) -> Result<ApiResponse<SinglePaymentResponse>, ServiceError>;

    async fn find_monthly_purchase(
        &self,
        req: &PurchaseLookupRequest,
    ) -> Result<ApiResponse<MonthlyPaymentResponse>, ServiceError>;

    async fn top_cards(&self) -> Result<ApiResponse<Vec<TopCardResponse>>, ServiceError>;
}
