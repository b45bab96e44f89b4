mod api;
mod bank;
mod card;
mod promotion;
mod purchase;
mod store;

pub use self::api::ApiResponse;
pub use self::bank::BankCustomerCountResponse;
pub use self::card::{
    CardResponse, ExpiringCardResponse, PaymentSummaryResponse, TopCardResponse,
};
pub use self::promotion::{
    AvailablePromotionsResponse, MostUsedPromotionResponse, PromotionResponse,
};
pub use self::purchase::{MonthlyPaymentResponse, QuotaResponse, SinglePaymentResponse};
pub use self::store::StoreResponse;
