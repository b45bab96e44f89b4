use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct PaymentSummaryRequest {
    #[validate(length(min = 1, message = "Card number is required"))]
    pub card_number: String,

    pub month: u32,

    pub year: i32,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct ExpiringCardsRequest {
    pub day: u32,

    pub month: u32,

    pub year: i32,
}

#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct PurchaseLookupRequest {
    #[validate(length(min = 1, message = "Store cuit is required"))]
    pub cuit: String,

    #[validate(range(exclusive_min = 0.0, message = "Final amount must be positive"))]
    pub final_amount: f64,

    #[validate(length(min = 1, message = "Payment voucher is required"))]
    pub payment_voucher: String,
}
