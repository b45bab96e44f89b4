use crate::model::purchase::CardPurchases;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentSummaryModel {
    pub code: String,
    pub card_number: String,
    pub month: u32,
    pub year: i32,
    pub first_expiration: DateTime<Utc>,
    pub second_expiration: DateTime<Utc>,
    pub surcharge_percentage: f64,
    pub total_price: f64,
    pub purchases: CardPurchases,
}
