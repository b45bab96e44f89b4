use crate::{
    domain::responses::purchase::{MonthlyPaymentResponse, SinglePaymentResponse},
    model::{
        card::{CardDue, CardModel, CardPurchaseCount},
        payment_summary::PaymentSummaryModel,
    },
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ccv is never serialized
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CardResponse {
    pub number: String,
    pub cardholder_name_in_card: String,
    pub since: DateTime<Utc>,
    pub expiration_date: DateTime<Utc>,
    pub bank: String,
}

impl From<CardModel> for CardResponse {
    fn from(value: CardModel) -> Self {
        CardResponse {
            number: value.number,
            cardholder_name_in_card: value.cardholder_name_in_card,
            since: value.since,
            expiration_date: value.expiration_date,
            bank: value.bank_cuit,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaymentSummaryResponse {
    pub code: String,
    pub month: u32,
    pub year: i32,
    pub first_expiration: DateTime<Utc>,
    pub second_expiration: DateTime<Utc>,
    pub surcharge_percentage: f64,
    pub total_price: f64,
    pub card: CardResponse,
    pub monthly_payments: Vec<MonthlyPaymentResponse>,
    pub single_payments: Vec<SinglePaymentResponse>,
}

impl PaymentSummaryResponse {
    pub fn assemble(summary: PaymentSummaryModel, card: CardModel) -> Self {
        PaymentSummaryResponse {
            code: summary.code,
            month: summary.month,
            year: summary.year,
            first_expiration: summary.first_expiration,
            second_expiration: summary.second_expiration,
            surcharge_percentage: summary.surcharge_percentage,
            total_price: summary.total_price,
            card: CardResponse::from(card),
            monthly_payments: summary
                .purchases
                .monthly_payments
                .into_iter()
                .map(MonthlyPaymentResponse::from)
                .collect(),
            single_payments: summary
                .purchases
                .single_payments
                .into_iter()
                .map(SinglePaymentResponse::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExpiringCardResponse {
    pub card: CardResponse,
    pub first_expiration: DateTime<Utc>,
}

impl From<CardDue> for ExpiringCardResponse {
    fn from(value: CardDue) -> Self {
        ExpiringCardResponse {
            card: CardResponse::from(value.card),
            first_expiration: value.first_expiration,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TopCardResponse {
    pub card: CardResponse,
    pub single_count: i64,
    pub monthly_count: i64,
    pub total_purchases: i64,
}

impl From<CardPurchaseCount> for TopCardResponse {
    fn from(value: CardPurchaseCount) -> Self {
        let total_purchases = value.total();
        TopCardResponse {
            card: CardResponse::from(value.card),
            single_count: value.single_count,
            monthly_count: value.monthly_count,
            total_purchases,
        }
    }
}
