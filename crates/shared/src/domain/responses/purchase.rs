use crate::model::purchase::{MonthlyPaymentModel, QuotaModel, SinglePaymentModel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SinglePaymentResponse {
    pub payment_voucher: String,
    pub store: String,
    pub cuit_store: String,
    pub amount: f64,
    pub final_amount: f64,
    pub store_discount: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuotaResponse {
    pub number: i32,
    pub price: f64,
    pub month: i32,
    pub year: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MonthlyPaymentResponse {
    pub payment_voucher: String,
    pub store: String,
    pub cuit_store: String,
    pub amount: f64,
    pub final_amount: f64,
    pub interest: f64,
    pub number_of_quotas: i32,
    #[serde(rename = "quota")]
    pub quotas: Vec<QuotaResponse>,
    pub created_at: DateTime<Utc>,
}

impl From<SinglePaymentModel> for SinglePaymentResponse {
    fn from(value: SinglePaymentModel) -> Self {
        SinglePaymentResponse {
            payment_voucher: value.base.payment_voucher,
            store: value.base.store,
            cuit_store: value.base.cuit_store,
            amount: value.base.amount,
            final_amount: value.base.final_amount,
            store_discount: value.store_discount,
            created_at: value.base.created_at,
        }
    }
}

impl From<QuotaModel> for QuotaResponse {
    fn from(value: QuotaModel) -> Self {
        QuotaResponse {
            number: value.number,
            price: value.price,
            month: value.month,
            year: value.year,
        }
    }
}

impl From<MonthlyPaymentModel> for MonthlyPaymentResponse {
    fn from(value: MonthlyPaymentModel) -> Self {
        MonthlyPaymentResponse {
            payment_voucher: value.base.payment_voucher,
            store: value.base.store,
            cuit_store: value.base.cuit_store,
            amount: value.base.amount,
            final_amount: value.base.final_amount,
            interest: value.interest,
            number_of_quotas: value.number_of_quotas,
            quotas: value.quotas.into_iter().map(QuotaResponse::from).collect(),
            created_at: value.base.created_at,
        }
    }
}
