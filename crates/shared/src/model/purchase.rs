use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseBase {
    pub payment_voucher: String,
    pub store: String,
    pub cuit_store: String,
    pub amount: f64,
    pub final_amount: f64,
    pub card_number: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SinglePaymentModel {
    pub base: PurchaseBase,
    pub store_discount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuotaModel {
    pub number: i32,
    pub price: f64,
    pub month: i32,
    pub year: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyPaymentModel {
    pub base: PurchaseBase,
    pub interest: f64,
    pub number_of_quotas: i32,
    pub quotas: Vec<QuotaModel>,
}

/// Both purchase shapes of one card inside a date window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardPurchases {
    pub single_payments: Vec<SinglePaymentModel>,
    pub monthly_payments: Vec<MonthlyPaymentModel>,
}

impl CardPurchases {
    /// Sum of the gross amount of every purchase.
    pub fn total_amount(&self) -> f64 {
        let single: f64 = self.single_payments.iter().map(|p| p.base.amount).sum();
        let monthly: f64 = self.monthly_payments.iter().map(|p| p.base.amount).sum();
        single + monthly
    }
}

/// How many purchases of each shape quote a given payment voucher.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct VoucherUsage {
    pub payment_voucher: String,
    pub single_count: i64,
    pub monthly_count: i64,
}

impl VoucherUsage {
    pub fn total(&self) -> i64 {
        self.single_count + self.monthly_count
    }
}
