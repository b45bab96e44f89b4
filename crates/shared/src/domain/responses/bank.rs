use crate::model::bank::BankCustomerCount;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct BankCustomerCountResponse {
    pub bank_cuit: String,
    pub bank_name: String,
    pub customer_count: i64,
}

impl From<BankCustomerCount> for BankCustomerCountResponse {
    fn from(value: BankCustomerCount) -> Self {
        BankCustomerCountResponse {
            bank_cuit: value.bank_cuit,
            bank_name: value.bank_name,
            customer_count: value.customer_count,
        }
    }
}
