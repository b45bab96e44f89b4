use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct BankModel {
    pub cuit: String,
    pub name: String,
    pub address: String,
    pub telephone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct BankCustomerCount {
    pub bank_cuit: String,
    pub bank_name: String,
    pub customer_count: i64,
}
