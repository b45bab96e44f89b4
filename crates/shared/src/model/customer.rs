use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct CustomerModel {
    pub cuit: String,
    pub dni: String,
    pub complete_name: String,
    pub address: String,
    pub telephone: String,
    pub entry_date: NaiveDate,
}
