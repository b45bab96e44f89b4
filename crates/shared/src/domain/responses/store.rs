use crate::model::store::StoreSummary;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct StoreResponse {
    pub name: String,
    pub cuit: String,
    pub total_amount: f64,
}

impl From<StoreSummary> for StoreResponse {
    fn from(value: StoreSummary) -> Self {
        StoreResponse {
            name: value.name,
            cuit: value.cuit,
            total_amount: value.total_amount,
        }
    }
}
