use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Final-amount totals of a store inside a window, kept per purchase shape.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct StoreRevenue {
    pub store: String,
    pub cuit_store: String,
    pub single_total: f64,
    pub monthly_total: f64,
}

impl StoreRevenue {
    pub fn total(&self) -> f64 {
        self.single_total + self.monthly_total
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreSummary {
    pub name: String,
    pub cuit: String,
    pub total_amount: f64,
}

impl From<StoreRevenue> for StoreSummary {
    fn from(value: StoreRevenue) -> Self {
        let total_amount = value.total();
        StoreSummary {
            name: value.store,
            cuit: value.cuit_store,
            total_amount,
        }
    }
}
