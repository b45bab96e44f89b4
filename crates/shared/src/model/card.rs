use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct CardModel {
    pub number: String,
    pub ccv: String,
    pub cardholder_name_in_card: String,
    pub since: DateTime<Utc>,
    pub expiration_date: DateTime<Utc>,
    pub bank_cuit: String,
    pub customer_cuit: String,
}

/// Purchase counts of a single card, split by purchase shape.
#[derive(Debug, Clone, PartialEq)]
pub struct CardPurchaseCount {
    pub card: CardModel,
    pub single_count: i64,
    pub monthly_count: i64,
}

impl CardPurchaseCount {
    pub fn total(&self) -> i64 {
        self.single_count + self.monthly_count
    }
}

/// A card whose persisted payment summary falls due inside a queried window.
#[derive(Debug, Clone, PartialEq)]
pub struct CardDue {
    pub card: CardModel,
    pub first_expiration: DateTime<Utc>,
}
