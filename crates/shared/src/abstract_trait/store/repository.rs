use crate::{errors::RepositoryError, model::store::StoreRevenue};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

pub type DynStoreRepository = Arc<dyn StoreRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait StoreRepositoryTrait {
    /// Final-amount totals per (store, cuit) of purchases with `start <= created_at < end`.
    async fn revenue_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<StoreRevenue>, RepositoryError>;
}
