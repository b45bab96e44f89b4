use crate::{
    abstract_trait::store::repository::StoreRepositoryTrait,
    errors::RepositoryError,
    model::store::StoreRevenue,
    repository::document::{
        documents::{SINGLE_PAYMENTS, StoreRevenueDocument},
        pipeline::store_revenue_pipeline,
    },
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{
    Database,
    bson::{Document, from_document},
};
use tracing::error;

pub struct StoreRepository {
    db: Database,
}

impl StoreRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StoreRepositoryTrait for StoreRepository {
    async fn revenue_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<StoreRevenue>, RepositoryError> {
        let docs: Vec<Document> = self
            .db
            .collection::<Document>(SINGLE_PAYMENTS)
            .aggregate(store_revenue_pipeline(start, end))
            .await
            .map_err(RepositoryError::from)?
            .try_collect()
            .await
            .map_err(|e| {
                error!("❌ Failed to aggregate store revenue: {e:?}");
                RepositoryError::from(e)
            })?;

        docs.into_iter()
            .map(|doc| {
                from_document::<StoreRevenueDocument>(doc)
                    .map(StoreRevenue::from)
                    .map_err(RepositoryError::from)
            })
            .collect()
    }
}
