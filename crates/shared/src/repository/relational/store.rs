use crate::{
    abstract_trait::store::repository::StoreRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError, model::store::StoreRevenue, repository::relational::sql,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::error;

pub struct StoreRepository {
    db: ConnectionPool,
}

impl StoreRepository {
    pub fn new(db: ConnectionPool) -> Self {
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
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, StoreRevenue>(sql::STORE_REVENUE)
            .bind(start)
            .bind(end)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to aggregate store revenue: {e:?}");
                RepositoryError::from(e)
            })
    }
}
