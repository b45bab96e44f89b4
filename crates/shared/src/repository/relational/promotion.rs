use crate::{
    abstract_trait::promotion::repository::PromotionRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::{
        promotion::{PromotionModel, PromotionType},
        purchase::VoucherUsage,
    },
    repository::relational::{rows::PromotionRow, sql},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::error;

pub struct PromotionRepository {
    db: ConnectionPool,
}

impl PromotionRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn get_conn(
        &self,
    ) -> Result<sqlx::pool::PoolConnection<sqlx::Postgres>, RepositoryError> {
        self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn fetch_by_code(
        &self,
        kind: PromotionType,
        code: &str,
    ) -> Result<Option<PromotionModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;
        let statement = sql::select_promotion_by_code(kind);

        let row = sqlx::query_as::<_, PromotionRow>(&statement)
            .bind(code)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch {kind} {code}: {e:?}");
                RepositoryError::from(e)
            })?;

        row.map(PromotionModel::try_from).transpose()
    }
}

#[async_trait]
impl PromotionRepositoryTrait for PromotionRepository {
    async fn find_by_code(&self, code: &str) -> Result<PromotionModel, RepositoryError> {
        if let Some(promotion) = self.fetch_by_code(PromotionType::Financing, code).await? {
            return Ok(promotion);
        }

        self.fetch_by_code(PromotionType::Discount, code)
            .await?
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_by_kind_and_code(
        &self,
        kind: PromotionType,
        code: &str,
    ) -> Result<PromotionModel, RepositoryError> {
        self.fetch_by_code(kind, code)
            .await?
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_available_for_store(
        &self,
        cuit: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<PromotionModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;
        let statement = sql::available_promotions();

        let rows = sqlx::query_as::<_, PromotionRow>(&statement)
            .bind(cuit)
            .bind(start)
            .bind(end)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch promotions of store {cuit}: {e:?}");
                RepositoryError::from(e)
            })?;

        rows.into_iter().map(PromotionModel::try_from).collect()
    }

    async fn voucher_usage(&self) -> Result<Vec<VoucherUsage>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        sqlx::query_as::<_, VoucherUsage>(sql::VOUCHER_USAGE)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to aggregate voucher usage: {e:?}");
                RepositoryError::from(e)
            })
    }
}
