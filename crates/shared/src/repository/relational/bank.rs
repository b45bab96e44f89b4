use crate::{
    abstract_trait::bank::repository::BankRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::{
        bank::{BankCustomerCount, BankModel},
        promotion::{NewFinancingPromotion, PromotionModel, PromotionType},
    },
    repository::relational::{rows::PromotionRow, sql},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{error, info};

pub struct BankRepository {
    db: ConnectionPool,
}

impl BankRepository {
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
}

#[async_trait]
impl BankRepositoryTrait for BankRepository {
    async fn find_by_cuit(&self, cuit: &str) -> Result<BankModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        sqlx::query_as::<_, BankModel>(
            "SELECT cuit, name, address, telephone FROM banks WHERE cuit = $1",
        )
        .bind(cuit)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch bank {cuit}: {e:?}");
            RepositoryError::from(e)
        })?
        .ok_or(RepositoryError::NotFound)
    }

    async fn add_financing_promotion(
        &self,
        bank_cuit: &str,
        promotion: NewFinancingPromotion,
    ) -> Result<PromotionModel, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(|e| {
            error!("❌ Failed to begin transaction: {e:?}");
            RepositoryError::from(e)
        })?;

        let bank_exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM banks WHERE cuit = $1)")
                .bind(bank_cuit)
                .fetch_one(&mut *tx)
                .await
                .map_err(RepositoryError::from)?;

        if !bank_exists {
            return Err(RepositoryError::NotFound);
        }

        let code_taken: bool = sqlx::query_scalar(sql::CODE_TAKEN)
            .bind(&promotion.code)
            .fetch_one(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

        if code_taken {
            return Err(RepositoryError::Conflict(format!(
                "promotion code {} already exists",
                promotion.code
            )));
        }

        sqlx::query(sql::INSERT_FINANCING)
            .bind(&promotion.code)
            .bind(&promotion.promotion_title)
            .bind(&promotion.name_store)
            .bind(&promotion.cuit_store)
            .bind(promotion.validity_start_date)
            .bind(promotion.validity_end_date)
            .bind(&promotion.comments)
            .bind(bank_cuit)
            .bind(promotion.number_of_quotas)
            .bind(promotion.interest)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to insert financing {}: {e:?}", promotion.code);
                RepositoryError::from(e)
            })?;

        tx.commit().await.map_err(|e| {
            error!("❌ Failed to commit financing {}: {e:?}", promotion.code);
            RepositoryError::from(e)
        })?;

        info!("🏦 Financing {} stored for bank {bank_cuit}", promotion.code);

        Ok(promotion.into_model(bank_cuit))
    }

    async fn update_validity_end(
        &self,
        kind: PromotionType,
        code: &str,
        new_end: DateTime<Utc>,
    ) -> Result<PromotionModel, RepositoryError> {
        let mut conn = self.get_conn().await?;
        let statement = sql::update_validity_end(kind);

        let row = sqlx::query_as::<_, PromotionRow>(&statement)
            .bind(code)
            .bind(new_end)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to update validity of {kind} {code}: {e:?}");
                RepositoryError::from(e)
            })?
            .ok_or(RepositoryError::NotFound)?;

        PromotionModel::try_from(row)
    }

    async fn soft_delete(&self, kind: PromotionType, code: &str) -> Result<bool, RepositoryError> {
        let mut conn = self.get_conn().await?;
        let statement = sql::mark_deleted(kind);

        let result = sqlx::query(&statement)
            .bind(code)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete {kind} {code}: {e:?}");
                RepositoryError::from(e)
            })?;

        if result.rows_affected() > 0 {
            return Ok(true);
        }

        let exists_statement = sql::promotion_exists(kind);
        let exists: bool = sqlx::query_scalar(&exists_statement)
            .bind(code)
            .fetch_one(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        if exists {
            Ok(false)
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    async fn customer_counts(&self) -> Result<Vec<BankCustomerCount>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        sqlx::query_as::<_, BankCustomerCount>(
            r#"
            SELECT
                b.cuit AS bank_cuit,
                b.name AS bank_name,
                COUNT(cb.customer_cuit) AS customer_count
            FROM banks b
            LEFT JOIN customers_banks cb ON cb.bank_cuit = b.cuit
            GROUP BY b.cuit, b.name
            ORDER BY b.cuit
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to count bank customers: {e:?}");
            RepositoryError::from(e)
        })
    }
}
