use crate::{
    abstract_trait::card::repository::CardRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::{
        card::{CardDue, CardModel, CardPurchaseCount},
        payment_summary::PaymentSummaryModel,
        purchase::{CardPurchases, MonthlyPaymentModel, QuotaModel, SinglePaymentModel},
    },
    repository::relational::{
        rows::{CardCountRow, CardDueRow, MonthlyPaymentRow, QuotaRow, SinglePaymentRow},
        sql::CARD_COLUMNS,
    },
    utils::mask_card_number,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgConnection;
use std::collections::HashMap;
use tracing::error;

const SINGLE_COLUMNS: &str =
    "payment_voucher, store, cuit_store, amount, final_amount, store_discount, card_number, created_at";

const MONTHLY_COLUMNS: &str = "id, payment_voucher, store, cuit_store, amount, final_amount, \
     interest, number_of_quotas, card_number, created_at";

pub struct CardRepository {
    db: ConnectionPool,
}

impl CardRepository {
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

    async fn attach_quotas(
        conn: &mut PgConnection,
        rows: Vec<MonthlyPaymentRow>,
    ) -> Result<Vec<MonthlyPaymentModel>, RepositoryError> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();

        let quota_rows = sqlx::query_as::<_, QuotaRow>(
            r#"
            SELECT monthly_payment_id, number, price, month, year
            FROM quotas
            WHERE monthly_payment_id = ANY($1)
            ORDER BY monthly_payment_id, number
            "#,
        )
        .bind(ids)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to load quotas: {e:?}");
            RepositoryError::from(e)
        })?;

        let mut by_purchase: HashMap<i64, Vec<QuotaModel>> = HashMap::new();
        for quota in quota_rows {
            by_purchase
                .entry(quota.monthly_payment_id)
                .or_default()
                .push(quota.into());
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let quotas = by_purchase.remove(&row.id).unwrap_or_default();
                row.into_model(quotas)
            })
            .collect())
    }
}

#[async_trait]
impl CardRepositoryTrait for CardRepository {
    async fn find_by_number(&self, number: &str) -> Result<CardModel, RepositoryError> {
        let mut conn = self.get_conn().await?;
        let statement = format!("SELECT {CARD_COLUMNS} FROM cards c WHERE c.number = $1");

        sqlx::query_as::<_, CardModel>(&statement)
            .bind(number)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!(
                    "❌ Failed to fetch card {}: {e:?}",
                    mask_card_number(number)
                );
                RepositoryError::from(e)
            })?
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_purchases_between(
        &self,
        number: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<CardPurchases, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let single_statement = format!(
            "SELECT {SINGLE_COLUMNS} FROM purchase_single_payments \
             WHERE card_number = $1 AND created_at >= $2 AND created_at < $3 \
             ORDER BY created_at, id"
        );
        let singles = sqlx::query_as::<_, SinglePaymentRow>(&single_statement)
            .bind(number)
            .bind(start)
            .bind(end)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch single payments: {e:?}");
                RepositoryError::from(e)
            })?;

        let monthly_statement = format!(
            "SELECT {MONTHLY_COLUMNS} FROM purchase_monthly_payments \
             WHERE card_number = $1 AND created_at >= $2 AND created_at < $3 \
             ORDER BY created_at, id"
        );
        let monthly_rows = sqlx::query_as::<_, MonthlyPaymentRow>(&monthly_statement)
            .bind(number)
            .bind(start)
            .bind(end)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch monthly payments: {e:?}");
                RepositoryError::from(e)
            })?;

        let monthly_payments = Self::attach_quotas(&mut *conn, monthly_rows).await?;

        Ok(CardPurchases {
            single_payments: singles.into_iter().map(SinglePaymentModel::from).collect(),
            monthly_payments,
        })
    }

    async fn save_payment_summary(
        &self,
        summary: &PaymentSummaryModel,
    ) -> Result<(), RepositoryError> {
        let mut conn = self.get_conn().await?;

        sqlx::query(
            r#"
            INSERT INTO payment_summaries (
                code, card_number, month, year, first_expiration,
                second_expiration, surcharge_percentage, total_price
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (card_number, code) DO UPDATE SET
                first_expiration = EXCLUDED.first_expiration,
                second_expiration = EXCLUDED.second_expiration,
                surcharge_percentage = EXCLUDED.surcharge_percentage,
                total_price = EXCLUDED.total_price
            "#,
        )
        .bind(&summary.code)
        .bind(&summary.card_number)
        .bind(summary.month as i32)
        .bind(summary.year)
        .bind(summary.first_expiration)
        .bind(summary.second_expiration)
        .bind(summary.surcharge_percentage)
        .bind(summary.total_price)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to persist summary {}: {e:?}", summary.code);
            RepositoryError::from(e)
        })?;

        Ok(())
    }

    async fn find_cards_due_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<CardDue>, RepositoryError> {
        let mut conn = self.get_conn().await?;
        let statement = format!(
            "SELECT {CARD_COLUMNS}, ps.first_expiration \
             FROM payment_summaries ps \
             JOIN cards c ON c.number = ps.card_number \
             WHERE ps.first_expiration BETWEEN $1 AND $2 \
             ORDER BY ps.first_expiration, c.number"
        );

        let rows = sqlx::query_as::<_, CardDueRow>(&statement)
            .bind(start)
            .bind(end)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch expiring cards: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(rows.into_iter().map(CardDue::from).collect())
    }

    async fn find_single_purchase(
        &self,
        cuit: &str,
        final_amount: f64,
        voucher: &str,
    ) -> Result<SinglePaymentModel, RepositoryError> {
        let mut conn = self.get_conn().await?;
        let statement = format!(
            "SELECT {SINGLE_COLUMNS} FROM purchase_single_payments \
             WHERE cuit_store = $1 AND final_amount = $2 AND payment_voucher = $3 \
             ORDER BY created_at, id LIMIT 1"
        );

        sqlx::query_as::<_, SinglePaymentRow>(&statement)
            .bind(cuit)
            .bind(final_amount)
            .bind(voucher)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch single payment {voucher}: {e:?}");
                RepositoryError::from(e)
            })?
            .map(SinglePaymentModel::from)
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_monthly_purchase(
        &self,
        cuit: &str,
        final_amount: f64,
        voucher: &str,
    ) -> Result<MonthlyPaymentModel, RepositoryError> {
        let mut conn = self.get_conn().await?;
        let statement = format!(
            "SELECT {MONTHLY_COLUMNS} FROM purchase_monthly_payments \
             WHERE cuit_store = $1 AND final_amount = $2 AND payment_voucher = $3 \
             ORDER BY created_at, id LIMIT 1"
        );

        let row = sqlx::query_as::<_, MonthlyPaymentRow>(&statement)
            .bind(cuit)
            .bind(final_amount)
            .bind(voucher)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch monthly payment {voucher}: {e:?}");
                RepositoryError::from(e)
            })?
            .ok_or(RepositoryError::NotFound)?;

        Self::attach_quotas(&mut *conn, vec![row])
            .await?
            .pop()
            .ok_or(RepositoryError::NotFound)
    }

    async fn purchase_counts(&self) -> Result<Vec<CardPurchaseCount>, RepositoryError> {
        let mut conn = self.get_conn().await?;
        let statement = format!(
            "SELECT {CARD_COLUMNS}, \
                 COALESCE(s.total, 0)::BIGINT AS single_count, \
                 COALESCE(m.total, 0)::BIGINT AS monthly_count \
             FROM cards c \
             LEFT JOIN ( \
                 SELECT card_number, COUNT(*) AS total \
                 FROM purchase_single_payments GROUP BY card_number \
             ) s ON s.card_number = c.number \
             LEFT JOIN ( \
                 SELECT card_number, COUNT(*) AS total \
                 FROM purchase_monthly_payments GROUP BY card_number \
             ) m ON m.card_number = c.number \
             ORDER BY c.number"
        );

        let rows = sqlx::query_as::<_, CardCountRow>(&statement)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to count card purchases: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(rows.into_iter().map(CardPurchaseCount::from).collect())
    }
}
