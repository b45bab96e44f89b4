use crate::{
    errors::RepositoryError,
    model::{
        card::{CardDue, CardModel, CardPurchaseCount},
        payment_summary::PaymentSummaryModel,
        purchase::{CardPurchases, MonthlyPaymentModel, SinglePaymentModel},
    },
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

pub type DynCardRepository = Arc<dyn CardRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CardRepositoryTrait {
    async fn find_by_number(&self, number: &str) -> Result<CardModel, RepositoryError>;

    /// Purchases of both shapes with `start <= created_at < end`, quotas loaded.
    async fn find_purchases_between(
        &self,
        number: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<CardPurchases, RepositoryError>;

    /// Upserts on (card number, code).
    async fn save_payment_summary(
        &self,
        summary: &PaymentSummaryModel,
    ) -> Result<(), RepositoryError>;

    /// Cards with a persisted summary whose first due date is within `[start, end]`.
    async fn find_cards_due_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<CardDue>, RepositoryError>;

    async fn find_single_purchase(
        &self,
        cuit: &str,
        final_amount: f64,
        voucher: &str,
    ) -> Result<SinglePaymentModel, RepositoryError>;

    async fn find_monthly_purchase(
        &self,
        cuit: &str,
        final_amount: f64,
        voucher: &str,
    ) -> Result<MonthlyPaymentModel, RepositoryError>;

    /// Every card with its purchase counts, ordered by card number.
    async fn purchase_counts(&self) -> Result<Vec<CardPurchaseCount>, RepositoryError>;
}
