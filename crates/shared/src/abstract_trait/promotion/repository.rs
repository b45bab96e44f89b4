use crate::{
    errors::RepositoryError,
    model::{
        promotion::{PromotionModel, PromotionType},
        purchase::VoucherUsage,
    },
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

pub type DynPromotionRepository = Arc<dyn PromotionRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait PromotionRepositoryTrait {
    /// Looks in financings first, then discounts.
    async fn find_by_code(&self, code: &str) -> Result<PromotionModel, RepositoryError>;

    async fn find_by_kind_and_code(
        &self,
        kind: PromotionType,
        code: &str,
    ) -> Result<PromotionModel, RepositoryError>;

    /// Non-deleted promotions of the store whose validity overlaps `[start, end]`.
    async fn find_available_for_store(
        &self,
        cuit: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<PromotionModel>, RepositoryError>;

    async fn voucher_usage(&self) -> Result<Vec<VoucherUsage>, RepositoryError>;
}
