use crate::{
    errors::RepositoryError,
    model::{
        bank::{BankCustomerCount, BankModel},
        promotion::{NewFinancingPromotion, PromotionModel, PromotionType},
    },
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

pub type DynBankRepository = Arc<dyn BankRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait BankRepositoryTrait {
    async fn find_by_cuit(&self, cuit: &str) -> Result<BankModel, RepositoryError>;

    /// Resolves the bank and stores the promotion atomically.
    ///
    /// `NotFound` when the bank does not exist, `Conflict` when the code is
    /// already used by a promotion of either type.
    async fn add_financing_promotion(
        &self,
        bank_cuit: &str,
        promotion: NewFinancingPromotion,
    ) -> Result<PromotionModel, RepositoryError>;

    async fn update_validity_end(
        &self,
        kind: PromotionType,
        code: &str,
        new_end: DateTime<Utc>,
    ) -> Result<PromotionModel, RepositoryError>;

    /// Returns `true` when the flag flipped, `false` when it was already set.
    async fn soft_delete(&self, kind: PromotionType, code: &str) -> Result<bool, RepositoryError>;

    async fn customer_counts(&self) -> Result<Vec<BankCustomerCount>, RepositoryError>;
}
