use crate::{
    abstract_trait::promotion::repository::PromotionRepositoryTrait,
    errors::RepositoryError,
    model::{
        promotion::{PromotionModel, PromotionType},
        purchase::VoucherUsage,
    },
    repository::document::{
        documents::{PromotionDocument, SINGLE_PAYMENTS, VoucherUsageDocument},
        pipeline::{availability_filter, voucher_usage_pipeline},
    },
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Document, doc, from_document},
};
use tracing::error;

pub struct PromotionRepository {
    db: Database,
}

impl PromotionRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn promotions(&self, kind: PromotionType) -> Collection<PromotionDocument> {
        self.db.collection(kind.storage_name())
    }

    async fn fetch_by_code(
        &self,
        kind: PromotionType,
        code: &str,
    ) -> Result<Option<PromotionModel>, RepositoryError> {
        self.promotions(kind)
            .find_one(doc! { "code": code })
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch {kind} {code}: {e:?}");
                RepositoryError::from(e)
            })?
            .map(|doc| doc.into_model(kind))
            .transpose()
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
        let mut available = Vec::new();

        for kind in [PromotionType::Discount, PromotionType::Financing] {
            let docs: Vec<PromotionDocument> = self
                .promotions(kind)
                .find(availability_filter(cuit, start, end))
                .sort(doc! { "validity_start_date": 1, "code": 1 })
                .await
                .map_err(RepositoryError::from)?
                .try_collect()
                .await
                .map_err(|e| {
                    error!("❌ Failed to fetch available {kind} for {cuit}: {e:?}");
                    RepositoryError::from(e)
                })?;

            for doc in docs {
                available.push(doc.into_model(kind)?);
            }
        }

        available.sort_by(|a, b| {
            a.base
                .validity_start_date
                .cmp(&b.base.validity_start_date)
                .then_with(|| a.code().cmp(b.code()))
        });

        Ok(available)
    }

    async fn voucher_usage(&self) -> Result<Vec<VoucherUsage>, RepositoryError> {
        let docs: Vec<Document> = self
            .db
            .collection::<Document>(SINGLE_PAYMENTS)
            .aggregate(voucher_usage_pipeline())
            .await
            .map_err(RepositoryError::from)?
            .try_collect()
            .await
            .map_err(|e| {
                error!("❌ Failed to aggregate voucher usage: {e:?}");
                RepositoryError::from(e)
            })?;

        docs.into_iter()
            .map(|doc| {
                from_document::<VoucherUsageDocument>(doc)
                    .map(VoucherUsage::from)
                    .map_err(RepositoryError::from)
            })
            .collect()
    }
}
