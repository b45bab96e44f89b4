use crate::{
    abstract_trait::bank::repository::BankRepositoryTrait,
    errors::RepositoryError,
    model::{
        bank::{BankCustomerCount, BankModel},
        promotion::{NewFinancingPromotion, PromotionModel, PromotionType},
    },
    repository::document::{
        documents::{BANKS, BankCustomerCountDocument, BankDocument, PromotionDocument},
        pipeline::customer_counts_pipeline,
    },
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{DateTime as BsonDateTime, doc, from_document},
    options::ReturnDocument,
};
use tracing::{error, info};

pub struct BankRepository {
    db: Database,
}

impl BankRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn banks(&self) -> Collection<BankDocument> {
        self.db.collection(BANKS)
    }

    fn promotions(&self, kind: PromotionType) -> Collection<PromotionDocument> {
        self.db.collection(kind.storage_name())
    }

    async fn code_taken(&self, code: &str) -> Result<bool, RepositoryError> {
        for kind in [PromotionType::Discount, PromotionType::Financing] {
            let found = self
                .promotions(kind)
                .find_one(doc! { "code": code })
                .await
                .map_err(|e| {
                    error!("❌ Failed to check {kind} code {code}: {e:?}");
                    RepositoryError::from(e)
                })?;
            if found.is_some() {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

#[async_trait]
impl BankRepositoryTrait for BankRepository {
    async fn find_by_cuit(&self, cuit: &str) -> Result<BankModel, RepositoryError> {
        self.banks()
            .find_one(doc! { "cuit": cuit })
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch bank {cuit}: {e:?}");
                RepositoryError::from(e)
            })?
            .map(BankModel::from)
            .ok_or(RepositoryError::NotFound)
    }

    async fn add_financing_promotion(
        &self,
        bank_cuit: &str,
        promotion: NewFinancingPromotion,
    ) -> Result<PromotionModel, RepositoryError> {
        self.find_by_cuit(bank_cuit).await?;

        if self.code_taken(&promotion.code).await? {
            return Err(RepositoryError::Conflict(format!(
                "promotion code {} already exists",
                promotion.code
            )));
        }

        let model = promotion.into_model(bank_cuit);

        self.promotions(PromotionType::Financing)
            .insert_one(PromotionDocument::from_model(&model))
            .await
            .map_err(|e| {
                error!("❌ Failed to insert financing {}: {e:?}", model.code());
                RepositoryError::from(e)
            })?;

        info!("🏦 Financing {} stored for bank {bank_cuit}", model.code());

        Ok(model)
    }

    async fn update_validity_end(
        &self,
        kind: PromotionType,
        code: &str,
        new_end: DateTime<Utc>,
    ) -> Result<PromotionModel, RepositoryError> {
        self.promotions(kind)
            .find_one_and_update(
                doc! { "code": code },
                doc! { "$set": { "validity_end_date": BsonDateTime::from_chrono(new_end) } },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| {
                error!("❌ Failed to update validity of {kind} {code}: {e:?}");
                RepositoryError::from(e)
            })?
            .ok_or(RepositoryError::NotFound)?
            .into_model(kind)
    }

    async fn soft_delete(&self, kind: PromotionType, code: &str) -> Result<bool, RepositoryError> {
        let before = self
            .promotions(kind)
            .find_one_and_update(
                doc! { "code": code },
                doc! { "$set": { "is_deleted": true } },
            )
            .return_document(ReturnDocument::Before)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete {kind} {code}: {e:?}");
                RepositoryError::from(e)
            })?
            .ok_or(RepositoryError::NotFound)?;

        Ok(!before.is_deleted)
    }

    async fn customer_counts(&self) -> Result<Vec<BankCustomerCount>, RepositoryError> {
        let docs: Vec<_> = self
            .banks()
            .aggregate(customer_counts_pipeline())
            .await
            .map_err(RepositoryError::from)?
            .try_collect()
            .await
            .map_err(|e| {
                error!("❌ Failed to count bank customers: {e:?}");
                RepositoryError::from(e)
            })?;

        docs.into_iter()
            .map(|doc| {
                from_document::<BankCustomerCountDocument>(doc)
                    .map(BankCustomerCount::from)
                    .map_err(RepositoryError::from)
            })
            .collect()
    }
}
