use crate::{
    abstract_trait::card::repository::CardRepositoryTrait,
    errors::RepositoryError,
    model::{
        card::{CardDue, CardModel, CardPurchaseCount},
        payment_summary::PaymentSummaryModel,
        purchase::{CardPurchases, MonthlyPaymentModel, SinglePaymentModel},
    },
    repository::document::{
        documents::{
            CARDS, CardCountDocument, CardDocument, CardDueDocument, MONTHLY_PAYMENTS,
            MonthlyPaymentDocument, PAYMENT_SUMMARIES, PaymentSummaryDocument, SINGLE_PAYMENTS,
            SinglePaymentDocument,
        },
        pipeline::{
            card_purchases_filter, cards_due_pipeline, purchase_counts_pipeline,
            purchase_lookup_filter,
        },
    },
    utils::mask_card_number,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Document, doc, from_document},
};
use serde::de::DeserializeOwned;
use tracing::error;

pub struct CardRepository {
    db: Database,
}

impl CardRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn cards(&self) -> Collection<CardDocument> {
        self.db.collection(CARDS)
    }

    fn singles(&self) -> Collection<SinglePaymentDocument> {
        self.db.collection(SINGLE_PAYMENTS)
    }

    fn monthlies(&self) -> Collection<MonthlyPaymentDocument> {
        self.db.collection(MONTHLY_PAYMENTS)
    }

    fn summaries(&self) -> Collection<PaymentSummaryDocument> {
        self.db.collection(PAYMENT_SUMMARIES)
    }

    async fn aggregate_into<T, M>(
        &self,
        collection: &str,
        pipeline: Vec<Document>,
    ) -> Result<Vec<M>, RepositoryError>
    where
        T: DeserializeOwned + Into<M>,
    {
        let docs: Vec<Document> = self
            .db
            .collection::<Document>(collection)
            .aggregate(pipeline)
            .await
            .map_err(RepositoryError::from)?
            .try_collect()
            .await
            .map_err(|e| {
                error!("❌ Aggregation over {collection} failed: {e:?}");
                RepositoryError::from(e)
            })?;

        docs.into_iter()
            .map(|doc| {
                from_document::<T>(doc)
                    .map(Into::into)
                    .map_err(RepositoryError::from)
            })
            .collect()
    }
}

#[async_trait]
impl CardRepositoryTrait for CardRepository {
    async fn find_by_number(&self, number: &str) -> Result<CardModel, RepositoryError> {
        self.cards()
            .find_one(doc! { "number": number })
            .await
            .map_err(|e| {
                error!(
                    "❌ Failed to fetch card {}: {e:?}",
                    mask_card_number(number)
                );
                RepositoryError::from(e)
            })?
            .map(CardModel::from)
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_purchases_between(
        &self,
        number: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<CardPurchases, RepositoryError> {
        let filter = card_purchases_filter(number, start, end);

        let singles: Vec<SinglePaymentDocument> = self
            .singles()
            .find(filter.clone())
            .sort(doc! { "created_at": 1, "_id": 1 })
            .await
            .map_err(RepositoryError::from)?
            .try_collect()
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch single payments: {e:?}");
                RepositoryError::from(e)
            })?;

        let monthlies: Vec<MonthlyPaymentDocument> = self
            .monthlies()
            .find(filter)
            .sort(doc! { "created_at": 1, "_id": 1 })
            .await
            .map_err(RepositoryError::from)?
            .try_collect()
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch monthly payments: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(CardPurchases {
            single_payments: singles.into_iter().map(SinglePaymentModel::from).collect(),
            monthly_payments: monthlies
                .into_iter()
                .map(MonthlyPaymentModel::from)
                .collect(),
        })
    }

    async fn save_payment_summary(
        &self,
        summary: &PaymentSummaryModel,
    ) -> Result<(), RepositoryError> {
        self.summaries()
            .replace_one(
                doc! {
                    "card_number": summary.card_number.as_str(),
                    "code": summary.code.as_str(),
                },
                PaymentSummaryDocument::from(summary),
            )
            .upsert(true)
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
        self.aggregate_into::<CardDueDocument, CardDue>(
            PAYMENT_SUMMARIES,
            cards_due_pipeline(start, end),
        )
        .await
    }

    async fn find_single_purchase(
        &self,
        cuit: &str,
        final_amount: f64,
        voucher: &str,
    ) -> Result<SinglePaymentModel, RepositoryError> {
        self.singles()
            .find_one(purchase_lookup_filter(cuit, final_amount, voucher))
            .sort(doc! { "created_at": 1, "_id": 1 })
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
        self.monthlies()
            .find_one(purchase_lookup_filter(cuit, final_amount, voucher))
            .sort(doc! { "created_at": 1, "_id": 1 })
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch monthly payment {voucher}: {e:?}");
                RepositoryError::from(e)
            })?
            .map(MonthlyPaymentModel::from)
            .ok_or(RepositoryError::NotFound)
    }

    async fn purchase_counts(&self) -> Result<Vec<CardPurchaseCount>, RepositoryError> {
        self.aggregate_into::<CardCountDocument, CardPurchaseCount>(
            CARDS,
            purchase_counts_pipeline(SINGLE_PAYMENTS, MONTHLY_PAYMENTS),
        )
        .await
    }
}
