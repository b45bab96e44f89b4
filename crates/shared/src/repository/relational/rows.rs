use crate::{
    errors::RepositoryError,
    model::{
        card::{CardDue, CardModel, CardPurchaseCount},
        promotion::{DiscountTerms, FinancingTerms, PromotionBase, PromotionKind, PromotionModel},
        purchase::{MonthlyPaymentModel, PurchaseBase, QuotaModel, SinglePaymentModel},
    },
};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct SinglePaymentRow {
    pub payment_voucher: String,
    pub store: String,
    pub cuit_store: String,
    pub amount: f64,
    pub final_amount: f64,
    pub store_discount: f64,
    pub card_number: String,
    pub created_at: DateTime<Utc>,
}

impl From<SinglePaymentRow> for SinglePaymentModel {
    fn from(row: SinglePaymentRow) -> Self {
        SinglePaymentModel {
            base: PurchaseBase {
                payment_voucher: row.payment_voucher,
                store: row.store,
                cuit_store: row.cuit_store,
                amount: row.amount,
                final_amount: row.final_amount,
                card_number: row.card_number,
                created_at: row.created_at,
            },
            store_discount: row.store_discount,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct MonthlyPaymentRow {
    pub id: i64,
    pub payment_voucher: String,
    pub store: String,
    pub cuit_store: String,
    pub amount: f64,
    pub final_amount: f64,
    pub interest: f64,
    pub number_of_quotas: i32,
    pub card_number: String,
    pub created_at: DateTime<Utc>,
}

impl MonthlyPaymentRow {
    pub fn into_model(self, quotas: Vec<QuotaModel>) -> MonthlyPaymentModel {
        MonthlyPaymentModel {
            base: PurchaseBase {
                payment_voucher: self.payment_voucher,
                store: self.store,
                cuit_store: self.cuit_store,
                amount: self.amount,
                final_amount: self.final_amount,
                card_number: self.card_number,
                created_at: self.created_at,
            },
            interest: self.interest,
            number_of_quotas: self.number_of_quotas,
            quotas,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct QuotaRow {
    pub monthly_payment_id: i64,
    pub number: i32,
    pub price: f64,
    pub month: i32,
    pub year: i32,
}

impl From<QuotaRow> for QuotaModel {
    fn from(row: QuotaRow) -> Self {
        QuotaModel {
            number: row.number,
            price: row.price,
            month: row.month,
            year: row.year,
        }
    }
}

/// Both promotion tables projected onto one shape; columns of the other
/// variant come back as NULL.
#[derive(Debug, FromRow)]
pub struct PromotionRow {
    pub code: String,
    pub promotion_title: String,
    pub name_store: String,
    pub cuit_store: String,
    pub validity_start_date: DateTime<Utc>,
    pub validity_end_date: DateTime<Utc>,
    pub comments: String,
    pub bank_cuit: String,
    pub is_deleted: bool,
    pub kind: String,
    pub discount_percentage: Option<f64>,
    pub price_cap: Option<f64>,
    pub only_cash: Option<bool>,
    pub number_of_quotas: Option<i32>,
    pub interest: Option<f64>,
}

impl TryFrom<PromotionRow> for PromotionModel {
    type Error = RepositoryError;

    fn try_from(row: PromotionRow) -> Result<Self, Self::Error> {
        let missing =
            |column: &str| RepositoryError::Decode(format!("{column} is null for {}", row.code));

        let kind = match row.kind.as_str() {
            "discount" => PromotionKind::Discount(DiscountTerms {
                discount_percentage: row
                    .discount_percentage
                    .ok_or_else(|| missing("discount_percentage"))?,
                price_cap: row.price_cap,
                only_cash: row.only_cash.unwrap_or(false),
            }),
            "financing" => PromotionKind::Financing(FinancingTerms {
                number_of_quotas: row
                    .number_of_quotas
                    .ok_or_else(|| missing("number_of_quotas"))?,
                interest: row.interest.ok_or_else(|| missing("interest"))?,
            }),
            other => {
                return Err(RepositoryError::Decode(format!(
                    "unknown promotion kind {other}"
                )));
            }
        };

        Ok(PromotionModel {
            base: PromotionBase {
                code: row.code,
                promotion_title: row.promotion_title,
                name_store: row.name_store,
                cuit_store: row.cuit_store,
                validity_start_date: row.validity_start_date,
                validity_end_date: row.validity_end_date,
                comments: row.comments,
                bank_cuit: row.bank_cuit,
                is_deleted: row.is_deleted,
            },
            kind,
        })
    }
}

#[derive(Debug, FromRow)]
pub struct CardDueRow {
    #[sqlx(flatten)]
    pub card: CardModel,
    pub first_expiration: DateTime<Utc>,
}

impl From<CardDueRow> for CardDue {
    fn from(row: CardDueRow) -> Self {
        CardDue {
            card: row.card,
            first_expiration: row.first_expiration,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct CardCountRow {
    #[sqlx(flatten)]
    pub card: CardModel,
    pub single_count: i64,
    pub monthly_count: i64,
}

impl From<CardCountRow> for CardPurchaseCount {
    fn from(row: CardCountRow) -> Self {
        CardPurchaseCount {
            card: row.card,
            single_count: row.single_count,
            monthly_count: row.monthly_count,
        }
    }
}
