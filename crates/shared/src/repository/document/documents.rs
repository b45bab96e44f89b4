use crate::{
    errors::RepositoryError,
    model::{
        bank::{BankCustomerCount, BankModel},
        card::{CardDue, CardModel, CardPurchaseCount},
        payment_summary::PaymentSummaryModel,
        promotion::{
            DiscountTerms, FinancingTerms, PromotionBase, PromotionKind, PromotionModel,
            PromotionType,
        },
        purchase::{MonthlyPaymentModel, PurchaseBase, QuotaModel, SinglePaymentModel, VoucherUsage},
        store::StoreRevenue,
    },
};
use mongodb::bson::DateTime as BsonDateTime;
use serde::{Deserialize, Serialize};

pub const BANKS: &str = "banks";
pub const CUSTOMERS: &str = "customers";
pub const CARDS: &str = "cards";
pub const SINGLE_PAYMENTS: &str = "purchase_single_payments";
pub const MONTHLY_PAYMENTS: &str = "purchase_monthly_payments";
pub const PAYMENT_SUMMARIES: &str = "payment_summaries";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankDocument {
    pub cuit: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub telephone: String,
}

impl From<BankDocument> for BankModel {
    fn from(doc: BankDocument) -> Self {
        BankModel {
            cuit: doc.cuit,
            name: doc.name,
            address: doc.address,
            telephone: doc.telephone,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardDocument {
    pub number: String,
    pub ccv: String,
    pub cardholder_name_in_card: String,
    pub since: BsonDateTime,
    pub expiration_date: BsonDateTime,
    pub bank_cuit: String,
    pub customer_cuit: String,
}

impl From<CardDocument> for CardModel {
    fn from(doc: CardDocument) -> Self {
        CardModel {
            number: doc.number,
            ccv: doc.ccv,
            cardholder_name_in_card: doc.cardholder_name_in_card,
            since: doc.since.to_chrono(),
            expiration_date: doc.expiration_date.to_chrono(),
            bank_cuit: doc.bank_cuit,
            customer_cuit: doc.customer_cuit,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SinglePaymentDocument {
    pub payment_voucher: String,
    pub store: String,
    pub cuit_store: String,
    pub amount: f64,
    pub final_amount: f64,
    #[serde(default)]
    pub store_discount: f64,
    pub card_number: String,
    pub created_at: BsonDateTime,
}

impl From<SinglePaymentDocument> for SinglePaymentModel {
    fn from(doc: SinglePaymentDocument) -> Self {
        SinglePaymentModel {
            base: PurchaseBase {
                payment_voucher: doc.payment_voucher,
                store: doc.store,
                cuit_store: doc.cuit_store,
                amount: doc.amount,
                final_amount: doc.final_amount,
                card_number: doc.card_number,
                created_at: doc.created_at.to_chrono(),
            },
            store_discount: doc.store_discount,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotaDocument {
    pub number: i32,
    pub price: f64,
    pub month: i32,
    pub year: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyPaymentDocument {
    pub payment_voucher: String,
    pub store: String,
    pub cuit_store: String,
    pub amount: f64,
    pub final_amount: f64,
    #[serde(default)]
    pub interest: f64,
    pub number_of_quotas: i32,
    pub card_number: String,
    pub created_at: BsonDateTime,
    #[serde(default)]
    pub quotas: Vec<QuotaDocument>,
}

impl From<MonthlyPaymentDocument> for MonthlyPaymentModel {
    fn from(doc: MonthlyPaymentDocument) -> Self {
        let mut quotas: Vec<QuotaModel> = doc
            .quotas
            .into_iter()
            .map(|q| QuotaModel {
                number: q.number,
                price: q.price,
                month: q.month,
                year: q.year,
            })
            .collect();
        quotas.sort_by_key(|q| q.number);

        MonthlyPaymentModel {
            base: PurchaseBase {
                payment_voucher: doc.payment_voucher,
                store: doc.store,
                cuit_store: doc.cuit_store,
                amount: doc.amount,
                final_amount: doc.final_amount,
                card_number: doc.card_number,
                created_at: doc.created_at.to_chrono(),
            },
            interest: doc.interest,
            number_of_quotas: doc.number_of_quotas,
            quotas,
        }
    }
}

/// Stored shape shared by the `discounts` and `financings` collections.
/// Variant fields absent from the other collection stay `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromotionDocument {
    pub code: String,
    pub promotion_title: String,
    pub name_store: String,
    pub cuit_store: String,
    pub validity_start_date: BsonDateTime,
    pub validity_end_date: BsonDateTime,
    #[serde(default)]
    pub comments: String,
    pub bank_cuit: String,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_cap: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub only_cash: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_quotas: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest: Option<f64>,
}

impl PromotionDocument {
    pub fn from_model(model: &PromotionModel) -> Self {
        let base = &model.base;
        let mut doc = PromotionDocument {
            code: base.code.clone(),
            promotion_title: base.promotion_title.clone(),
            name_store: base.name_store.clone(),
            cuit_store: base.cuit_store.clone(),
            validity_start_date: BsonDateTime::from_chrono(base.validity_start_date),
            validity_end_date: BsonDateTime::from_chrono(base.validity_end_date),
            comments: base.comments.clone(),
            bank_cuit: base.bank_cuit.clone(),
            is_deleted: base.is_deleted,
            discount_percentage: None,
            price_cap: None,
            only_cash: None,
            number_of_quotas: None,
            interest: None,
        };

        match &model.kind {
            PromotionKind::Discount(terms) => {
                doc.discount_percentage = Some(terms.discount_percentage);
                doc.price_cap = terms.price_cap;
                doc.only_cash = Some(terms.only_cash);
            }
            PromotionKind::Financing(terms) => {
                doc.number_of_quotas = Some(terms.number_of_quotas);
                doc.interest = Some(terms.interest);
            }
        }

        doc
    }

    /// `kind` is the collection the document was read from.
    pub fn into_model(self, kind: PromotionType) -> Result<PromotionModel, RepositoryError> {
        let missing = |field: &str| {
            RepositoryError::Decode(format!("{kind} {} has no {field}", self.code))
        };

        let terms = match kind {
            PromotionType::Discount => PromotionKind::Discount(DiscountTerms {
                discount_percentage: self
                    .discount_percentage
                    .ok_or_else(|| missing("discount_percentage"))?,
                price_cap: self.price_cap,
                only_cash: self.only_cash.unwrap_or(false),
            }),
            PromotionType::Financing => PromotionKind::Financing(FinancingTerms {
                number_of_quotas: self
                    .number_of_quotas
                    .ok_or_else(|| missing("number_of_quotas"))?,
                interest: self.interest.ok_or_else(|| missing("interest"))?,
            }),
        };

        Ok(PromotionModel {
            base: PromotionBase {
                code: self.code,
                promotion_title: self.promotion_title,
                name_store: self.name_store,
                cuit_store: self.cuit_store,
                validity_start_date: self.validity_start_date.to_chrono(),
                validity_end_date: self.validity_end_date.to_chrono(),
                comments: self.comments,
                bank_cuit: self.bank_cuit,
                is_deleted: self.is_deleted,
            },
            kind: terms,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentSummaryDocument {
    pub code: String,
    pub card_number: String,
    pub month: i32,
    pub year: i32,
    pub first_expiration: BsonDateTime,
    pub second_expiration: BsonDateTime,
    pub surcharge_percentage: f64,
    pub total_price: f64,
}

impl From<&PaymentSummaryModel> for PaymentSummaryDocument {
    fn from(summary: &PaymentSummaryModel) -> Self {
        PaymentSummaryDocument {
            code: summary.code.clone(),
            card_number: summary.card_number.clone(),
            month: summary.month as i32,
            year: summary.year,
            first_expiration: BsonDateTime::from_chrono(summary.first_expiration),
            second_expiration: BsonDateTime::from_chrono(summary.second_expiration),
            surcharge_percentage: summary.surcharge_percentage,
            total_price: summary.total_price,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CardDueDocument {
    pub card: CardDocument,
    pub first_expiration: BsonDateTime,
}

impl From<CardDueDocument> for CardDue {
    fn from(doc: CardDueDocument) -> Self {
        CardDue {
            card: doc.card.into(),
            first_expiration: doc.first_expiration.to_chrono(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CardCountDocument {
    pub card: CardDocument,
    pub single_count: i64,
    pub monthly_count: i64,
}

impl From<CardCountDocument> for CardPurchaseCount {
    fn from(doc: CardCountDocument) -> Self {
        CardPurchaseCount {
            card: doc.card.into(),
            single_count: doc.single_count,
            monthly_count: doc.monthly_count,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct VoucherUsageDocument {
    pub payment_voucher: String,
    pub single_count: i64,
    pub monthly_count: i64,
}

impl From<VoucherUsageDocument> for VoucherUsage {
    fn from(doc: VoucherUsageDocument) -> Self {
        VoucherUsage {
            payment_voucher: doc.payment_voucher,
            single_count: doc.single_count,
            monthly_count: doc.monthly_count,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StoreRevenueDocument {
    pub store: String,
    pub cuit_store: String,
    pub single_total: f64,
    pub monthly_total: f64,
}

impl From<StoreRevenueDocument> for StoreRevenue {
    fn from(doc: StoreRevenueDocument) -> Self {
        StoreRevenue {
            store: doc.store,
            cuit_store: doc.cuit_store,
            single_total: doc.single_total,
            monthly_total: doc.monthly_total,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BankCustomerCountDocument {
    pub bank_cuit: String,
    pub bank_name: String,
    pub customer_count: i64,
}

impl From<BankCustomerCountDocument> for BankCustomerCount {
    fn from(doc: BankCustomerCountDocument) -> Self {
        BankCustomerCount {
            bank_cuit: doc.bank_cuit,
            bank_name: doc.bank_name,
            customer_count: doc.customer_count,
        }
    }
}
