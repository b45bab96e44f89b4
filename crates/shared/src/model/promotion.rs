use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromotionType {
    Discount,
    Financing,
}

impl PromotionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromotionType::Discount => "discount",
            PromotionType::Financing => "financing",
        }
    }

    /// Table (or collection) holding promotions of this type.
    pub fn storage_name(&self) -> &'static str {
        match self {
            PromotionType::Discount => "discounts",
            PromotionType::Financing => "financings",
        }
    }
}

impl fmt::Display for PromotionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PromotionBase {
    pub code: String,
    pub promotion_title: String,
    pub name_store: String,
    pub cuit_store: String,
    pub validity_start_date: DateTime<Utc>,
    pub validity_end_date: DateTime<Utc>,
    pub comments: String,
    pub bank_cuit: String,
    pub is_deleted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiscountTerms {
    pub discount_percentage: f64,
    pub price_cap: Option<f64>,
    pub only_cash: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancingTerms {
    pub number_of_quotas: i32,
    pub interest: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum PromotionKind {
    Discount(DiscountTerms),
    Financing(FinancingTerms),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PromotionModel {
    pub base: PromotionBase,
    pub kind: PromotionKind,
}

impl PromotionModel {
    pub fn promotion_type(&self) -> PromotionType {
        match self.kind {
            PromotionKind::Discount(_) => PromotionType::Discount,
            PromotionKind::Financing(_) => PromotionType::Financing,
        }
    }

    pub fn code(&self) -> &str {
        &self.base.code
    }

    /// Whether the validity interval shares at least one instant with `[start, end]`.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.base.validity_start_date <= end && self.base.validity_end_date >= start
    }
}

/// Financing promotion as submitted by a bank, before it is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFinancingPromotion {
    pub code: String,
    pub promotion_title: String,
    pub name_store: String,
    pub cuit_store: String,
    pub validity_start_date: DateTime<Utc>,
    pub validity_end_date: DateTime<Utc>,
    pub comments: String,
    pub number_of_quotas: i32,
    pub interest: f64,
}

impl NewFinancingPromotion {
    pub fn into_model(self, bank_cuit: &str) -> PromotionModel {
        PromotionModel {
            base: PromotionBase {
                code: self.code,
                promotion_title: self.promotion_title,
                name_store: self.name_store,
                cuit_store: self.cuit_store,
                validity_start_date: self.validity_start_date,
                validity_end_date: self.validity_end_date,
                comments: self.comments,
                bank_cuit: bank_cuit.to_string(),
                is_deleted: false,
            },
            kind: PromotionKind::Financing(FinancingTerms {
                number_of_quotas: self.number_of_quotas,
                interest: self.interest,
            }),
        }
    }
}
