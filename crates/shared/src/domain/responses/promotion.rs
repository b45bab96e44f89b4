use crate::model::{
    promotion::{PromotionKind, PromotionModel, PromotionType},
    purchase::VoucherUsage,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PromotionResponse {
    #[serde(rename = "type")]
    pub promotion_type: String,
    pub code: String,
    pub promotion_title: String,
    pub name_store: String,
    pub cuit_store: String,
    pub validity_start_date: DateTime<Utc>,
    pub validity_end_date: DateTime<Utc>,
    pub comments: String,
    pub bank: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_cap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_cash: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_quotas: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest: Option<f64>,
}

impl From<PromotionModel> for PromotionResponse {
    fn from(value: PromotionModel) -> Self {
        let promotion_type = value.promotion_type().as_str().to_string();
        let base = value.base;

        let mut response = PromotionResponse {
            promotion_type,
            code: base.code,
            promotion_title: base.promotion_title,
            name_store: base.name_store,
            cuit_store: base.cuit_store,
            validity_start_date: base.validity_start_date,
            validity_end_date: base.validity_end_date,
            comments: base.comments,
            bank: base.bank_cuit,
            discount_percentage: None,
            price_cap: None,
            only_cash: None,
            number_of_quotas: None,
            interest: None,
        };

        match value.kind {
            PromotionKind::Discount(terms) => {
                response.discount_percentage = Some(terms.discount_percentage);
                response.price_cap = terms.price_cap;
                response.only_cash = Some(terms.only_cash);
            }
            PromotionKind::Financing(terms) => {
                response.number_of_quotas = Some(terms.number_of_quotas);
                response.interest = Some(terms.interest);
            }
        }

        response
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AvailablePromotionsResponse {
    pub discounts: Vec<PromotionResponse>,
    pub financings: Vec<PromotionResponse>,
}

impl AvailablePromotionsResponse {
    /// Splits candidates into the two variant lists, each ordered by validity start.
    pub fn assemble(mut promotions: Vec<PromotionModel>) -> Self {
        promotions.sort_by(|a, b| {
            a.base
                .validity_start_date
                .cmp(&b.base.validity_start_date)
                .then_with(|| a.base.code.cmp(&b.base.code))
        });

        let mut response = AvailablePromotionsResponse::default();
        for promotion in promotions {
            match promotion.promotion_type() {
                PromotionType::Discount => response.discounts.push(promotion.into()),
                PromotionType::Financing => response.financings.push(promotion.into()),
            }
        }
        response
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MostUsedPromotionResponse {
    pub promotion: PromotionResponse,
    pub single_count: i64,
    pub monthly_count: i64,
}

impl MostUsedPromotionResponse {
    pub fn assemble(promotion: PromotionModel, usage: &VoucherUsage) -> Self {
        MostUsedPromotionResponse {
            promotion: promotion.into(),
            single_count: usage.single_count,
            monthly_count: usage.monthly_count,
        }
    }
}
