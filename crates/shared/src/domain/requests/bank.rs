use crate::model::promotion::NewFinancingPromotion;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_validity_range"))]
pub struct AddFinancingPromotionRequest {
    #[validate(length(min = 1, message = "Bank cuit is required"))]
    pub bank_cuit: String,

    #[validate(length(min = 1, message = "Promotion code is required"))]
    pub code: String,

    #[validate(length(min = 1, message = "Promotion title is required"))]
    pub promotion_title: String,

    #[validate(length(min = 1, message = "Store name is required"))]
    pub name_store: String,

    #[validate(length(min = 1, message = "Store cuit is required"))]
    pub cuit_store: String,

    pub validity_start_date: DateTime<Utc>,

    pub validity_end_date: DateTime<Utc>,

    #[serde(default)]
    pub comments: String,

    #[validate(range(min = 1, message = "Number of quotas must be at least 1"))]
    pub number_of_quotas: i32,

    #[validate(range(min = 0.0, message = "Interest must not be negative"))]
    pub interest: f64,
}

fn validate_validity_range(req: &AddFinancingPromotionRequest) -> Result<(), ValidationError> {
    if req.validity_end_date < req.validity_start_date {
        let mut err = ValidationError::new("validity_range");
        err.message = Some("validity_end_date must not precede validity_start_date".into());
        return Err(err);
    }
    Ok(())
}

impl From<&AddFinancingPromotionRequest> for NewFinancingPromotion {
    fn from(req: &AddFinancingPromotionRequest) -> Self {
        NewFinancingPromotion {
            code: req.code.clone(),
            promotion_title: req.promotion_title.clone(),
            name_store: req.name_store.clone(),
            cuit_store: req.cuit_store.clone(),
            validity_start_date: req.validity_start_date,
            validity_end_date: req.validity_end_date,
            comments: req.comments.clone(),
            number_of_quotas: req.number_of_quotas,
            interest: req.interest,
        }
    }
}
