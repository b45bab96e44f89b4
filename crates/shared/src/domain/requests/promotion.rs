use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExtendValidityRequest {
    pub new_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct AvailablePromotionsRequest {
    #[validate(length(min = 1, message = "Store cuit is required"))]
    pub cuit: String,

    /// First day of the queried range, `YYYY-MM-DD`.
    pub start_date: NaiveDate,

    /// Last day of the queried range (inclusive), `YYYY-MM-DD`.
    pub end_date: NaiveDate,
}
