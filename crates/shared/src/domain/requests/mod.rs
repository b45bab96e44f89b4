pub mod bank;
pub mod card;
pub mod promotion;
pub mod store;

pub use self::bank::AddFinancingPromotionRequest;
pub use self::card::{ExpiringCardsRequest, PaymentSummaryRequest, PurchaseLookupRequest};
pub use self::promotion::{AvailablePromotionsRequest, ExtendValidityRequest};
pub use self::store::StoreRevenueRequest;
