mod bank;
mod card;
mod context;
pub mod policy;
mod promotion;
mod store;

pub use self::bank::BankService;
pub use self::card::CardService;
pub use self::context::EngineContext;
pub use self::policy::ReportPolicy;
pub use self::promotion::PromotionService;
pub use self::store::StoreService;
