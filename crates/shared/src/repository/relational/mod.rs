mod bank;
mod card;
mod promotion;
mod rows;
mod sql;
mod store;

pub use self::bank::BankRepository;
pub use self::card::CardRepository;
pub use self::promotion::PromotionRepository;
pub use self::store::StoreRepository;
