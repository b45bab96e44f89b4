pub mod bank;
pub mod card;
pub mod customer;
pub mod payment_summary;
pub mod promotion;
pub mod purchase;
pub mod store;
