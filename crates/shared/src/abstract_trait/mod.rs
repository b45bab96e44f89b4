pub mod bank;
pub mod card;
pub mod promotion;
pub mod store;
