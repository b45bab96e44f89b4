pub mod document;
pub mod relational;

use crate::{
    abstract_trait::{
        bank::repository::DynBankRepository, card::repository::DynCardRepository,
        promotion::repository::DynPromotionRepository, store::repository::DynStoreRepository,
    },
    config::ConnectionPool,
};
use mongodb::Database;
use std::sync::Arc;

/// One backend's implementation of every repository contract.
#[derive(Clone)]
pub struct Repositories {
    pub bank: DynBankRepository,
    pub card: DynCardRepository,
    pub promotion: DynPromotionRepository,
    pub store: DynStoreRepository,
}

impl Repositories {
    pub fn relational(db: ConnectionPool) -> Self {
        Self {
            bank: Arc::new(relational::BankRepository::new(db.clone())) as DynBankRepository,
            card: Arc::new(relational::CardRepository::new(db.clone())) as DynCardRepository,
            promotion: Arc::new(relational::PromotionRepository::new(db.clone()))
                as DynPromotionRepository,
            store: Arc::new(relational::StoreRepository::new(db)) as DynStoreRepository,
        }
    }

    pub fn document(db: Database) -> Self {
        Self {
            bank: Arc::new(document::BankRepository::new(db.clone())) as DynBankRepository,
            card: Arc::new(document::CardRepository::new(db.clone())) as DynCardRepository,
            promotion: Arc::new(document::PromotionRepository::new(db.clone()))
                as DynPromotionRepository,
            store: Arc::new(document::StoreRepository::new(db)) as DynStoreRepository,
        }
    }
}
