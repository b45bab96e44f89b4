use shared::{
    abstract_trait::{
        bank::service::DynBankService, card::service::DynCardService,
        promotion::service::DynPromotionService, store::service::DynStoreService,
    },
    config::ConnectionPool,
    repository::Repositories,
    service::{BankService, CardService, EngineContext, PromotionService, StoreService},
};
use mongodb::Database;
use std::sync::Arc;

/// Report services bound to one storage backend.
#[derive(Clone)]
pub struct BackendServices {
    pub bank: DynBankService,
    pub card: DynCardService,
    pub promotion: DynPromotionService,
    pub store: DynStoreService,
}

impl BackendServices {
    pub fn new(repos: Repositories, ctx: EngineContext) -> Self {
        let bank = Arc::new(BankService::new(repos.bank.clone(), ctx.clone())) as DynBankService;
        let card = Arc::new(CardService::new(repos.card, ctx.clone())) as DynCardService;
        let promotion = Arc::new(PromotionService::new(repos.promotion, repos.bank, ctx.clone()))
            as DynPromotionService;
        let store = Arc::new(StoreService::new(repos.store, ctx)) as DynStoreService;

        Self {
            bank,
            card,
            promotion,
            store,
        }
    }
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub sql: BackendServices,
    pub no_sql: BackendServices,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("sql", &"BackendServices(postgres)")
            .field("no_sql", &"BackendServices(mongodb)")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, mongo: Database, ctx: EngineContext) -> Self {
        let sql = BackendServices::new(Repositories::relational(pool), ctx.clone());
        let no_sql = BackendServices::new(Repositories::document(mongo), ctx);

        Self { sql, no_sql }
    }
}
