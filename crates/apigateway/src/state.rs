use crate::di::DependenciesInject;
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::{
    config::{Config, ConnectionManager, MongoConnection},
    service::{EngineContext, ReportPolicy},
    utils::Metrics,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Registry>,
}

impl AppState {
    pub async fn new(config: &Config, cancel: CancellationToken) -> Result<Self> {
        let pool = ConnectionManager::new_pool(&config.database_url, config.run_migrations)
            .await
            .context("Failed to initialize relational pool")?;

        let mongo = MongoConnection::connect(&config.mongo_uri, &config.mongo_database)
            .await
            .context("Failed to initialize document store")?;

        let mut registry = Registry::default();
        let metrics = Metrics::new();
        metrics.register(&mut registry);

        let ctx = EngineContext::new(
            ReportPolicy::with_surcharge(config.surcharge_percentage),
            cancel,
            config.store_timeout,
        )
        .with_metrics(metrics);

        let di_container = DependenciesInject::new(pool, mongo, ctx);

        Ok(Self {
            di_container,
            registry: Arc::new(registry),
        })
    }
}
