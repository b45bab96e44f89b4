use anyhow::{Context, Result};
use mongodb::{
    Client, Database, IndexModel,
    bson::{Document, doc},
    options::IndexOptions,
};
use tracing::info;

pub struct MongoConnection;

impl MongoConnection {
    pub async fn connect(uri: &str, database: &str) -> Result<Database> {
        let client = Client::with_uri_str(uri)
            .await
            .context("Failed to create document store client")?;

        let db = client.database(database);

        db.run_command(doc! { "ping": 1 })
            .await
            .context("Document store did not answer ping")?;

        Self::ensure_indexes(&db).await?;

        info!("✅ Document store connected: {database}");

        Ok(db)
    }

    async fn ensure_indexes(db: &Database) -> Result<()> {
        let unique = |keys: Document| {
            IndexModel::builder()
                .keys(keys)
                .options(IndexOptions::builder().unique(true).build())
                .build()
        };

        db.collection::<Document>("banks")
            .create_index(unique(doc! { "cuit": 1 }))
            .await
            .context("Failed to index banks")?;
        db.collection::<Document>("cards")
            .create_index(unique(doc! { "number": 1 }))
            .await
            .context("Failed to index cards")?;
        for collection in ["discounts", "financings"] {
            db.collection::<Document>(collection)
                .create_index(unique(doc! { "code": 1 }))
                .await
                .with_context(|| format!("Failed to index {collection}"))?;
        }
        db.collection::<Document>("payment_summaries")
            .create_index(unique(doc! { "card_number": 1, "code": 1 }))
            .await
            .context("Failed to index payment_summaries")?;

        Ok(())
    }
}
