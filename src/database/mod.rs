use mongodb::{bson::doc, options::ClientOptions, Client, Collection, Database};

use crate::config::MongoSettings;

/// Process-wide MongoDB handle. Built once in `main` and cloned into the store.
#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    pub async fn connect(settings: &MongoSettings) -> Result<Self, mongodb::error::Error> {
        let client_options = ClientOptions::parse(&settings.uri).await?;
        let client = Client::with_options(client_options)?;
        let db = client.database(&settings.database);

        let mongodb = Self { client, db };

        // Test connection
        mongodb.ping().await?;

        Ok(mongodb)
    }

    pub async fn ping(&self) -> Result<(), mongodb::error::Error> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    /// Closes pooled connections. Call once the HTTP server has stopped.
    pub async fn shutdown(self) {
        log::info!("🔌 Closing MongoDB connections...");
        self.client.shutdown().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_mongodb_connection() {
        dotenv::dotenv().ok();

        let settings = Settings::from_env().unwrap();
        let db = MongoDB::connect(&settings.mongo).await.unwrap();

        assert_eq!(db.db.name(), settings.mongo.database);
        db.shutdown().await;
    }
}
