use std::time::Duration;

use anyhow::{Context, Result};
use log::{debug, info};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema};

use crate::config::DatabaseConfig;
use crate::constants::MEMORY_DATABASE_URL;
use crate::entities::{customer, flight, mission, module};

/// Database handle for mission data
#[derive(Clone)]
pub struct Storage {
    pub conn: DatabaseConnection,
}

impl Storage {
    /// Connect using the given settings and create any missing tables
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let mut options = ConnectOptions::new(config.url.clone());
        options
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .sqlx_logging(config.sqlx_logging);

        let conn = Database::connect(options)
            .await
            .with_context(|| format!("Failed to connect to database: {}", config.url))?;
        info!("Connected to database {}", config.url);

        let storage = Storage { conn };
        storage.init_schema().await?;
        Ok(storage)
    }

    /// Private in-memory `SQLite` database, used by tests and dry runs
    pub async fn in_memory() -> Result<Self> {
        // A single pooled connection: every new in-memory connection is a new database
        let config = DatabaseConfig {
            url: MEMORY_DATABASE_URL.to_string(),
            max_connections: 1,
            min_connections: 1,
            ..DatabaseConfig::default()
        };
        Self::connect(&config).await
    }

    /// Create the mission tables if they do not exist yet
    pub async fn init_schema(&self) -> Result<()> {
        let schema = Schema::new(self.conn.get_database_backend());

        // Referenced tables first
        self.create_table(&schema, customer::Entity).await?;
        self.create_table(&schema, module::Entity).await?;
        self.create_table(&schema, mission::Entity).await?;
        self.create_table(&schema, flight::Entity).await?;

        Ok(())
    }

    async fn create_table<E>(&self, schema: &Schema, entity: E) -> Result<()>
    where
        E: EntityTrait,
    {
        let table = entity.table_name().to_string();
        let mut statement = schema.create_table_from_entity(entity);
        statement.if_not_exists();

        let backend = self.conn.get_database_backend();
        self.conn
            .execute(backend.build(&statement))
            .await
            .with_context(|| format!("Failed to create table {}", table))?;
        debug!("Ensured table {}", table);
        Ok(())
    }
}
