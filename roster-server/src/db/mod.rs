//! Database module
//!
//! Embedded SurrealDB (RocksDB engine) connection and schema.

pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::core::Result;

/// Database service owning the embedded database handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the database at the given path and apply the schema
    pub async fn new(db_path: &str) -> Result<Self> {
        let db = Surreal::new::<RocksDb>(db_path).await?;
        db.use_ns("roster").use_db("roster").await?;

        tracing::info!(path = %db_path, "Database connection established");

        Self::define_schema(&db).await?;

        Ok(Self { db })
    }

    /// Apply the schema
    ///
    /// The member table is schemaless; the unique index on email is the
    /// store-level guarantee that closes the duplicate-registration race.
    async fn define_schema(db: &Surreal<Db>) -> Result<()> {
        db.query("DEFINE TABLE IF NOT EXISTS member SCHEMALESS")
            .await?;
        db.query("DEFINE INDEX IF NOT EXISTS unique_email ON member FIELDS email UNIQUE")
            .await?;

        tracing::info!("Database schema applied");
        Ok(())
    }
}
