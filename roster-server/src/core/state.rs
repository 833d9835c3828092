use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::{Config, Result};
use crate::db::DbService;
use crate::services::PhotoStore;

/// Shared state handed to every handler.
///
/// Cloning is cheap: the database handle and the photo store share their
/// inner connections.
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB over RocksDB)
    pub db: Surreal<Db>,
    /// Photo asset storage under the work directory
    pub photos: PhotoStore,
}

impl ServerState {
    /// Build the state a server runs on: lay out the work directory, open
    /// the embedded database at `{work_dir}/database/roster.db`, apply the
    /// schema, and prepare the photo store.
    pub async fn initialize(config: &Config) -> Result<Self> {
        config.ensure_work_dir_structure()?;

        let db_path = config.database_dir().join("roster.db");
        let db_service = DbService::new(&db_path.to_string_lossy()).await?;

        let photos = PhotoStore::new(config.photos_dir(), config.public_base_url.clone());

        Ok(Self {
            config: config.clone(),
            db: db_service.db,
            photos,
        })
    }

    /// Photo store accessor
    pub fn photos(&self) -> &PhotoStore {
        &self.photos
    }
}
