use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::SpeechQuery;
use crate::models::SpeechRecord;
use crate::Result;

mod schema;
mod speeches;

/// The opaque query capability the analytics engine depends on.
///
/// Implementations must return records ordered by timestamp as requested and
/// with `user_name` / `meeting_title` already joined in.
#[async_trait]
pub trait SpeechStore: Send + Sync {
    async fn list_speeches(&self, query: &SpeechQuery) -> Result<Vec<SpeechRecord>>;
}

/// Database connection pool wrapper
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new database instance from configuration
    pub async fn from_config(config: &crate::config::AppConfig) -> Result<Self> {
        let pool_options = sqlx::postgres::PgPoolOptions::new()
            .max_connections(config.max_connections())
            .min_connections(config.min_connections())
            .acquire_timeout(std::time::Duration::from_secs(config.connection_timeout()));

        let pool = pool_options.connect(config.database_url()).await?;

        tracing::info!(
            "Database pool configured: max_connections={}, min_connections={}",
            config.max_connections(),
            config.min_connections()
        );

        Ok(Self::new(pool))
    }

    /// Apply the speeches schema if it is not present yet
    pub async fn migrate(&self) -> Result<()> {
        schema::apply(&self.pool).await
    }

    /// Get a reference to the database pool for raw queries
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl SpeechStore for Database {
    async fn list_speeches(&self, query: &SpeechQuery) -> Result<Vec<SpeechRecord>> {
        self.query_speeches(query).await
    }
}
