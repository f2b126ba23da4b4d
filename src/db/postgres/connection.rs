//! PostgreSQL pool management.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::items::PgItemRepository;
use crate::config::Settings;
use crate::db::{Database, DbError, DbResult, Dialect, QueryRegistry};

/// PostgreSQL database implementation.
pub struct PgDatabase {
    pool: PgPool,
    queries: QueryRegistry,
}

impl PgDatabase {
    /// Open a connection pool using the configured credentials.
    ///
    /// The configured database type must select the PostgreSQL dialect; the
    /// Oracle template set resolves fine but only an Oracle-capable executor
    /// can run it, and this binary does not bundle one.
    pub async fn connect(settings: &Settings) -> DbResult<Self> {
        let queries = QueryRegistry::from_settings(settings);
        if queries.dialect() != Dialect::Postgres {
            return Err(DbError::Connection {
                message: format!(
                    "database type '{}' selects the {:?} dialect, which this server cannot execute; set DB_TYPE=postgresql",
                    settings.db_type,
                    queries.dialect()
                ),
            });
        }

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&settings.database_url())
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        Ok(Self { pool, queries })
    }

    /// Wrap an existing pool, e.g. one built by test harnesses.
    pub fn with_pool(pool: PgPool, queries: QueryRegistry) -> Self {
        Self { pool, queries }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl Database for PgDatabase {
    type Items<'a> = PgItemRepository<'a>;

    fn items(&self) -> Self::Items<'_> {
        PgItemRepository {
            pool: &self.pool,
            queries: &self.queries,
        }
    }
}
