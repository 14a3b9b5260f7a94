//! Group repository: primary-key reads against the groups table

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::error::DaoError;
use crate::models::Group;

/// Read access to stored groups
#[async_trait]
pub trait GroupStore: Send + Sync {
    /// First row whose primary key equals `id`, ordered by primary key
    async fn first_by_id(&self, id: u64) -> Result<Option<Group>, DaoError>;
}

#[derive(Clone)]
pub struct GroupRepository {
    pool: PgPool,
    table: String,
    select_by_id: String,
}

impl GroupRepository {
    pub fn new(pool: PgPool) -> Self {
        Self::with_table(pool, "groups")
    }

    /// Read from `table` instead of `groups`.
    ///
    /// The name is interpolated into SQL as a quoted identifier, so callers
    /// must pass a validated name (see `DatabaseConfig::validate`).
    pub fn with_table(pool: PgPool, table: &str) -> Self {
        let select_by_id = format!(
            r#"SELECT id, name, owner, default_group, created_at, updated_at
               FROM "{table}"
               WHERE id = $1
               ORDER BY id
               LIMIT 1"#
        );
        Self {
            pool,
            table: table.to_string(),
            select_by_id,
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Get group by ID
    pub async fn get_group(&self, id: u64) -> Result<Option<Group>, DaoError> {
        // BIGINT keys never exceed i64::MAX, so such an id cannot match a row
        let Ok(key) = i64::try_from(id) else {
            debug!(id, "group id outside BIGINT range, no row can match");
            return Ok(None);
        };

        sqlx::query_as::<_, Group>(&self.select_by_id)
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|source| DaoError::Read {
                entity: "group",
                id,
                source,
            })
    }
}

#[async_trait]
impl GroupStore for GroupRepository {
    async fn first_by_id(&self, id: u64) -> Result<Option<Group>, DaoError> {
        self.get_group(id).await
    }
}
