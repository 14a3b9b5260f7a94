//! Group row model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A journal group as stored in the groups table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Group {
    /// Primary key; stored as BIGINT
    #[sqlx(try_from = "i64")]
    pub id: u64,
    pub name: String,
    pub owner: String,
    pub default_group: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Group {
    /// Group stamped with the current time, as the storage layer would create it
    pub fn new(id: u64, name: impl Into<String>, owner: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            owner: owner.into(),
            default_group: false,
            created_at: now,
            updated_at: now,
        }
    }
}
