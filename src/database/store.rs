use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::item::Item;

/// Read contract over persisted items. Absence is `None`/empty, never an
/// error; only genuine store faults surface as `DatabaseError`.
#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn find_one_by_id(&self, id: i64) -> Result<Option<Item>, DatabaseError>;
    async fn find_by_owner(&self, user_id: i64) -> Result<Vec<Item>, DatabaseError>;
}

pub struct PgItemStore {
    pool: PgPool,
}

impl PgItemStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemStore for PgItemStore {
    async fn find_one_by_id(&self, id: i64) -> Result<Option<Item>, DatabaseError> {
        let item = sqlx::query_as::<_, Item>(
            "SELECT id, user_id, data, created_at, updated_at
             FROM items
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    async fn find_by_owner(&self, user_id: i64) -> Result<Vec<Item>, DatabaseError> {
        let items = sqlx::query_as::<_, Item>(
            "SELECT id, user_id, data, created_at, updated_at
             FROM items
             WHERE user_id = $1
             ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }
}
