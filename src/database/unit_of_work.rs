use sqlx::PgPool;

use crate::database::manager::DatabaseError;

/// A pending insert. Id and timestamps are assigned by the database at
/// commit, never by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub user_id: i64,
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StagedChange {
    Insert(NewItem),
    Update { id: i64, data: String },
    Remove { id: i64 },
}

/// Collects staged item changes so the calling layer can flush them once per
/// request, in a single transaction. The manager only stages; committing is
/// the caller's decision.
#[derive(Debug, Default)]
pub struct UnitOfWork {
    staged: Vec<StagedChange>,
}

impl UnitOfWork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage_insert(&mut self, item: NewItem) {
        self.staged.push(StagedChange::Insert(item));
    }

    pub fn stage_update(&mut self, id: i64, data: String) {
        self.staged.push(StagedChange::Update { id, data });
    }

    pub fn stage_remove(&mut self, id: i64) {
        self.staged.push(StagedChange::Remove { id });
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }

    pub fn staged(&self) -> &[StagedChange] {
        &self.staged
    }

    /// Flush every staged change in staging order inside one transaction.
    /// `created_at` is set once on insert; `updated_at` on insert and update
    /// alike. Concurrent writers are serialized by row locks here; the last
    /// committed write wins.
    pub async fn commit(self, pool: &PgPool) -> Result<(), DatabaseError> {
        if self.staged.is_empty() {
            return Ok(());
        }

        let mut tx = pool.begin().await?;

        for change in self.staged {
            match change {
                StagedChange::Insert(item) => {
                    sqlx::query(
                        "INSERT INTO items (user_id, data, created_at, updated_at)
                         VALUES ($1, $2, now(), now())",
                    )
                    .bind(item.user_id)
                    .bind(&item.data)
                    .execute(&mut *tx)
                    .await?;
                }
                StagedChange::Update { id, data } => {
                    sqlx::query("UPDATE items SET data = $2, updated_at = now() WHERE id = $1")
                        .bind(id)
                        .bind(&data)
                        .execute(&mut *tx)
                        .await?;
                }
                StagedChange::Remove { id } => {
                    sqlx::query("DELETE FROM items WHERE id = $1")
                        .bind(id)
                        .execute(&mut *tx)
                        .await?;
                }
            }
        }

        tx.commit().await?;
        Ok(())
    }
}
