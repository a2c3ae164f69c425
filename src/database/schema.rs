use sqlx::PgPool;

use crate::database::manager::DatabaseError;

const CREATE_USERS: &str = "
CREATE TABLE IF NOT EXISTS users (
    id BIGSERIAL PRIMARY KEY,
    username TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
)";

const CREATE_ITEMS: &str = "
CREATE TABLE IF NOT EXISTS items (
    id BIGSERIAL PRIMARY KEY,
    user_id BIGINT NOT NULL REFERENCES users (id) ON DELETE CASCADE,
    data TEXT NOT NULL,
    created_at TIMESTAMPTZ,
    updated_at TIMESTAMPTZ
)";

const CREATE_ITEMS_OWNER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_items_user_id ON items (user_id)";

/// Create the application tables if they do not exist. The schema is small
/// enough to be declared in place; there is no migration engine.
pub async fn create_schema(pool: &PgPool) -> Result<(), DatabaseError> {
    sqlx::query(CREATE_USERS).execute(pool).await?;
    sqlx::query(CREATE_ITEMS).execute(pool).await?;
    sqlx::query(CREATE_ITEMS_OWNER_INDEX).execute(pool).await?;

    Ok(())
}
