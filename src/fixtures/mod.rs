use sqlx::PgPool;

use crate::auth;
use crate::database::manager::DatabaseError;
use crate::database::service;
use crate::database::unit_of_work::{NewItem, UnitOfWork};

pub const USER_ONE_USERNAME: &str = "john";
pub const USER_ONE_PASSWORD: &str = "maxsecure";
pub const USER_TWO_USERNAME: &str = "thom";
pub const USER_TWO_PASSWORD: &str = "superSecure";

pub const ITEM_ONE_FIXTURE_DATA: &str = "item data one from fixtures";
pub const ITEM_TWO_FIXTURE_DATA: &str = "item data two from fixtures";

/// Seed the two well-known users plus john's starter items. Fails if the
/// users already exist; run `purge` first to reload.
pub async fn load(pool: &PgPool) -> Result<(), DatabaseError> {
    let john = service::insert_user(
        pool,
        USER_ONE_USERNAME,
        &auth::hash_password(USER_ONE_PASSWORD),
    )
    .await?;

    service::insert_user(
        pool,
        USER_TWO_USERNAME,
        &auth::hash_password(USER_TWO_PASSWORD),
    )
    .await?;

    let mut uow = UnitOfWork::new();
    uow.stage_insert(NewItem {
        user_id: john.id,
        data: ITEM_ONE_FIXTURE_DATA.to_string(),
    });
    uow.stage_insert(NewItem {
        user_id: john.id,
        data: ITEM_TWO_FIXTURE_DATA.to_string(),
    });
    uow.commit(pool).await?;

    Ok(())
}

/// Remove the fixture users; their items cascade with them.
pub async fn purge(pool: &PgPool) -> Result<(), DatabaseError> {
    sqlx::query("DELETE FROM users WHERE username = ANY($1)")
        .bind(vec![USER_ONE_USERNAME, USER_TWO_USERNAME])
        .execute(pool)
        .await?;

    Ok(())
}
