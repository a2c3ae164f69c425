use std::collections::HashMap;

use axum::{
    extract::{Extension, Path, Query},
    response::IntoResponse,
    Json,
};
use serde_json::{json, Map, Value};
use sqlx::PgPool;

use crate::database::manager::DatabaseManager;
use crate::database::models::user::User;
use crate::database::service;
use crate::database::store::PgItemStore;
use crate::database::unit_of_work::UnitOfWork;
use crate::error::ApiError;
use crate::items::manager::ItemManager;
use crate::items::normalizer;
use crate::items::request::ItemRequest;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::ApiResponse;

/// GET /api/item - List the caller's items
pub async fn list(Extension(auth): Extension<AuthUser>) -> Result<impl IntoResponse, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let user = current_user(&pool, &auth).await?;

    let manager = ItemManager::new(PgItemStore::new(pool));
    let records = manager.list(&user).await?;

    Ok(ApiResponse::success(records))
}

/// POST /api/item - Create an item from loose request parameters
pub async fn create(
    Extension(auth): Extension<AuthUser>,
    Query(query): Query<HashMap<String, String>>,
    body: Option<Json<Value>>,
) -> Result<impl IntoResponse, ApiError> {
    let request = request_from_parts(query, None, body);

    let pool = DatabaseManager::pool().await?;
    let user = current_user(&pool, &auth).await?;

    let manager = ItemManager::new(PgItemStore::new(pool.clone()));
    let mut uow = UnitOfWork::new();
    manager.create(&user, &request, &mut uow).await?;
    uow.commit(&pool).await?;

    Ok(ApiResponse::success(json!([])))
}

/// PUT /api/item - Rewrite an item's data
pub async fn update(
    Extension(auth): Extension<AuthUser>,
    Query(query): Query<HashMap<String, String>>,
    body: Option<Json<Value>>,
) -> Result<impl IntoResponse, ApiError> {
    let request = request_from_parts(query, None, body);

    let pool = DatabaseManager::pool().await?;
    let user = current_user(&pool, &auth).await?;

    let manager = ItemManager::new(PgItemStore::new(pool.clone()));
    let mut uow = UnitOfWork::new();
    manager.update(&user, &request, &mut uow).await?;
    uow.commit(&pool).await?;

    Ok(ApiResponse::success(json!([])))
}

/// DELETE /api/item/:id - Remove an item
pub async fn delete(
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, ApiError> {
    let request = request_from_parts(query, Some(id), None);

    let pool = DatabaseManager::pool().await?;
    let user = current_user(&pool, &auth).await?;

    let manager = ItemManager::new(PgItemStore::new(pool.clone()));
    let mut uow = UnitOfWork::new();
    manager.delete(&user, &request, &mut uow).await?;
    uow.commit(&pool).await?;

    Ok(ApiResponse::success(json!([])))
}

/// Merge the query string, JSON body and path id into the loose parameter
/// map the normalizer reads. Body keys win over the query string; the path
/// id, when present, wins over both. Malformed values survive the merge and
/// are the normalizer's problem.
fn request_from_parts(
    query: HashMap<String, String>,
    path_id: Option<String>,
    body: Option<Json<Value>>,
) -> ItemRequest {
    let mut params = Map::new();

    for (key, value) in query {
        params.insert(key, Value::String(value));
    }

    if let Some(Json(Value::Object(fields))) = body {
        for (key, value) in fields {
            params.insert(key, value);
        }
    }

    if let Some(id) = path_id {
        params.insert("id".to_string(), Value::String(id));
    }

    normalizer::item_request_from_params(&params)
}

/// Re-load the authenticated user. A syntactically valid token whose user is
/// gone is still a 401.
async fn current_user(pool: &PgPool, auth: &AuthUser) -> Result<User, ApiError> {
    service::find_user_by_id(pool, auth.user_id)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Unknown user"))
}
