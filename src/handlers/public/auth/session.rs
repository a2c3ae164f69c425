use axum::{response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;

use crate::auth::{self, Claims};
use crate::config;
use crate::database::manager::DatabaseManager;
use crate::database::service;
use crate::error::ApiError;
use crate::middleware::response::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// POST /auth/register - Create a user account
///
/// Expected Input:
/// ```json
/// {
///   "username": "string",    // Required: unique username
///   "password": "string"     // Required
/// }
/// ```
pub async fn register(
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let username = payload.username.trim();

    if username.is_empty() || payload.password.is_empty() {
        return Err(ApiError::bad_request("username and password are required"));
    }

    let pool = DatabaseManager::pool().await?;

    if service::find_user_by_username(&pool, username).await?.is_some() {
        return Err(ApiError::conflict("Username already taken"));
    }

    let user =
        service::insert_user(&pool, username, &auth::hash_password(&payload.password)).await?;

    tracing::info!("Registered user {}", user.username);

    Ok(ApiResponse::created(json!({
        "id": user.id,
        "username": user.username,
        "created_at": user.created_at,
    })))
}

/// POST /auth/login - Authenticate and receive a JWT token
///
/// Expected Input:
/// ```json
/// {
///   "username": "string",    // Required
///   "password": "string"     // Required
/// }
/// ```
///
/// Expected Output (Success):
/// ```json
/// {
///   "success": true,
///   "data": {
///     "token": "eyJhbGciOiJIUzI1NiI...",
///     "user": { "id": 1, "username": "john" },
///     "expires_in": 3600
///   }
/// }
/// ```
pub async fn login(Json(payload): Json<LoginRequest>) -> Result<impl IntoResponse, ApiError> {
    let pool = DatabaseManager::pool().await?;

    // Unknown username and wrong password answer identically; login must not
    // reveal which usernames exist.
    let user = service::find_user_by_username(&pool, &payload.username)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid credentials"))?;

    if !auth::verify_password(&payload.password, &user.password) {
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let claims = Claims::new(user.id, user.username.clone());
    let token = auth::generate_jwt(&claims).map_err(|e| {
        tracing::error!("JWT generation failed: {}", e);
        ApiError::internal_server_error("Failed to issue token")
    })?;

    let expires_in = config::config().security.jwt_expiry_hours * 3600;

    Ok(ApiResponse::success(json!({
        "token": token,
        "user": {
            "id": user.id,
            "username": user.username,
        },
        "expires_in": expires_in,
    })))
}
