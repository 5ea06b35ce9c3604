//! Authentication routes
//!
//! Provides endpoints for user registration, login, token refresh, and the
//! current user's profile.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::routes::multipart::FormData;
use crate::services::{ProfileService, RegisterInput, UserService};
use crate::state::AppState;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use food_journal_shared::types::{AuthTokens, LoginRequest, UserResponse};
use serde::Deserialize;

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/refresh", post(refresh_token))
        .route("/me", axum::routing::get(me))
}

/// Register a new user
///
/// POST /api/v1/auth/register (multipart/form-data)
///
/// Fields: full_name, email, password, gender; optional `image` file part.
async fn register(
    State(state): State<AppState>,
    multipart: Multipart,
) -> ApiResult<(StatusCode, Json<AuthTokens>)> {
    let mut form = FormData::read(multipart).await?;

    let input = RegisterInput {
        full_name: form.require("full_name")?.to_string(),
        email: form.require("email")?.to_string(),
        password: form.require("password")?.to_string(),
        gender: form.get("gender").unwrap_or_default().to_string(),
        image: form.take_image(),
    };

    let tokens = UserService::register(
        &state.db,
        state.jwt(),
        state.storage(),
        &state.config.storage.user_bucket,
        input,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(tokens)))
}

/// Login with email and password
///
/// POST /api/v1/auth/login
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<AuthTokens>> {
    let tokens = UserService::login(&state.db, state.jwt(), &req.email, &req.password).await?;
    Ok(Json(tokens))
}

/// Refresh token request
#[derive(Debug, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Refresh access token
///
/// POST /api/v1/auth/refresh
async fn refresh_token(
    State(state): State<AppState>,
    Json(req): Json<RefreshTokenRequest>,
) -> ApiResult<Json<AuthTokens>> {
    let tokens = UserService::refresh_token(&state.db, state.jwt(), &req.refresh_token).await?;
    Ok(Json(tokens))
}

/// Get current user profile (requires authentication)
///
/// GET /api/v1/auth/me
async fn me(State(state): State<AppState>, auth_user: AuthUser) -> ApiResult<Json<UserResponse>> {
    let profile = ProfileService::get(&state.db, auth_user.user_id).await?;
    Ok(Json(profile))
}
