//! User profile routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::routes::multipart::FormData;
use crate::services::{ProfileService, UpdateProfileInput};
use crate::state::AppState;
use axum::{
    extract::{Multipart, State},
    routing::get,
    Json, Router,
};
use food_journal_shared::types::UserResponse;

/// Create profile routes
pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/", get(get_profile).put(update_profile))
}

/// GET /api/v1/profile - Get the authenticated user's profile
async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserResponse>> {
    let profile = ProfileService::get(&state.db, auth.user_id).await?;
    Ok(Json(profile))
}

/// PUT /api/v1/profile - Update the authenticated user's profile
///
/// (multipart/form-data) Optional fields: full_name, gender; optional
/// `image` file part runs the image-replace workflow.
async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    multipart: Multipart,
) -> ApiResult<Json<UserResponse>> {
    let mut form = FormData::read(multipart).await?;

    let input = UpdateProfileInput {
        full_name: form.get("full_name").map(str::to_string),
        gender: form.get("gender").map(str::to_string),
        image: form.take_image(),
    };

    let profile = ProfileService::update(
        &state.db,
        state.storage(),
        &state.config.storage.user_bucket,
        auth.user_id,
        input,
    )
    .await?;

    Ok(Json(profile))
}

#[cfg(test)]
mod tests {
    // Covered by the integration suite
}
