//! Food entry routes - the dashboard's API surface

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::routes::multipart::FormData;
use crate::services::{AddFoodInput, FoodService, UpdateFoodInput};
use crate::state::AppState;
use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use food_journal_shared::models::MealType;
use food_journal_shared::types::FoodEntryResponse;
use uuid::Uuid;

/// Create food entry routes
pub fn foods_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_foods).post(add_food))
        .route("/:id", get(get_food).put(update_food).delete(delete_food))
}

fn parse_meal(value: &str) -> Result<MealType, ApiError> {
    value.parse().map_err(ApiError::Validation)
}

fn parse_date(value: &str) -> Result<NaiveDate, ApiError> {
    value
        .parse()
        .map_err(|_| ApiError::Validation(format!("Invalid date: {}", value)))
}

/// List the authenticated user's food entries
///
/// GET /api/v1/foods
async fn list_foods(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<FoodEntryResponse>>> {
    let entries = FoodService::list(&state.db, auth.user_id).await?;
    Ok(Json(entries))
}

/// Create a food entry
///
/// POST /api/v1/foods (multipart/form-data)
///
/// Fields: name, meal_type, entry_date (YYYY-MM-DD); optional `image` file
/// part.
async fn add_food(
    State(state): State<AppState>,
    auth: AuthUser,
    multipart: Multipart,
) -> ApiResult<(StatusCode, Json<FoodEntryResponse>)> {
    let mut form = FormData::read(multipart).await?;

    let input = AddFoodInput {
        name: form.require("name")?.to_string(),
        meal_type: parse_meal(form.require("meal_type")?)?,
        entry_date: parse_date(form.require("entry_date")?)?,
        image: form.take_image(),
    };

    let entry = FoodService::add(
        &state.db,
        state.storage(),
        &state.config.storage.food_bucket,
        auth.user_id,
        input,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// Get a single food entry (populates the edit form)
///
/// GET /api/v1/foods/{id}
async fn get_food(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<FoodEntryResponse>> {
    let entry = FoodService::get(&state.db, auth.user_id, id).await?;
    Ok(Json(entry))
}

/// Update a food entry
///
/// PUT /api/v1/foods/{id} (multipart/form-data)
///
/// Absent fields keep their stored values; a staged `image` runs the
/// image-replace workflow.
async fn update_food(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> ApiResult<Json<FoodEntryResponse>> {
    let mut form = FormData::read(multipart).await?;

    let input = UpdateFoodInput {
        name: form.get("name").map(str::to_string),
        meal_type: form.get("meal_type").map(parse_meal).transpose()?,
        entry_date: form.get("entry_date").map(parse_date).transpose()?,
        image: form.take_image(),
    };

    let entry = FoodService::update(
        &state.db,
        state.storage(),
        &state.config.storage.food_bucket,
        auth.user_id,
        id,
        input,
    )
    .await?;

    Ok(Json(entry))
}

/// Delete a food entry and its stored image
///
/// DELETE /api/v1/foods/{id}
async fn delete_food(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    FoodService::delete(
        &state.db,
        state.storage(),
        &state.config.storage.food_bucket,
        auth.user_id,
        id,
    )
    .await?;

    Ok(StatusCode::NO_CONTENT)
}
