//! Food entry service - the dashboard's data path
//!
//! Create/list/get/update/delete for the authenticated user's food entries,
//! including the image workflow for entries with photos. All operations are
//! owner-scoped by the token-derived user id.

use crate::error::ApiError;
use crate::repositories::{
    CreateFoodEntry, FoodEntryRecord, FoodEntryRepository, UpdateFoodEntry,
};
use crate::services::image;
use crate::storage::{ImageUpload, NamingScheme, StorageClient};
use chrono::NaiveDate;
use food_journal_shared::models::MealType;
use food_journal_shared::types::FoodEntryResponse;
use food_journal_shared::validation::validate_food_name;
use sqlx::PgPool;
use uuid::Uuid;

/// Input collected by the add-food form
#[derive(Debug, Clone)]
pub struct AddFoodInput {
    pub name: String,
    pub meal_type: MealType,
    pub entry_date: NaiveDate,
    pub image: Option<ImageUpload>,
}

/// Input collected by the update-food form
///
/// None fields keep their stored values.
#[derive(Debug, Clone, Default)]
pub struct UpdateFoodInput {
    pub name: Option<String>,
    pub meal_type: Option<MealType>,
    pub entry_date: Option<NaiveDate>,
    pub image: Option<ImageUpload>,
}

/// Food entry service
pub struct FoodService;

impl FoodService {
    /// Create a food entry for a user
    ///
    /// With no staged image the stored URL is the empty string and no
    /// blob-store call occurs. A staged image is uploaded first under a
    /// timestamp-and-filename object name; upload failure aborts the insert.
    pub async fn add(
        pool: &PgPool,
        storage: &StorageClient,
        food_bucket: &str,
        user_id: Uuid,
        input: AddFoodInput,
    ) -> Result<FoodEntryResponse, ApiError> {
        validate_food_name(&input.name).map_err(ApiError::Validation)?;

        let image_url = match &input.image {
            Some(upload) => {
                image::upload_image(storage, food_bucket, upload, NamingScheme::TimestampAndName)
                    .await?
            }
            None => String::new(),
        };

        let entry = FoodEntryRepository::create(
            pool,
            CreateFoodEntry {
                user_id,
                name: input.name,
                meal_type: input.meal_type.as_str().to_string(),
                entry_date: input.entry_date,
                image_url,
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        Self::to_response(entry)
    }

    /// List all entries owned by a user, newest entry date first
    pub async fn list(pool: &PgPool, user_id: Uuid) -> Result<Vec<FoodEntryResponse>, ApiError> {
        let entries = FoodEntryRepository::list_by_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        entries.into_iter().map(Self::to_response).collect()
    }

    /// Get a single entry (populates the edit form)
    pub async fn get(
        pool: &PgPool,
        user_id: Uuid,
        entry_id: Uuid,
    ) -> Result<FoodEntryResponse, ApiError> {
        let entry = FoodEntryRepository::find_by_id_and_user(pool, entry_id, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Food entry not found".to_string()))?;

        Self::to_response(entry)
    }

    /// Update an entry, running the image-replace workflow when a new image
    /// was staged
    ///
    /// The edit screen names replacement objects by timestamp and file
    /// extension only.
    pub async fn update(
        pool: &PgPool,
        storage: &StorageClient,
        food_bucket: &str,
        user_id: Uuid,
        entry_id: Uuid,
        input: UpdateFoodInput,
    ) -> Result<FoodEntryResponse, ApiError> {
        if let Some(name) = &input.name {
            validate_food_name(name).map_err(ApiError::Validation)?;
        }

        let current = FoodEntryRepository::find_by_id_and_user(pool, entry_id, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Food entry not found".to_string()))?;

        let new_image_url = image::replace_image(
            storage,
            food_bucket,
            &current.image_url,
            input.image.as_ref(),
            NamingScheme::TimestampAndExtension,
        )
        .await?;

        let entry = FoodEntryRepository::update(
            pool,
            entry_id,
            user_id,
            UpdateFoodEntry {
                name: input.name,
                meal_type: input.meal_type.map(|m| m.as_str().to_string()),
                entry_date: input.entry_date,
                image_url: new_image_url,
            },
        )
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(|| ApiError::NotFound("Food entry not found".to_string()))?;

        Self::to_response(entry)
    }

    /// Delete an entry and best-effort remove its stored image
    ///
    /// The removal follows the same non-fatal pattern as the replace
    /// workflow: a failed remove is logged and the record delete proceeds.
    pub async fn delete(
        pool: &PgPool,
        storage: &StorageClient,
        food_bucket: &str,
        user_id: Uuid,
        entry_id: Uuid,
    ) -> Result<(), ApiError> {
        let entry = FoodEntryRepository::find_by_id_and_user(pool, entry_id, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Food entry not found".to_string()))?;

        if !entry.image_url.is_empty() {
            image::remove_image_best_effort(storage, food_bucket, &entry.image_url).await;
        }

        let deleted = FoodEntryRepository::delete(pool, entry_id, user_id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Food entry not found".to_string()));
        }

        Ok(())
    }

    fn to_response(entry: FoodEntryRecord) -> Result<FoodEntryResponse, ApiError> {
        // The CHECK constraint pins stored values; a mismatch is corruption
        let meal_type: MealType = entry
            .meal_type
            .parse()
            .map_err(|e: String| ApiError::Internal(anyhow::anyhow!(e)))?;

        Ok(FoodEntryResponse {
            id: entry.id.to_string(),
            name: entry.name,
            meal_type,
            entry_date: entry.entry_date,
            image_url: entry.image_url,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        })
    }
}
