//! Profile service - fetch and edit the authenticated user's record

use crate::error::ApiError;
use crate::repositories::{UpdateUserProfile, UserRecord, UserRepository};
use crate::services::image;
use crate::storage::{ImageUpload, NamingScheme, StorageClient};
use food_journal_shared::types::UserResponse;
use food_journal_shared::validation::validate_full_name;
use sqlx::PgPool;
use uuid::Uuid;

/// Input collected by the profile edit form
///
/// None fields keep their stored values.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileInput {
    pub full_name: Option<String>,
    pub gender: Option<String>,
    pub image: Option<ImageUpload>,
}

/// Profile service
pub struct ProfileService;

impl ProfileService {
    /// Get the profile of a user
    pub async fn get(pool: &PgPool, user_id: Uuid) -> Result<UserResponse, ApiError> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        Ok(Self::to_response(user))
    }

    /// Update profile fields, replacing the stored image when a new one
    /// was staged
    ///
    /// The profile screen names replacement objects by timestamp and file
    /// extension only.
    pub async fn update(
        pool: &PgPool,
        storage: &StorageClient,
        user_bucket: &str,
        user_id: Uuid,
        input: UpdateProfileInput,
    ) -> Result<UserResponse, ApiError> {
        if let Some(name) = &input.full_name {
            validate_full_name(name).map_err(ApiError::Validation)?;
        }

        // The stored URL is needed before the image workflow can run
        let current = UserRepository::find_by_id(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        let new_image_url = image::replace_image(
            storage,
            user_bucket,
            &current.image_url,
            input.image.as_ref(),
            NamingScheme::TimestampAndExtension,
        )
        .await?;

        let user = UserRepository::update_profile(
            pool,
            user_id,
            UpdateUserProfile {
                full_name: input.full_name,
                gender: input.gender,
                image_url: new_image_url,
            },
        )
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        Ok(Self::to_response(user))
    }

    fn to_response(user: UserRecord) -> UserResponse {
        UserResponse {
            id: user.id.to_string(),
            full_name: user.full_name,
            email: user.email,
            gender: user.gender,
            image_url: user.image_url,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - see backend/tests/
}
