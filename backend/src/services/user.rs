//! User service for registration, login, and token refresh
//!
//! Password hashing/verification runs on the blocking thread pool; the JWT
//! service is passed by reference (pre-computed keys).

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::{CreateUser, UserRepository};
use crate::services::image;
use crate::storage::{ImageUpload, NamingScheme, StorageClient};
use food_journal_shared::types::AuthTokens;
use food_journal_shared::validation::{validate_full_name, validate_password};
use sqlx::PgPool;
use uuid::Uuid;
use validator::ValidateEmail;

/// Input collected by the registration form
#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub gender: String,
    pub image: Option<ImageUpload>,
}

/// User service for authentication operations
pub struct UserService;

impl UserService {
    /// Register a new user
    ///
    /// An optional profile image is uploaded before the insert; upload
    /// failure aborts the registration. On success the user is signed in
    /// (a token pair is returned).
    pub async fn register(
        pool: &PgPool,
        jwt_service: &JwtService,
        storage: &StorageClient,
        user_bucket: &str,
        input: RegisterInput,
    ) -> Result<AuthTokens, ApiError> {
        // Validate before any remote call
        if !input.email.validate_email() {
            return Err(ApiError::Validation("Invalid email format".to_string()));
        }
        validate_password(&input.password).map_err(ApiError::Validation)?;
        validate_full_name(&input.full_name).map_err(ApiError::Validation)?;

        // Check if email already exists
        if UserRepository::email_exists(pool, &input.email)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::Conflict("Email already registered".to_string()));
        }

        // Upload the profile image first; empty URL when none was staged
        let image_url = match &input.image {
            Some(upload) => {
                image::upload_image(storage, user_bucket, upload, NamingScheme::TimestampAndName)
                    .await?
            }
            None => String::new(),
        };

        // Hash password on blocking thread pool (CPU-intensive)
        let password_hash = PasswordService::hash_async(input.password)
            .await
            .map_err(ApiError::Internal)?;

        let user = UserRepository::create(
            pool,
            CreateUser {
                full_name: input.full_name,
                email: input.email,
                password_hash,
                gender: input.gender,
                image_url,
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        Self::issue_tokens(jwt_service, user.id)
    }

    /// Login with email and password
    ///
    /// Password verification is offloaded to the blocking thread pool.
    pub async fn login(
        pool: &PgPool,
        jwt_service: &JwtService,
        email: &str,
        password: &str,
    ) -> Result<AuthTokens, ApiError> {
        // Find user by email
        let user = UserRepository::find_by_email(pool, email)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::Unauthorized("Invalid credentials".to_string()))?;

        // Verify password on blocking thread pool (CPU-intensive)
        let valid =
            PasswordService::verify_async(password.to_string(), user.password_hash.clone())
                .await
                .map_err(ApiError::Internal)?;

        if !valid {
            return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
        }

        Self::issue_tokens(jwt_service, user.id)
    }

    /// Refresh access token using refresh token
    pub async fn refresh_token(
        pool: &PgPool,
        jwt_service: &JwtService,
        refresh_token: &str,
    ) -> Result<AuthTokens, ApiError> {
        // Validate refresh token
        let claims = jwt_service
            .validate_refresh_token(refresh_token)
            .map_err(|e| ApiError::Unauthorized(format!("Invalid refresh token: {}", e)))?;

        // Parse user ID
        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| ApiError::Unauthorized("Invalid user ID in token".to_string()))?;

        // Verify user still exists
        let _user = UserRepository::find_by_id(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::Unauthorized("User not found".to_string()))?;

        Self::issue_tokens(jwt_service, user_id)
    }

    /// Generate an access/refresh token pair (uses pre-computed keys)
    fn issue_tokens(jwt_service: &JwtService, user_id: Uuid) -> Result<AuthTokens, ApiError> {
        let access_token = jwt_service
            .generate_access_token(user_id)
            .map_err(ApiError::Internal)?;
        let refresh_token = jwt_service
            .generate_refresh_token(user_id)
            .map_err(ApiError::Internal)?;

        Ok(AuthTokens {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: jwt_service.access_token_expiry_secs(),
        })
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - see backend/tests/
}
