//! Food entry repository - database operations for logged meals

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Food entry record from database
///
/// `meal_type` is stored as lowercase text, pinned by a CHECK constraint;
/// conversion to the shared enum happens at the service layer.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FoodEntryRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub meal_type: String,
    pub entry_date: NaiveDate,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a food entry
#[derive(Debug, Clone)]
pub struct CreateFoodEntry {
    pub user_id: Uuid,
    pub name: String,
    pub meal_type: String,
    pub entry_date: NaiveDate,
    pub image_url: String,
}

/// Input for updating a food entry
///
/// None fields keep their stored values.
#[derive(Debug, Clone, Default)]
pub struct UpdateFoodEntry {
    pub name: Option<String>,
    pub meal_type: Option<String>,
    pub entry_date: Option<NaiveDate>,
    pub image_url: Option<String>,
}

/// Food entry repository
pub struct FoodEntryRepository;

impl FoodEntryRepository {
    /// Create a food entry
    pub async fn create(pool: &PgPool, input: CreateFoodEntry) -> Result<FoodEntryRecord> {
        let entry = sqlx::query_as::<_, FoodEntryRecord>(
            r#"
            INSERT INTO food_entries (user_id, name, meal_type, entry_date, image_url)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, name, meal_type, entry_date, image_url,
                      created_at, updated_at
            "#,
        )
        .bind(input.user_id)
        .bind(&input.name)
        .bind(&input.meal_type)
        .bind(input.entry_date)
        .bind(&input.image_url)
        .fetch_one(pool)
        .await?;

        Ok(entry)
    }

    /// Get all entries owned by a user, newest entry date first
    pub async fn list_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<FoodEntryRecord>> {
        let entries = sqlx::query_as::<_, FoodEntryRecord>(
            r#"
            SELECT id, user_id, name, meal_type, entry_date, image_url,
                   created_at, updated_at
            FROM food_entries
            WHERE user_id = $1
            ORDER BY entry_date DESC, created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(entries)
    }

    /// Find an entry by ID and owner (ownership check included)
    pub async fn find_by_id_and_user(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<FoodEntryRecord>> {
        let entry = sqlx::query_as::<_, FoodEntryRecord>(
            r#"
            SELECT id, user_id, name, meal_type, entry_date, image_url,
                   created_at, updated_at
            FROM food_entries
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(entry)
    }

    /// Update an entry owned by a user
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
        updates: UpdateFoodEntry,
    ) -> Result<Option<FoodEntryRecord>> {
        let entry = sqlx::query_as::<_, FoodEntryRecord>(
            r#"
            UPDATE food_entries SET
                name = COALESCE($3, name),
                meal_type = COALESCE($4, meal_type),
                entry_date = COALESCE($5, entry_date),
                image_url = COALESCE($6, image_url),
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, name, meal_type, entry_date, image_url,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(updates.name)
        .bind(updates.meal_type)
        .bind(updates.entry_date)
        .bind(updates.image_url)
        .fetch_optional(pool)
        .await?;

        Ok(entry)
    }

    /// Delete an entry owned by a user
    pub async fn delete(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM food_entries WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - see backend/tests/
}
