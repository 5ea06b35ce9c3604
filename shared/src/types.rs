//! API request and response types

use crate::models::MealType;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Authentication tokens response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// User profile response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub gender: String,
    /// Empty string when the user has no profile image
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Food entry response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodEntryResponse {
    pub id: String,
    pub name: String,
    pub meal_type: MealType,
    pub entry_date: NaiveDate,
    /// Empty string when the entry has no image
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn food_entry_response_serializes_meal_lowercase() {
        let response = FoodEntryResponse {
            id: "abc".to_string(),
            name: "Pad Thai".to_string(),
            meal_type: MealType::Lunch,
            entry_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            image_url: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json: serde_json::Value = serde_json::to_value(&response).unwrap();
        assert_eq!(json["meal_type"], "lunch");
        assert_eq!(json["entry_date"], "2025-06-01");
        assert_eq!(json["image_url"], "");
    }
}
