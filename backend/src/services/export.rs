//! Data export service - food log download
//!
//! CSV export of the authenticated user's food entries, for spreadsheets.

use crate::error::ApiError;
use crate::repositories::FoodEntryRepository;
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

/// One CSV row per food entry
#[derive(Debug, Clone, Serialize)]
struct FoodCsvRow {
    date: String,
    name: String,
    meal: String,
    image_url: String,
    logged_at: String,
}

/// Export service
pub struct ExportService;

impl ExportService {
    /// Export a user's food log as CSV, newest entry first
    pub async fn export_foods_csv(pool: &PgPool, user_id: Uuid) -> Result<String, ApiError> {
        let entries = FoodEntryRepository::list_by_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        let rows: Vec<FoodCsvRow> = entries
            .into_iter()
            .map(|e| FoodCsvRow {
                date: e.entry_date.format("%Y-%m-%d").to_string(),
                name: e.name,
                meal: e.meal_type,
                image_url: e.image_url,
                logged_at: e.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            })
            .collect();

        Self::to_csv(&rows)
    }

    /// Serialize rows to CSV with a header line
    fn to_csv<T: Serialize>(data: &[T]) -> Result<String, ApiError> {
        let mut wtr = csv::Writer::from_writer(vec![]);

        for row in data {
            wtr.serialize(row)
                .map_err(|e| ApiError::Internal(anyhow::anyhow!("CSV serialization error: {}", e)))?;
        }

        let bytes = wtr
            .into_inner()
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("CSV writer error: {}", e)))?;

        String::from_utf8(bytes)
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("CSV encoding error: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_includes_header_and_rows() {
        let rows = vec![
            FoodCsvRow {
                date: "2025-06-01".to_string(),
                name: "Pad Thai".to_string(),
                meal: "lunch".to_string(),
                image_url: String::new(),
                logged_at: "2025-06-01 12:30:00".to_string(),
            },
            FoodCsvRow {
                date: "2025-06-02".to_string(),
                name: "Omelette".to_string(),
                meal: "breakfast".to_string(),
                image_url: "http://storage.local/object/public/food-images/1-a.jpg".to_string(),
                logged_at: "2025-06-02 08:00:00".to_string(),
            },
        ];

        let csv = ExportService::to_csv(&rows).unwrap();
        let mut lines = csv.lines();

        assert_eq!(lines.next().unwrap(), "date,name,meal,image_url,logged_at");
        assert!(csv.contains("Pad Thai"));
        assert!(csv.contains("breakfast"));
        assert_eq!(csv.lines().count(), 3);
    }

    #[test]
    fn empty_export_is_empty() {
        let csv = ExportService::to_csv::<FoodCsvRow>(&[]).unwrap();
        assert!(csv.is_empty());
    }
}
