//! Data export API routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::ExportService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    response::IntoResponse,
    routing::get,
    Router,
};

/// Create export routes
pub fn export_routes() -> Router<AppState> {
    Router::new().route("/foods.csv", get(export_foods_csv))
}

/// GET /api/v1/export/foods.csv - Export the food log as CSV
async fn export_foods_csv(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let csv = ExportService::export_foods_csv(state.db(), auth.user_id).await?;

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/csv"));
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_static("attachment; filename=\"food-journal-export.csv\""),
    );

    Ok((headers, csv))
}

#[cfg(test)]
mod tests {
    // CSV shape is covered in services::export; endpoint auth in foods_tests
}
