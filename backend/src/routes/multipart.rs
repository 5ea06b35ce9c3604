//! Multipart form collection
//!
//! Every image-carrying form (register, add food, update food, profile
//! edit) submits multipart/form-data. This module collects the text fields
//! and the optional staged image into one structure, so each handler maps
//! fields instead of re-implementing stream handling.

use crate::error::ApiError;
use crate::storage::ImageUpload;
use axum::extract::multipart::Multipart;
use std::collections::HashMap;

/// Name of the file part common to all image forms
const IMAGE_FIELD: &str = "image";

/// Collected multipart form: text fields plus the optional staged image
#[derive(Debug, Default)]
pub struct FormData {
    fields: HashMap<String, String>,
    image: Option<ImageUpload>,
}

impl FormData {
    /// Drain a multipart stream into a form
    ///
    /// A file part with an empty filename or no bytes counts as "no image
    /// selected", matching the browser's empty file input.
    pub async fn read(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = FormData::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Malformed multipart body: {}", e)))?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            if name == IMAGE_FIELD {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

                if !file_name.is_empty() && !bytes.is_empty() {
                    form.image = Some(ImageUpload {
                        file_name,
                        content_type,
                        bytes,
                    });
                }
            } else {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Malformed field {}: {}", name, e)))?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }

    /// Get an optional field; absent and empty are both None
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Get a required field
    pub fn require(&self, name: &str) -> Result<&str, ApiError> {
        self.get(name)
            .ok_or_else(|| ApiError::Validation(format!("Missing required field: {}", name)))
    }

    /// Take the staged image, if one was submitted
    pub fn take_image(&mut self) -> Option<ImageUpload> {
        self.image.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn form_with(fields: &[(&str, &str)], image: Option<ImageUpload>) -> FormData {
        FormData {
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            image,
        }
    }

    #[test]
    fn empty_values_count_as_absent() {
        let form = form_with(&[("name", ""), ("meal_type", "lunch")], None);
        assert_eq!(form.get("name"), None);
        assert_eq!(form.get("meal_type"), Some("lunch"));
        assert!(form.require("name").is_err());
    }

    #[test]
    fn require_reports_the_field_name() {
        let form = form_with(&[], None);
        let err = form.require("entry_date").unwrap_err();
        assert!(err.to_string().contains("entry_date"));
    }

    #[test]
    fn take_image_consumes_the_upload() {
        let mut form = form_with(
            &[],
            Some(ImageUpload {
                file_name: "a.jpg".to_string(),
                content_type: "image/jpeg".to_string(),
                bytes: Bytes::from_static(b"x"),
            }),
        );

        assert!(form.take_image().is_some());
        assert!(form.take_image().is_none());
    }
}
