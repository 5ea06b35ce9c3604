//! Blob store client
//!
//! Uploaded images live in an external object-storage service, addressed by
//! bucket and object name. The service exposes a deterministic public URL
//! per object; computing it never touches the network and performs no
//! existence check.
//!
//! # Design
//!
//! The client wraps a single pre-built `reqwest::Client` (connection pooling,
//! cheap cloning) the same way the JWT keys are pre-computed in AppState.

use crate::config::StorageConfig;
use anyhow::Result;
use bytes::Bytes;
use chrono::Utc;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;
use thiserror::Error;

/// Failure talking to the blob store
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("storage returned status {status}: {body}")]
    Unexpected { status: u16, body: String },
}

/// An image file staged by a multipart form
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

/// How a new object name is derived from the uploaded filename
///
/// Both schemes prefix the current Unix timestamp in milliseconds, which is
/// what makes names collision-resistant across uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingScheme {
    /// `{timestamp}-{original filename}` — used when creating records
    TimestampAndName,
    /// `{timestamp}.{extension}` — used by the edit screens
    TimestampAndExtension,
}

impl NamingScheme {
    /// Derive an object name for `file_name` at `now_millis`
    pub fn object_name_at(&self, file_name: &str, now_millis: i64) -> String {
        match self {
            NamingScheme::TimestampAndName => format!("{}-{}", now_millis, file_name),
            NamingScheme::TimestampAndExtension => {
                // Falls back to the whole name when there is no dot
                let ext = file_name.rsplit('.').next().unwrap_or(file_name);
                format!("{}.{}", now_millis, ext)
            }
        }
    }

    /// Derive an object name for `file_name` at the current time
    pub fn object_name(&self, file_name: &str) -> String {
        self.object_name_at(file_name, Utc::now().timestamp_millis())
    }
}

/// Derive a stored object's name from its public URL
///
/// The name is the final path segment after the last `/`. Returns None for
/// empty URLs or URLs ending in a slash.
pub fn object_name_from_url(url: &str) -> Option<&str> {
    url.rsplit('/').next().filter(|name| !name.is_empty())
}

/// Client for the external blob store
#[derive(Clone)]
pub struct StorageClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl StorageClient {
    /// Create a new client from configuration
    ///
    /// Call once at startup and store in AppState; the underlying
    /// `reqwest::Client` holds the connection pool.
    pub fn new(config: &StorageConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self::from_parts(http, &config.base_url, &config.api_key))
    }

    /// Create a client from pre-built parts (used by tests)
    pub fn from_parts(http: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Upload object bytes under `bucket/object`
    pub async fn upload(
        &self,
        bucket: &str,
        object: &str,
        bytes: Bytes,
        content_type: &str,
    ) -> Result<(), StorageError> {
        let url = format!("{}/object/{}/{}", self.base_url, bucket, object);

        let response = self
            .http
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, content_type.to_string())
            .body(bytes)
            .send()
            .await?;

        Self::expect_success(response).await
    }

    /// Remove the object stored under `bucket/object`
    pub async fn remove(&self, bucket: &str, object: &str) -> Result<(), StorageError> {
        let url = format!("{}/object/{}/{}", self.base_url, bucket, object);

        let response = self
            .http
            .delete(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .send()
            .await?;

        Self::expect_success(response).await
    }

    /// Compute the public URL for `bucket/object`
    ///
    /// Deterministic string construction; no network round-trip and no
    /// existence check.
    pub fn public_url(&self, bucket: &str, object: &str) -> String {
        format!("{}/object/public/{}/{}", self.base_url, bucket, object)
    }

    async fn expect_success(response: reqwest::Response) -> Result<(), StorageError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(StorageError::Unexpected {
            status: status.as_u16(),
            body,
        })
    }
}
