//! Image upload and replace workflow
//!
//! Every form that stages an image funnels through this module, replacing
//! the per-screen copies the source system carried.
//!
//! Replace contract:
//! - no new image: keep the stored URL, zero blob-store calls
//! - new image: best-effort remove of the old object (failure logged, never
//!   fatal, no retry), then upload under a fresh timestamped name (failure IS
//!   fatal and aborts the record update), then compute the public URL.
//!
//! The remove-before-upload ordering means an upload failure can leave a
//! record pointing at an already-removed object. Known gap, inherited from
//! the workflow's contract; see DESIGN.md.

use crate::error::ApiError;
use crate::storage::{object_name_from_url, ImageUpload, NamingScheme, StorageClient};
use tracing::warn;

/// Upload a freshly staged image and return its public URL
///
/// Used by the create forms (register, add food), which have no previous
/// object to displace.
pub async fn upload_image(
    storage: &StorageClient,
    bucket: &str,
    upload: &ImageUpload,
    naming: NamingScheme,
) -> Result<String, ApiError> {
    let object = naming.object_name(&upload.file_name);
    storage
        .upload(bucket, &object, upload.bytes.clone(), &upload.content_type)
        .await?;
    Ok(storage.public_url(bucket, &object))
}

/// Run the image-replace workflow for an edit form
///
/// Returns `None` when no new image was staged (stored URL must be kept) or
/// `Some(public_url)` for the uploaded replacement.
pub async fn replace_image(
    storage: &StorageClient,
    bucket: &str,
    old_url: &str,
    upload: Option<&ImageUpload>,
    naming: NamingScheme,
) -> Result<Option<String>, ApiError> {
    let Some(upload) = upload else {
        return Ok(None);
    };

    if !old_url.is_empty() {
        remove_image_best_effort(storage, bucket, old_url).await;
    }

    let url = upload_image(storage, bucket, upload, naming).await?;
    Ok(Some(url))
}

/// Best-effort removal of a stored object, addressed by its public URL
///
/// Failure is logged and swallowed; callers proceed regardless.
pub async fn remove_image_best_effort(storage: &StorageClient, bucket: &str, url: &str) {
    let Some(object) = object_name_from_url(url) else {
        return;
    };

    if let Err(e) = storage.remove(bucket, object).await {
        warn!(bucket, object, error = %e, "failed to remove stored image");
    }
}
