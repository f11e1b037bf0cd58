//! Handlers for the image manifest: upload, list, delete.
//!
//! Uploads are written under the configured public directory with a
//! UUID-derived name and recorded as a manifest row. Deletion removes the
//! row first and then the file; a file that is already gone does not fail
//! the request.

use std::io::Cursor;

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::image::NewImageAsset;
use folio_db::repositories::ImageRepo;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Supported image file extensions for upload.
const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Maximum upload size in bytes (8 MiB). The upload route raises the
/// request body limit to match (plus multipart framing overhead).
pub const MAX_UPLOAD_BYTES: usize = 8 * 1024 * 1024;

/// GET /api/v1/images (and GET /studio/images)
pub async fn list_images(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let images = ImageRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: images }))
}

/// POST /studio/images
///
/// Multipart upload. Fields: `file` (required), `description`, `hint`.
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut description = String::new();
    let mut hint = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("upload.png").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                file = Some((filename, data.to_vec()));
            }
            "description" => {
                description = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
            }
            "hint" => {
                hint = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
            }
            _ => {} // ignore unknown fields
        }
    }

    let (original_name, data) =
        file.ok_or_else(|| AppError::BadRequest("Missing 'file' field".into()))?;

    if data.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".into()));
    }
    if data.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::BadRequest(format!(
            "File exceeds the {} MiB upload limit",
            MAX_UPLOAD_BYTES / (1024 * 1024)
        )));
    }

    let extension = original_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    if !SUPPORTED_IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        return Err(AppError::BadRequest(format!(
            "Unsupported file extension '{extension}'. Supported: {}",
            SUPPORTED_IMAGE_EXTENSIONS.join(", ")
        )));
    }

    // Header-only decode: cheap dimension read that also rejects payloads
    // that are not actually images.
    let (width, height) = image::ImageReader::new(Cursor::new(&data))
        .with_guessed_format()
        .map_err(|e| AppError::BadRequest(format!("Unreadable image data: {e}")))?
        .into_dimensions()
        .map_err(|e| AppError::BadRequest(format!("Unreadable image data: {e}")))?;

    let file_name = format!("{}.{extension}", Uuid::new_v4());
    let path = state.config.upload_dir.join(&file_name);

    tokio::fs::create_dir_all(&state.config.upload_dir)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to create upload directory: {e}")))?;
    tokio::fs::write(&path, &data)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to write upload: {e}")))?;

    let input = NewImageAsset {
        url: format!("/uploads/{file_name}"),
        file_name,
        description,
        hint,
        width: width as i32,
        height: height as i32,
        size_bytes: data.len() as i64,
    };
    let image = ImageRepo::create(&state.pool, &input).await?;

    tracing::info!(
        image_id = image.id,
        file_name = %image.file_name,
        width,
        height,
        "Image uploaded",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: image })))
}

/// DELETE /studio/images/{id}
pub async fn delete_image(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let image = ImageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Image",
            id,
        }))?;

    ImageRepo::delete(&state.pool, id).await?;

    let path = state.config.upload_dir.join(&image.file_name);
    match tokio::fs::remove_file(&path).await {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(
                image_id = id,
                path = %path.display(),
                "Manifest row deleted but file was already gone",
            );
        }
        Err(e) => {
            return Err(AppError::InternalError(format!(
                "Failed to remove file: {e}"
            )));
        }
    }

    tracing::info!(image_id = id, "Image deleted");

    Ok(StatusCode::NO_CONTENT)
}
