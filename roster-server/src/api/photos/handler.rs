//! Photo Upload Handler

use axum::{
    Json,
    extract::{Multipart, State},
};

use crate::core::ServerState;
use shared::client::PhotoUploadResponse;
use shared::error::ErrorCode;
use shared::{AppError, AppResult};

/// Upload photo handler
///
/// Takes a multipart form with a single `file` field and stores the bytes
/// untouched. Returns the public URL the caller then persists on the member
/// record; failing here must abort the enclosing registration or edit.
pub async fn upload(
    State(state): State<ServerState>,
    mut multipart: Multipart,
) -> AppResult<Json<PhotoUploadResponse>> {
    let mut file_bytes: Option<Vec<u8>> = None;
    let mut original_name: Option<String> = None;
    let mut declared_type: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::invalid_request(format!("Invalid multipart request: {}", e)))?
    {
        let name = field.name().map(|s| s.to_string());
        if name.as_deref() == Some("file") || name.as_deref() == Some("") {
            original_name = field.file_name().map(|s| s.to_string());
            declared_type = field.content_type().map(|s| s.to_string());
            file_bytes = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| AppError::upload_failed(format!("Multipart error: {}", e)))?
                    .to_vec(),
            );
            break;
        }
    }

    let bytes = file_bytes.ok_or_else(|| AppError::new(ErrorCode::NoFileProvided))?;
    let filename = original_name.ok_or_else(|| AppError::new(ErrorCode::NoFilename))?;

    let stored = state
        .photos()
        .store(&filename, declared_type.as_deref(), &bytes)?;

    tracing::info!(
        original_name = %filename,
        path = %stored.path,
        size = stored.size,
        "Photo uploaded"
    );

    Ok(Json(PhotoUploadResponse {
        url: stored.url,
        path: stored.path,
        size: stored.size,
        content_type: stored.content_type,
    }))
}
