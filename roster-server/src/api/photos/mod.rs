//! Photo Routes
//!
//! Upload and serving of member photos. Photos are uploaded during
//! registration, before any session exists, so both routes are public and
//! the session middleware lets them through.

mod handler;

use axum::{
    Router,
    extract::{DefaultBodyLimit, Path, State},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use http::header;

use crate::core::ServerState;
use crate::services::photo_store::MAX_FILE_SIZE;
use shared::{AppError, AppResult};

/// Build photo router
pub fn router() -> Router<ServerState> {
    Router::new()
        // The default axum body limit is below the photo ceiling; leave
        // headroom for the multipart framing on top of the file itself
        .route(
            "/api/photos",
            post(handler::upload).layer(DefaultBodyLimit::max(MAX_FILE_SIZE + 1024 * 1024)),
        )
        .route("/api/photos/{*path}", get(serve_photo))
}

/// Serve a stored photo
///
/// Responds with the content type guessed from the extension and an hour of
/// client-side cache.
async fn serve_photo(
    State(state): State<ServerState>,
    Path(path): Path<String>,
) -> AppResult<Response> {
    let file_path = state.photos().resolve(&path)?;

    let bytes = match tokio::fs::read(&file_path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::debug!(path = %path, error = %e, "Photo not found");
            return Err(AppError::not_found("Photo"));
        }
    };

    let content_type = mime_guess::from_path(&file_path)
        .first_or_octet_stream()
        .to_string();

    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (header::CACHE_CONTROL, "max-age=3600".to_string()),
        ],
        bytes,
    )
        .into_response())
}
