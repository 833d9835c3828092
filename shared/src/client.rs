//! Request and response DTOs shared between server and client

use serde::{Deserialize, Serialize};

/// Header carrying the session identity on protected routes
pub const SESSION_HEADER: &str = "x-member-email";

/// Login request: an email lookup, nothing more.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
}

/// Successful photo upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoUploadResponse {
    /// Durable public URL to persist on the member record
    pub url: String,
    /// Storage path relative to the photos directory
    pub path: String,
    /// Stored size in bytes
    pub size: usize,
    /// Content type as declared by the uploader
    pub content_type: String,
}
