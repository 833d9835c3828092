//! Session middleware

use axum::{extract::Request, middleware::Next, response::Response};

use super::CurrentMember;
use crate::security_log;
use shared::AppError;

/// Gate protected routes behind a client-reported identity.
///
/// Reads the member email from the `x-member-email` header and injects
/// [`CurrentMember`] into the request extensions. The value is trusted as-is;
/// the server never verifies it against the store.
///
/// A missing or empty header on a protected route returns 401
/// SessionRequired.
pub async fn require_session(mut req: Request, next: Next) -> Result<Response, AppError> {
    if is_public(req.method(), req.uri().path()) {
        return Ok(next.run(req).await);
    }

    match super::email_from_headers(req.headers()) {
        Some(email) => {
            req.extensions_mut().insert(CurrentMember { email });
            Ok(next.run(req).await)
        }
        None => {
            security_log!("WARN", "session_missing", uri = format!("{:?}", req.uri()));
            Err(AppError::session_required())
        }
    }
}

/// Routes that never require a session: CORS preflight, everything outside
/// `/api/`, login, registration, and the photo routes (uploads happen
/// during registration, before any session exists).
fn is_public(method: &http::Method, path: &str) -> bool {
    method == http::Method::OPTIONS
        || !path.starts_with("/api/")
        || path == "/api/auth/login"
        || (path == "/api/members" && method == http::Method::POST)
        || path.starts_with("/api/photos")
}
