//! Session module
//!
//! The directory trusts the client-reported identity. A member "logs in" by
//! presenting an email the server already knows, and every later request
//! carries that email in the `x-member-email` header. Presence is all the
//! server checks; there is no token and no password.
//!
//! - [`CurrentMember`] - identity attached to the request
//! - [`require_session`] - middleware gating the protected `/api/` routes

pub mod extractor;
pub mod middleware;

pub use middleware::require_session;
// The header name lives in shared so the client sends exactly what the
// middleware reads
pub use shared::client::SESSION_HEADER;

/// Identity of the member making the request
///
/// Inserted into the request extensions by [`require_session`]. The email is
/// whatever the client sent; ownership checks compare it against record
/// emails and nothing more.
#[derive(Debug, Clone)]
pub struct CurrentMember {
    pub email: String,
}

/// Session email as sent, or `None` when absent, unreadable, or blank
fn email_from_headers(headers: &http::HeaderMap) -> Option<String> {
    headers
        .get(SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|email| !email.is_empty())
        .map(str::to_string)
}
