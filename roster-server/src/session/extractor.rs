//! Session extractor
//!
//! Lets protected handlers take [`CurrentMember`] as an argument instead of
//! reading request extensions by hand.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::core::ServerState;
use crate::security_log;
use crate::session::CurrentMember;
use shared::AppError;

impl FromRequestParts<ServerState> for CurrentMember {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        // The middleware usually ran first and left the identity here
        if let Some(member) = parts.extensions.get::<CurrentMember>() {
            return Ok(member.clone());
        }

        // Routes the middleware skipped read the header themselves
        match super::email_from_headers(&parts.headers) {
            Some(email) => {
                let member = CurrentMember { email };
                parts.extensions.insert(member.clone());
                Ok(member)
            }
            None => {
                security_log!("WARN", "session_missing", uri = format!("{:?}", parts.uri));
                Err(AppError::session_required())
            }
        }
    }
}
