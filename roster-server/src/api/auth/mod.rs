//! Login routes
//!
//! # Routes
//!
//! | Path | Method | Purpose | Session |
//! |------|--------|---------|---------|
//! | /api/auth/login | POST | look up a member by email | none |

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/auth/login", post(handler::login))
}
