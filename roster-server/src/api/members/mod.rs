//! Member registry routes
//!
//! # Routes
//!
//! | Path | Method | Purpose | Session |
//! |------|--------|---------|---------|
//! | /api/members | POST | register | none |
//! | /api/members | GET | list, optionally projected | required |
//! | /api/members/{email} | PUT | merge a patch | required |
//! | /api/members/{email} | DELETE | remove | required |

mod handler;

use axum::{
    Router,
    routing::{post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        // Registration and listing share a path; the session middleware
        // lets the POST through and gates the GET
        .route("/api/members", post(handler::register).get(handler::list))
        .route(
            "/api/members/{email}",
            put(handler::update).delete(handler::delete),
        )
}
