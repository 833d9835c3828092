//! Authentication Handlers
//!
//! Login is an email lookup. A registered email is the entire credential;
//! there are no passwords and no tokens.

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::repository::MemberRepository;
use shared::client::LoginRequest;
use shared::models::Member;
use shared::{AppError, AppResult};

/// Login handler
///
/// Looks up the member by email and returns the full record. An unknown
/// email is a 404, which the client shows as "no account for that email".
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<Member>> {
    let repo = MemberRepository::new(state.db.clone());

    let member = repo
        .find_by_email(&req.email)
        .await?
        .ok_or_else(|| AppError::member_not_found(req.email.clone()))?;

    tracing::info!(email = %member.email, "Member logged in");

    Ok(Json(member))
}
