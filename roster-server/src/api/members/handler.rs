//! Member API Handlers
//!
//! Records are addressed by email in the URL; there is no surrogate id on
//! the wire. The server trusts payloads as submitted, the clients carry the
//! form validation.

use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::repository::MemberRepository;
use crate::session::CurrentMember;
use shared::AppResult;
use shared::models::{Member, MemberCreate, MemberUpdate};

/// Query parameters for the list endpoint
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Comma-separated projection, e.g. `?fields=first_name,last_name,email`
    fields: Option<String>,
}

/// POST /api/members - register a new member
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<MemberCreate>,
) -> AppResult<Json<Member>> {
    let repo = MemberRepository::new(state.db.clone());
    let member = repo.create(payload).await?;

    tracing::info!(email = %member.email, "Member registered");

    Ok(Json(member))
}

/// GET /api/members - list all members, ordered by last name
///
/// `?fields=` takes a comma-separated whitelist of member fields and returns
/// plain objects holding only those fields.
pub async fn list(
    State(state): State<ServerState>,
    member: CurrentMember,
    Query(params): Query<ListParams>,
) -> AppResult<Response> {
    let repo = MemberRepository::new(state.db.clone());

    let fields: Vec<String> = params
        .fields
        .as_deref()
        .map(|f| {
            f.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    tracing::debug!(viewer = %member.email, "Listing members");

    if fields.is_empty() {
        let members = repo.find_all().await?;
        Ok(Json(members).into_response())
    } else {
        let rows = repo.find_all_projected(&fields).await?;
        Ok(Json(rows).into_response())
    }
}

/// PUT /api/members/{email} - merge a patch into the member record
///
/// Only the fields present in the patch change; `updated_at` is stamped on
/// every call. The path email is the record key as it was before any email
/// change in the patch.
pub async fn update(
    State(state): State<ServerState>,
    member: CurrentMember,
    Path(email): Path<String>,
    Json(payload): Json<MemberUpdate>,
) -> AppResult<Json<Member>> {
    let repo = MemberRepository::new(state.db.clone());
    let updated = repo.update(&email, payload).await?;

    tracing::info!(email = %updated.email, editor = %member.email, "Member updated");

    Ok(Json(updated))
}

/// DELETE /api/members/{email} - remove the member
///
/// Returns the record as it was before the delete. A second delete of the
/// same email is a 404.
pub async fn delete(
    State(state): State<ServerState>,
    member: CurrentMember,
    Path(email): Path<String>,
) -> AppResult<Json<Member>> {
    let repo = MemberRepository::new(state.db.clone());
    let deleted = repo.delete(&email).await?;

    tracing::info!(email = %deleted.email, caller = %member.email, "Member deleted");

    Ok(Json(deleted))
}
