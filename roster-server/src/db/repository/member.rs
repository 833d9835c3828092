//! Member repository
//!
//! All operations key on the member's email address.

use super::{RepoError, RepoResult};
use chrono::Utc;
use shared::models::{MEMBER_FIELDS, Member, MemberCreate, MemberUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct MemberRepository {
    db: Surreal<Db>,
}

impl MemberRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    /// Find a member by email
    ///
    /// `Ok(None)` means the email is not registered. A driver failure is
    /// reported as `Lookup`, never flattened into `None`.
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Member>> {
        let email_owned = email.to_string();
        let mut result = self
            .db
            .query("SELECT * FROM member WHERE email = $email LIMIT 1")
            .bind(("email", email_owned))
            .await
            .map_err(RepoError::lookup)?;
        let members: Vec<Member> = result.take(0).map_err(RepoError::lookup)?;
        Ok(members.into_iter().next())
    }

    /// Find all members, ordered by last name
    pub async fn find_all(&self) -> RepoResult<Vec<Member>> {
        let members: Vec<Member> = self
            .db
            .query("SELECT * FROM member ORDER BY last_name")
            .await
            .map_err(RepoError::lookup)?
            .take(0)
            .map_err(RepoError::lookup)?;
        Ok(members)
    }

    /// Find all members, returning only the requested fields
    ///
    /// Every field must be a known member field; anything else is rejected
    /// before it reaches the query string.
    pub async fn find_all_projected(
        &self,
        fields: &[String],
    ) -> RepoResult<Vec<serde_json::Value>> {
        if fields.is_empty() {
            return Err(RepoError::Validation("No fields requested".to_string()));
        }
        for field in fields {
            if !MEMBER_FIELDS.contains(&field.as_str()) {
                return Err(RepoError::Validation(format!("Unknown field: {}", field)));
            }
        }

        let query = format!(
            "SELECT {} FROM member ORDER BY last_name",
            fields.join(", ")
        );
        let rows: Vec<serde_json::Value> = self
            .db
            .query(query)
            .await
            .map_err(RepoError::lookup)?
            .take(0)
            .map_err(RepoError::lookup)?;
        Ok(rows)
    }

    /// Create a new member
    ///
    /// The pre-check gives a clean duplicate message; the unique index on
    /// email catches the race where two registrations slip past it. A failed
    /// pre-check aborts the create rather than risking a double insert.
    pub async fn create(&self, data: MemberCreate) -> RepoResult<Member> {
        if self.find_by_email(&data.email).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Email '{}' already registered",
                data.email
            )));
        }

        let record = Member::from_create(data, Utc::now());

        let mut result = self
            .db
            .query("CREATE member CONTENT $data RETURN AFTER")
            .bind(("data", record))
            .await
            .map_err(RepoError::persist)?;

        let created: Option<Member> = result.take(0).map_err(RepoError::persist)?;
        created.ok_or_else(|| RepoError::Persist("Member record was not created".to_string()))
    }

    /// Update a member, merging only the fields present in the patch
    ///
    /// `updated_at` is stamped on every call, even when the patch changes
    /// nothing else. Changing the email to one already registered trips the
    /// unique index and surfaces as `Duplicate`.
    pub async fn update(&self, email: &str, data: MemberUpdate) -> RepoResult<Member> {
        let mut merge = match serde_json::to_value(&data) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => {
                return Err(RepoError::Validation(
                    "Update payload is not an object".to_string(),
                ));
            }
        };
        merge.insert("updated_at".to_string(), serde_json::json!(Utc::now()));

        let email_owned = email.to_string();
        let mut result = self
            .db
            .query("UPDATE member MERGE $data WHERE email = $email RETURN AFTER")
            .bind(("data", merge))
            .bind(("email", email_owned))
            .await
            .map_err(RepoError::persist)?;

        let updated: Vec<Member> = result.take(0).map_err(RepoError::persist)?;
        updated
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Member '{}' not found", email)))
    }

    /// Delete a member, returning the record as it was
    ///
    /// Deleting an email that is not registered reports `NotFound`, so a
    /// second delete of the same member fails.
    pub async fn delete(&self, email: &str) -> RepoResult<Member> {
        let email_owned = email.to_string();
        let mut result = self
            .db
            .query("DELETE FROM member WHERE email = $email RETURN BEFORE")
            .bind(("email", email_owned))
            .await
            .map_err(RepoError::persist)?;

        let deleted: Vec<Member> = result.take(0).map_err(RepoError::persist)?;
        deleted
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Member '{}' not found", email)))
    }
}
