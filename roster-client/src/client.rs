//! Roster client
//!
//! HTTP calls to the roster server plus the client-held session slot. The
//! server keeps no session state at all: whoever holds a registered email is
//! that member, and every protected request carries the email in a header.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use shared::client::{LoginRequest, PhotoUploadResponse, SESSION_HEADER};
use shared::directory::DirectoryView;
use shared::error::{ApiResponse, ErrorCode};
use shared::models::{Member, MemberCreate, MemberUpdate};
use shared::validate_payload;

/// A photo picked for upload
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// HTTP client for the roster server
#[derive(Debug, Clone)]
pub struct RosterClient {
    client: Client,
    base_url: String,
    session: Option<Member>,
}

impl RosterClient {
    /// Create a new client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session: None,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode a response, turning the error envelope into [`ClientError`]
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            if let Ok(envelope) = serde_json::from_str::<ApiResponse<serde_json::Value>>(&text) {
                let code = envelope.code.unwrap_or(0);
                if code == ErrorCode::SessionRequired.code() {
                    return Err(ClientError::SessionRequired);
                }
                return Err(ClientError::Api {
                    code,
                    message: envelope.message,
                });
            }
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::SessionRequired),
                _ => Err(ClientError::InvalidResponse(format!("{}: {}", status, text))),
            };
        }

        response.json().await.map_err(Into::into)
    }

    // ========== Session ==========

    /// Log in by email
    ///
    /// On success the returned record fills the session slot.
    pub async fn login(&mut self, email: &str) -> ClientResult<Member> {
        let request = LoginRequest {
            email: email.to_string(),
        };
        let response = self
            .client
            .post(self.url("/api/auth/login"))
            .json(&request)
            .send()
            .await?;
        let member: Member = Self::handle_response(response).await?;

        tracing::debug!(email = %member.email, "Session established");
        self.session = Some(member.clone());
        Ok(member)
    }

    /// Clear the session slot. Local only; the server holds nothing to clear.
    pub fn logout(&mut self) {
        self.session = None;
    }

    /// Currently logged-in member, if any
    pub fn current_member(&self) -> Option<&Member> {
        self.session.as_ref()
    }

    /// Borrow the session member or fail with [`ClientError::SessionRequired`]
    pub fn require_session(&self) -> ClientResult<&Member> {
        self.session.as_ref().ok_or(ClientError::SessionRequired)
    }

    fn session_email(&self) -> ClientResult<String> {
        Ok(self.require_session()?.email.clone())
    }

    /// Whether the session member owns the given record
    ///
    /// Exact email equality; `Greta@club.org` does not own `greta@club.org`.
    pub fn is_owner(&self, member: &Member) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.email == member.email)
    }

    // ========== Members ==========

    /// Register a new member, optionally uploading a photo first
    ///
    /// The photo upload must succeed before the record is written; a failed
    /// upload aborts the whole registration. Registration does not log in.
    pub async fn register(
        &self,
        mut data: MemberCreate,
        photo: Option<PhotoUpload>,
    ) -> ClientResult<Member> {
        validate_payload(&data).map_err(|e| ClientError::Validation(e.message))?;

        if let Some(photo) = photo {
            let stored = self.upload_photo(photo).await?;
            data.photo_url = Some(stored.url);
        }

        let response = self
            .client
            .post(self.url("/api/members"))
            .json(&data)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Fetch the full member list
    pub async fn members(&self) -> ClientResult<Vec<Member>> {
        let email = self.session_email()?;
        let response = self
            .client
            .get(self.url("/api/members"))
            .header(SESSION_HEADER, email)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Fetch the member list projected to the given fields
    pub async fn members_projected(
        &self,
        fields: &[&str],
    ) -> ClientResult<Vec<serde_json::Value>> {
        let email = self.session_email()?;
        let response = self
            .client
            .get(self.url("/api/members"))
            .query(&[("fields", fields.join(","))])
            .header(SESSION_HEADER, email)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Fetch the member list and derive the directory view locally
    pub async fn directory(&self, search_term: &str) -> ClientResult<DirectoryView> {
        let members = self.members().await?;
        Ok(DirectoryView::derive(&members, search_term))
    }

    /// Update the logged-in member's record
    ///
    /// The request is keyed by the session email as it is before the edit,
    /// so a patch that changes the email still addresses the old record. On
    /// success the session slot is replaced with the updated record.
    pub async fn update_profile(
        &mut self,
        mut patch: MemberUpdate,
        photo: Option<PhotoUpload>,
    ) -> ClientResult<Member> {
        let email = self.session_email()?;

        validate_payload(&patch).map_err(|e| ClientError::Validation(e.message))?;

        if let Some(photo) = photo {
            let stored = self.upload_photo(photo).await?;
            patch.photo_url = Some(stored.url);
        }

        if patch.is_empty() {
            // Nothing to send; the record is untouched
            return self.require_session().cloned();
        }

        let response = self
            .client
            .put(self.url(&format!("/api/members/{}", email)))
            .header(SESSION_HEADER, email.clone())
            .json(&patch)
            .send()
            .await?;
        let updated: Member = Self::handle_response(response).await?;

        self.session = Some(updated.clone());
        Ok(updated)
    }

    /// Delete the logged-in member's record
    ///
    /// Terminal: the record is gone and the session slot is cleared. Returns
    /// the record as it was.
    pub async fn delete_profile(&mut self) -> ClientResult<Member> {
        let email = self.session_email()?;

        let response = self
            .client
            .delete(self.url(&format!("/api/members/{}", email)))
            .header(SESSION_HEADER, email)
            .send()
            .await?;
        let deleted: Member = Self::handle_response(response).await?;

        self.session = None;
        Ok(deleted)
    }

    // ========== Photos ==========

    /// Upload a photo, returning the stored path and public URL
    pub async fn upload_photo(&self, photo: PhotoUpload) -> ClientResult<PhotoUploadResponse> {
        let part = reqwest::multipart::Part::bytes(photo.bytes)
            .file_name(photo.filename)
            .mime_str(&photo.content_type)?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(self.url("/api/photos"))
            .multipart(form)
            .send()
            .await?;
        Self::handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn member(email: &str) -> Member {
        Member {
            first_name: "Greta".to_string(),
            last_name: "Brandt".to_string(),
            email: email.to_string(),
            phone: None,
            photo_url: None,
            officer_title: None,
            hide_contact_info: false,
            updated_at: Utc::now(),
        }
    }

    fn test_client() -> RosterClient {
        RosterClient::new(&ClientConfig::new("http://localhost:3000/"))
    }

    #[test]
    fn test_base_url_is_normalized() {
        let client = test_client();
        assert_eq!(
            client.url("/api/members"),
            "http://localhost:3000/api/members"
        );
    }

    #[test]
    fn test_session_slot_lifecycle() {
        let mut client = test_client();
        assert!(client.current_member().is_none());
        assert!(matches!(
            client.require_session(),
            Err(ClientError::SessionRequired)
        ));

        client.session = Some(member("greta@club.org"));
        assert_eq!(client.require_session().unwrap().email, "greta@club.org");

        client.logout();
        assert!(client.current_member().is_none());
    }

    #[test]
    fn test_is_owner_is_exact_email_equality() {
        let mut client = test_client();
        client.session = Some(member("greta@club.org"));

        assert!(client.is_owner(&member("greta@club.org")));
        // Different casing is a different identity
        assert!(!client.is_owner(&member("Greta@club.org")));
        assert!(!client.is_owner(&member("carl@club.org")));
    }

    #[test]
    fn test_is_owner_without_session() {
        let client = test_client();
        assert!(!client.is_owner(&member("greta@club.org")));
    }

    #[tokio::test]
    async fn test_empty_update_skips_the_network() {
        // The base URL points at nothing; an empty patch must not produce a
        // request at all
        let mut client = test_client();
        client.session = Some(member("greta@club.org"));

        let updated = client
            .update_profile(MemberUpdate::default(), None)
            .await
            .unwrap();
        assert_eq!(updated.email, "greta@club.org");
    }

    #[tokio::test]
    async fn test_protected_calls_require_a_session() {
        let client = test_client();
        assert!(matches!(
            client.members().await,
            Err(ClientError::SessionRequired)
        ));
        assert!(matches!(
            client.directory("").await,
            Err(ClientError::SessionRequired)
        ));
    }
}
