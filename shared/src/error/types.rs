//! Application error and the wire envelope for failures

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Error carried through handlers and answered over the wire.
///
/// Pairs an [`ErrorCode`] with a message (the code's default unless a call
/// site supplies its own) and an optional JSON object of details such as
/// the offending field or email.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<Map<String, Value>>,
}

impl AppError {
    /// Error with the code's default message
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Error with a call-site message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Attach one detail entry, creating the details object on first use
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    /// HTTP status this error is answered with
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    /// Failed payload validation
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Malformed or unusable request
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    /// Named resource does not exist
    pub fn not_found(resource: impl Into<String>) -> Self {
        let resource = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{resource} not found"))
            .with_detail("resource", resource)
    }

    /// No member record under this email
    pub fn member_not_found(email: impl Into<String>) -> Self {
        Self::new(ErrorCode::MemberNotFound).with_detail("email", email.into())
    }

    /// Protected route reached without a session
    pub fn session_required() -> Self {
        Self::new(ErrorCode::SessionRequired)
    }

    /// Photo could not be written
    pub fn upload_failed(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::UploadFailed, msg)
    }

    /// Member store read fault
    pub fn lookup_failed(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::LookupFailed, msg)
    }

    /// Member store write fault
    pub fn persist_failed(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::PersistFailed, msg)
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Envelope failures travel in.
///
/// Successful endpoints answer with their bare payload; only errors are
/// wrapped. `data` exists so clients can decode either shape with one
/// type, and absent fields are left off the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Map<String, Value>>,
}

impl From<&AppError> for ApiResponse<()> {
    fn from(err: &AppError) -> Self {
        Self {
            code: Some(err.code.code()),
            message: err.message.clone(),
            data: None,
            details: err.details.clone(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        // Store and server faults get an error-level log entry; everything
        // else is a routine client outcome.
        if matches!(self.code.category(), super::category::ErrorCategory::System) {
            tracing::error!(code = %self.code, message = %self.message, "System error");
        }

        let envelope = ApiResponse::<()>::from(&self);
        (self.http_status(), Json(envelope)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_and_custom_messages() {
        let err = AppError::new(ErrorCode::MemberNotFound);
        assert_eq!(err.message, "Member not found");
        assert!(err.details.is_none());

        let err = AppError::with_message(ErrorCode::UnsupportedFileFormat, "Only image uploads");
        assert_eq!(err.code, ErrorCode::UnsupportedFileFormat);
        assert_eq!(err.message, "Only image uploads");
        assert_eq!(err.to_string(), "Only image uploads");
    }

    #[test]
    fn test_details_accumulate() {
        let err = AppError::validation("Two fields failed")
            .with_detail("first_name", "blank")
            .with_detail("phone", "too long");

        let details = err.details.unwrap();
        assert_eq!(details.get("first_name").unwrap(), "blank");
        assert_eq!(details.get("phone").unwrap(), "too long");
    }

    #[test]
    fn test_named_constructors() {
        let err = AppError::not_found("Photo");
        assert_eq!(
            (err.code, err.http_status()),
            (ErrorCode::NotFound, StatusCode::NOT_FOUND)
        );
        assert_eq!(err.message, "Photo not found");
        assert_eq!(err.details.unwrap().get("resource").unwrap(), "Photo");

        let err = AppError::member_not_found("grace@example.com");
        assert_eq!(err.code, ErrorCode::MemberNotFound);
        assert_eq!(
            err.details.unwrap().get("email").unwrap(),
            "grace@example.com"
        );

        assert_eq!(
            AppError::session_required().http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::persist_failed("disk full").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_envelope_wire_shape() {
        let err = AppError::member_not_found("grace@example.com");
        let envelope = ApiResponse::<()>::from(&err);
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["code"], 2002);
        assert_eq!(json["message"], "Member not found");
        assert_eq!(json["details"]["email"], "grace@example.com");
        // No data on errors, and absent fields stay off the wire
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_envelope_without_details_omits_the_field() {
        let envelope = ApiResponse::<()>::from(&AppError::session_required());
        let json = serde_json::to_string(&envelope).unwrap();
        assert_eq!(json, r#"{"code":1001,"message":"Login required"}"#);
    }

    #[test]
    fn test_envelope_decodes_client_side() {
        let json = r#"{"code":2001,"message":"A member with this email already exists"}"#;
        let envelope: ApiResponse<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.code, Some(2001));
        assert!(envelope.data.is_none());
    }
}
