//! Input validation helpers
//!
//! Payload types derive [`validator::Validate`]; this module folds the
//! field-level errors into a single [`AppError`]. Validation runs in the
//! submitting client before a request is issued; the server stores what it
//! is given.

use validator::Validate;

use crate::error::{AppError, AppResult};

/// Validate a payload, returning a `ValidationFailed` error on failure.
pub fn validate_payload<T: Validate>(payload: &T) -> AppResult<()> {
    payload
        .validate()
        .map_err(|e| AppError::validation(format_validation_errors(e)))
}

/// Format validation errors into a human-readable string.
fn format_validation_errors(errors: validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for '{field}'"))
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::models::{MemberCreate, MemberUpdate};

    #[test]
    fn test_valid_payload_passes() {
        let data = MemberCreate {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            phone: Some("555-0100".to_string()),
            photo_url: None,
            officer_title: Some("President".to_string()),
            hide_contact_info: false,
        };
        assert!(validate_payload(&data).is_ok());
    }

    #[test]
    fn test_invalid_payload_reports_messages() {
        let data = MemberCreate {
            first_name: String::new(),
            last_name: "Hopper".to_string(),
            email: "nope".to_string(),
            phone: None,
            photo_url: None,
            officer_title: None,
            hide_contact_info: false,
        };
        let err = validate_payload(&data).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(err.message.contains("First name is required"));
        assert!(err.message.contains("Invalid email format"));
    }

    #[test]
    fn test_empty_update_is_valid() {
        assert!(validate_payload(&MemberUpdate::default()).is_ok());
    }
}
