//! Member record model
//!
//! The canonical shape of a directory member. The email address is the sole
//! identity key: exactly one record may exist per email, matched
//! case-sensitively as stored. No surrogate id is exposed anywhere in the
//! API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Field names that may appear in a list projection.
pub const MEMBER_FIELDS: &[&str] = &[
    "first_name",
    "last_name",
    "email",
    "phone",
    "photo_url",
    "officer_title",
    "hide_contact_info",
    "updated_at",
];

/// Stored member record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    /// Absent for regular members; one of the recognized officer titles
    /// (or an unrecognized one, which sorts after all of them) otherwise.
    #[serde(default)]
    pub officer_title: Option<String>,
    /// When true, email and phone are suppressed on every rendered card.
    #[serde(default)]
    pub hide_contact_info: bool,
    /// Stamped on every create and update.
    pub updated_at: DateTime<Utc>,
}

impl Member {
    /// Build a stored record from a registration payload, stamping it.
    pub fn from_create(data: MemberCreate, updated_at: DateTime<Utc>) -> Self {
        Self {
            first_name: data.first_name,
            last_name: data.last_name,
            email: data.email,
            phone: data.phone,
            photo_url: data.photo_url,
            officer_title: data.officer_title,
            hide_contact_info: data.hide_contact_info,
            updated_at,
        }
    }
}

/// Registration payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MemberCreate {
    #[validate(length(min = 1, max = 200, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 200, message = "Last name is required"))]
    pub last_name: String,
    #[validate(
        length(min = 1, max = 254, message = "Email is required"),
        email(message = "Invalid email format")
    )]
    pub email: String,
    #[validate(length(max = 100))]
    pub phone: Option<String>,
    #[validate(length(max = 2048))]
    pub photo_url: Option<String>,
    #[validate(length(max = 200))]
    pub officer_title: Option<String>,
    #[serde(default)]
    pub hide_contact_info: bool,
}

/// Edit patch (all optional)
///
/// Absent fields are skipped on serialization so a merge never nulls out
/// stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MemberUpdate {
    #[validate(length(min = 1, max = 200))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 200))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[validate(length(max = 100))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[validate(length(max = 2048))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[validate(length(max = 200))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub officer_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_contact_info: Option<bool>,
}

impl MemberUpdate {
    /// True when no field is set (a merge would be a no-op besides the stamp).
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.photo_url.is_none()
            && self.officer_title.is_none()
            && self.hide_contact_info.is_none()
    }
}
