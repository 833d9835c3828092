//! Error codes
//!
//! Every failure crossing the API boundary is identified by one numeric
//! code, shared verbatim by the server and its clients. The leading digit
//! groups the vocabulary: 0xxx general, 1xxx session, 2xxx member, 3xxx
//! photo upload, 9xxx system.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric error code carried in the API error envelope.
///
/// Serialized as its bare `u16` value so non-Rust clients can match on
/// plain numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // 0xxx general
    Success = 0,
    Unknown = 1,
    ValidationFailed = 2,
    NotFound = 3,
    AlreadyExists = 4,
    InvalidRequest = 5,

    // 1xxx session
    /// Protected route called without a session header
    SessionRequired = 1001,

    // 2xxx member
    /// Registration, or an email change, onto an email already in use
    DuplicateEmail = 2001,
    MemberNotFound = 2002,

    // 3xxx photo upload
    UploadFailed = 3001,
    FileTooLarge = 3002,
    UnsupportedFileFormat = 3003,
    InvalidImageFile = 3004,
    NoFileProvided = 3005,
    EmptyFile = 3006,
    /// The target path already holds a photo; uploads never overwrite
    PhotoAlreadyExists = 3007,
    NoFilename = 3008,

    // 9xxx system
    InternalError = 9001,
    /// Read against the member store failed
    LookupFailed = 9002,
    /// Write against the member store failed
    PersistFailed = 9003,
}

impl ErrorCode {
    /// Numeric value of this code
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default English message, used when no custom message is attached
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Success => "OK",
            Self::Unknown => "An unknown error occurred",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",

            Self::SessionRequired => "Login required",

            Self::DuplicateEmail => "A member with this email already exists",
            Self::MemberNotFound => "Member not found",

            Self::UploadFailed => "Photo upload failed",
            Self::FileTooLarge => "File too large",
            Self::UnsupportedFileFormat => "Unsupported file format",
            Self::InvalidImageFile => "Invalid image file",
            Self::NoFileProvided => "No file provided",
            Self::EmptyFile => "Empty file provided",
            Self::PhotoAlreadyExists => "A photo already exists at this path",
            Self::NoFilename => "No filename provided",

            Self::InternalError => "Internal server error",
            Self::LookupFailed => "Could not read from the member store",
            Self::PersistFailed => "Could not write to the member store",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// A `u16` that does not name any published error code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownErrorCode(pub u16);

impl fmt::Display for UnknownErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown error code: {}", self.0)
    }
}

impl std::error::Error for UnknownErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = UnknownErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,

            1001 => Self::SessionRequired,

            2001 => Self::DuplicateEmail,
            2002 => Self::MemberNotFound,

            3001 => Self::UploadFailed,
            3002 => Self::FileTooLarge,
            3003 => Self::UnsupportedFileFormat,
            3004 => Self::InvalidImageFile,
            3005 => Self::NoFileProvided,
            3006 => Self::EmptyFile,
            3007 => Self::PhotoAlreadyExists,
            3008 => Self::NoFilename,

            9001 => Self::InternalError,
            9002 => Self::LookupFailed,
            9003 => Self::PersistFailed,

            other => return Err(UnknownErrorCode(other)),
        };
        Ok(code)
    }
}
