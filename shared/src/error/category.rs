//! Error categories derived from the code ranges

use super::codes::ErrorCode;

/// Coarse grouping of [`ErrorCode`]s by their thousands digit.
///
/// The server logs [`ErrorCategory::System`] failures at error level
/// before answering; the other categories are ordinary client outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 0..=999, shared vocabulary
    General,
    /// 1xxx, session handling
    Session,
    /// 2xxx, member records
    Member,
    /// 3xxx, photo uploads
    Photo,
    /// 9xxx, store and server faults
    System,
}

impl ErrorCategory {
    pub const fn from_code(code: u16) -> Self {
        match code {
            0..=999 => Self::General,
            1000..=1999 => Self::Session,
            2000..=2999 => Self::Member,
            3000..=3999 => Self::Photo,
            _ => Self::System,
        }
    }
}

impl ErrorCode {
    /// Category this code belongs to
    pub const fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
