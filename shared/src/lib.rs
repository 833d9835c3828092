//! Shared types for the roster service
//!
//! Common types used across roster-server and roster-client: the member
//! record model, the unified error system, the pure directory derivation,
//! and the API request/response DTOs.

pub mod client;
pub mod directory;
pub mod error;
pub mod models;
pub mod validation;

pub use http;
pub use serde::{Deserialize, Serialize};

pub use directory::{DirectoryView, MemberCard, OfficerRank};
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use models::{Member, MemberCreate, MemberUpdate};
pub use validation::validate_payload;
