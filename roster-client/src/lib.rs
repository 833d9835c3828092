//! Client library for the roster server
//!
//! Wraps the HTTP API and carries the session slot. Validation runs here,
//! before a request leaves the process; the server stores what it is sent.

pub mod client;
pub mod config;
pub mod error;

pub use client::{PhotoUpload, RosterClient};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};

// Shared types callers need at the API boundary
pub use shared::client::{LoginRequest, PhotoUploadResponse, SESSION_HEADER};
pub use shared::directory::{DirectoryView, MemberCard, OfficerRank};
pub use shared::models::{Member, MemberCreate, MemberUpdate};
