//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness and store round-trip checks
//! - [`auth`] - login by registered email
//! - [`members`] - member registry CRUD
//! - [`photos`] - photo upload and public serving

pub mod auth;
pub mod health;
pub mod members;
pub mod photos;
