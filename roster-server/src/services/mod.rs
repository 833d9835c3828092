//! Service layer
//!
//! # Services
//!
//! - [`PhotoStore`] - member photo storage on the local filesystem
//! - [`http`] - router assembly and HTTP middleware

pub mod http;
pub mod photo_store;

pub use photo_store::{PhotoStore, StoredPhoto};
