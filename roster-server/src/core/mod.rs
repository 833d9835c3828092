//! Core module - server configuration, state, and error definitions
//!
//! # Module structure
//!
//! - [`Config`] - server configuration
//! - [`ServerState`] - server state
//! - [`Server`] - HTTP server
//! - [`ServerError`] - startup error type

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::Config;
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::ServerState;
