//! Utility module
//!
//! - [`logger`] - tracing setup and log file housekeeping

pub mod logger;
