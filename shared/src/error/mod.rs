//! One error vocabulary for the whole service.
//!
//! [`ErrorCode`] is the numeric wire vocabulary, grouped by thousands
//! digit into [`ErrorCategory`] ranges. Handlers work with [`AppError`]
//! and answer failures as an [`ApiResponse`] envelope; success responses
//! are the endpoint's bare payload.
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::validation("Missing required field").with_detail("field", "email");
//! assert_eq!(err.code, ErrorCode::ValidationFailed);
//! assert_eq!(err.http_status(), http::StatusCode::BAD_REQUEST);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, UnknownErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
