//! Roster Server - membership directory for a community club
//!
//! # Overview
//!
//! The server keeps one table of members, addressed by email, plus the
//! photos they upload. Clients pull the full member list and derive every
//! directory view locally; the server stays a thin persistence surface.
//!
//! - **Database** (`db`): embedded SurrealDB storage and the member repository
//! - **Session** (`session`): client-reported identity, trusted as presented
//! - **Photos** (`services/photo_store`): validated upload, public serving
//! - **HTTP API** (`api`): RESTful routes
//!
//! # Module structure
//!
//! ```text
//! roster-server/src/
//! ├── core/          # config, state, server lifecycle
//! ├── session/       # identity header and its middleware
//! ├── services/      # photo store, router assembly
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # database layer
//! └── utils/         # logging
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod session;
pub mod utils;

pub use crate::core::{Config, Server, ServerState};
pub use session::{CurrentMember, SESSION_HEADER};

// Error vocabulary is shared with the client crates
pub use shared::{ApiResponse, AppError, AppResult, ErrorCode};

pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};

// Audit-trail log line under the dedicated "security" target
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),* $(,)?) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// Prepare the process environment: .env file, then logging
pub fn setup_environment() -> crate::core::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();

    if config.log_to_file {
        config.ensure_work_dir_structure()?;
        let logs_dir = config.logs_dir();
        init_logger_with_file(Some(&config.log_level), logs_dir.to_str());
        if let Err(e) = cleanup_old_logs(&logs_dir.to_string_lossy(), 30) {
            tracing::warn!("Log cleanup failed: {}", e);
        }
    } else {
        init_logger_with_file(Some(&config.log_level), None);
    }

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ____             __
   / __ \____  _____/ /____  _____
  / /_/ / __ \/ ___/ __/ _ \/ ___/
 / _, _/ /_/ (__  ) /_/  __/ /
/_/ |_|\____/____/\__/\___/_/
    "#
    );
}
