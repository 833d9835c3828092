//! Server implementation
//!
//! HTTP server startup and lifecycle.

use std::net::SocketAddr;
use std::time::Duration;

use crate::core::{Config, Result, ServerState};

/// HTTP server
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create server with existing state (shared with tests)
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    pub async fn run(&self) -> Result<()> {
        let state = match &self.state {
            Some(state) => state.clone(),
            None => ServerState::initialize(&self.config).await?,
        };

        let app = crate::services::http::build_service(state);
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        tracing::info!("Roster server starting on {}", addr);

        let handle = axum_server::Handle::new();
        tokio::spawn(shutdown_on_ctrl_c(handle.clone()));

        axum_server::bind(addr)
            .handle(handle)
            .serve(app.into_make_service())
            .await?;

        Ok(())
    }
}

/// Once ctrl-c arrives, drain in-flight requests for up to 10 seconds
async fn shutdown_on_ctrl_c(handle: axum_server::Handle) {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutting down...");
    handle.graceful_shutdown(Some(Duration::from_secs(10)));
}
