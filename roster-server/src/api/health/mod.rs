//! Health check routes
//!
//! # Routes
//!
//! | Path | Method | Purpose | Session |
//! |------|--------|---------|---------|
//! | /health | GET | liveness and version | none |
//! | /health/detailed | GET | per-component probes and uptime | none |

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use std::sync::OnceLock;
use std::time::{Instant, SystemTime};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/health", get(liveness))
        .route("/health/detailed", get(readiness))
}

#[derive(Serialize)]
struct Liveness {
    status: &'static str,
    version: &'static str,
}

/// Readiness report: overall status is `healthy` only when every
/// component probe passed, otherwise `degraded`.
#[derive(Serialize)]
struct Readiness {
    status: &'static str,
    version: &'static str,
    uptime_seconds: u64,
    checks: Components,
}

#[derive(Serialize)]
struct Components {
    database: Probe,
    photo_store: Probe,
}

/// Outcome of one component probe
#[derive(Serialize)]
struct Probe {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    latency_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl Probe {
    fn passed(latency_ms: Option<u64>) -> Self {
        Self {
            status: "ok",
            latency_ms,
            message: None,
        }
    }

    fn failed(message: String) -> Self {
        Self {
            status: "error",
            latency_ms: None,
            message: Some(message),
        }
    }

    fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

// Anchored the first time uptime is asked for
static STARTED_AT: OnceLock<SystemTime> = OnceLock::new();

fn uptime_seconds() -> u64 {
    STARTED_AT
        .get_or_init(SystemTime::now)
        .elapsed()
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

async fn liveness() -> Json<Liveness> {
    Json(Liveness {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn readiness(State(state): State<ServerState>) -> Json<Readiness> {
    let started = Instant::now();
    let database = match state.db.query("RETURN 1").await {
        Ok(_) => Probe::passed(Some(started.elapsed().as_millis() as u64)),
        Err(e) => Probe::failed(format!("Database round trip failed: {e}")),
    };

    let photo_store = match std::fs::metadata(state.config.photos_dir()) {
        Ok(meta) if meta.is_dir() => Probe::passed(None),
        Ok(_) => Probe::failed("Photos path is not a directory".to_string()),
        Err(e) => Probe::failed(format!("Photos directory unavailable: {e}")),
    };

    let healthy = database.is_ok() && photo_store.is_ok();
    Json(Readiness {
        status: if healthy { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: uptime_seconds(),
        checks: Components {
            database,
            photo_store,
        },
    })
}
