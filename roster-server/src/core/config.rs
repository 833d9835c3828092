use std::path::PathBuf;

/// Server configuration
///
/// # Environment variables
///
/// Every setting can be overridden through the environment:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | /var/lib/roster | Work directory (database, photos, logs) |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | PUBLIC_BASE_URL | http://localhost:3000 | Base of the public photo URLs |
/// | ENVIRONMENT | development | Runtime environment |
/// | LOG_LEVEL | info | Log level filter |
/// | LOG_TO_FILE | false | Also write daily-rolling log files |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/roster HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Work directory holding the database, stored photos, and logs
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Base URL photo paths are resolved against when building public URLs
    pub public_base_url: String,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Log level filter
    pub log_level: String,
    /// Whether to also write daily-rolling log files under the work dir
    pub log_to_file: bool,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to their defaults.
    pub fn from_env() -> Self {
        let http_port = std::env::var("HTTP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/roster".into()),
            http_port,
            public_base_url: std::env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| format!("http://localhost:{http_port}")),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_to_file: std::env::var("LOG_TO_FILE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }

    /// Override the work directory and port
    ///
    /// Used by tests running against a temp directory.
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config.public_base_url = format!("http://localhost:{http_port}");
        config
    }

    /// Directory holding the embedded database
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// Directory holding uploaded photos
    pub fn photos_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("photos")
    }

    /// Directory holding rolling log files
    pub fn logs_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// Create the work directory layout if it does not exist yet
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.photos_dir())?;
        std::fs::create_dir_all(self.logs_dir())?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
