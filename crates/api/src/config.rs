//! # API Configuration Module
//!
//! Loads the agenda server configuration from environment variables, with
//! defaults where appropriate.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `DATABASE_URL`: PostgreSQL connection string (optional, in-memory store when unset)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)
//! - `AGENDA_DAY_START_HOUR`, `AGENDA_DAY_END_HOUR`: visible hours of the grid (default: 8 and 18)
//! - `AGENDA_CELL_MINUTES`: grid resolution (default: 5)
//! - `AGENDA_PIXELS_PER_MINUTE`, `AGENDA_MIN_SLOT_HEIGHT`: slot sizing (default: 2.0 and 20.0)

use std::{env, str::FromStr};

use eyre::{Result, WrapErr};
use jobfair_core::grid::TimeGrid;
use tracing::Level;

/// Configuration for the agenda API server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use jobfair_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}", config.server_addr());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// PostgreSQL connection string; slots are kept in memory without one
    pub database_url: Option<String>,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Layout of the weekly calendar grid
    pub grid: TimeGrid,
}

/// Reads `key`, falling back to `default` when unset.
fn var_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .wrap_err_with(|| format!("Invalid {} value '{}'", key, raw)),
        Err(_) => Ok(default),
    }
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - `API_PORT` cannot be parsed as a u16
    /// - a grid variable cannot be parsed, or the grid it describes is invalid
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = var_or("API_PORT", 3000u16)?;

        // Database settings
        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());

        // Logging settings
        let log_level = match env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS").ok().map(|origins| {
            origins.split(',').map(|s| s.trim().to_string()).collect()
        });

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        let defaults = TimeGrid::default();
        let grid = TimeGrid::new(
            var_or("AGENDA_DAY_START_HOUR", defaults.day_start_hour())?,
            var_or("AGENDA_DAY_END_HOUR", defaults.day_end_hour())?,
            var_or("AGENDA_CELL_MINUTES", defaults.cell_minutes())?,
            var_or("AGENDA_PIXELS_PER_MINUTE", defaults.pixels_per_minute())?,
            var_or("AGENDA_MIN_SLOT_HEIGHT", defaults.min_slot_height())?,
        )
        .wrap_err("Invalid agenda grid configuration")?;

        Ok(Self {
            host,
            port,
            database_url,
            log_level,
            cors_origins,
            request_timeout,
            grid,
        })
    }

    /// Returns the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
