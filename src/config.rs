//! Runtime configuration for the `taskdesk` server.
//!
//! Every option can be given as a command-line flag or through the
//! environment variable named next to it.

use axum::http::HeaderValue;
use clap::Parser;
use thiserror::Error;

/// Default listen address.
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Default allowed cross-origin caller.
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Default `tracing` filter directive.
pub const DEFAULT_LOG_FILTER: &str = "taskdesk=info,tower_http=info";

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "taskdesk")]
#[command(about = "Task-management REST API")]
#[command(version)]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[arg(long, env = "TASKDESK_BIND", default_value = DEFAULT_BIND)]
    pub bind: String,

    /// `PostgreSQL` connection URL. Tasks are kept in memory when unset.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum number of pooled database connections.
    #[arg(long, env = "TASKDESK_POOL_SIZE", default_value_t = 10)]
    pub pool_size: u32,

    /// The single origin allowed to make cross-origin requests.
    #[arg(long, env = "TASKDESK_CORS_ORIGIN", default_value = DEFAULT_CORS_ORIGIN)]
    pub cors_origin: String,

    /// `tracing` filter directive.
    #[arg(long, env = "RUST_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,

    /// Emit logs as JSON lines instead of human-readable text.
    #[arg(long, env = "TASKDESK_JSON_LOGS")]
    pub json_logs: bool,
}

/// Errors raised while interpreting configuration values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The CORS origin is not a valid header value.
    #[error("invalid CORS origin '{0}'")]
    InvalidCorsOrigin(String),

    /// The pool must hold at least one connection.
    #[error("database pool size must be at least 1")]
    EmptyPool,
}

impl ServerConfig {
    /// Returns the CORS origin as a header value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCorsOrigin`] when the origin is blank or
    /// contains characters not allowed in a header.
    pub fn cors_origin_header(&self) -> Result<HeaderValue, ConfigError> {
        let origin = self.cors_origin.trim();
        if origin.is_empty() {
            return Err(ConfigError::InvalidCorsOrigin(self.cors_origin.clone()));
        }
        HeaderValue::from_str(origin)
            .map_err(|_| ConfigError::InvalidCorsOrigin(self.cors_origin.clone()))
    }

    /// Returns the validated pool size.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPool`] when the pool size is zero.
    pub const fn checked_pool_size(&self) -> Result<u32, ConfigError> {
        if self.pool_size == 0 {
            return Err(ConfigError::EmptyPool);
        }
        Ok(self.pool_size)
    }
}
