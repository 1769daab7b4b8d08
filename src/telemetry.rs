//! Process-wide `tracing` subscriber setup.

use thiserror::Error;
use tracing_subscriber::{
    EnvFilter, filter::ParseError, fmt, layer::SubscriberExt, util::SubscriberInitExt,
    util::TryInitError,
};

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter '{directive}': {source}")]
    InvalidFilter {
        /// The rejected directive.
        directive: String,
        /// Parser failure.
        #[source]
        source: ParseError,
    },

    /// A global subscriber is already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Install(#[from] TryInitError),
}

/// Installs the global subscriber.
///
/// `directive` uses `EnvFilter` syntax, for example
/// `taskdesk=debug,tower_http=info`. When `json` is set, events are written
/// as JSON lines; otherwise the compact human-readable format is used.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] for a malformed directive and
/// [`TelemetryError::Install`] when a subscriber has already been set.
pub fn init_tracing(directive: &str, json: bool) -> Result<(), TelemetryError> {
    let filter =
        EnvFilter::try_new(directive).map_err(|source| TelemetryError::InvalidFilter {
            directive: directive.to_owned(),
            source,
        })?;

    let text_layer = (!json).then(|| fmt::layer().with_target(true));
    let json_layer = json.then(|| fmt::layer().json().with_current_span(true));

    tracing_subscriber::registry()
        .with(filter)
        .with(text_layer)
        .with(json_layer)
        .try_init()?;
    Ok(())
}
