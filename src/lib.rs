//! Taskdesk: a small task-management REST API.
//!
//! Tasks carry a title, an optional description, a status, and timestamps.
//! They can be created, read, updated, deleted, filtered by status or title,
//! and summarized as per-status counts.
//!
//! # Architecture
//!
//! Taskdesk follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`task`]: Task domain, repository port, adapters, and service
//! - [`api`]: HTTP routes, handlers, and wire types
//! - [`config`]: Command-line and environment configuration
//! - [`telemetry`]: Tracing subscriber setup
//! - [`server`]: Serving with graceful shutdown

pub mod api;
pub mod config;
pub mod server;
pub mod task;
pub mod telemetry;
