//! Task management for taskdesk.
//!
//! A task is a titled to-do item with an optional description, a status, and
//! creation and modification timestamps. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
