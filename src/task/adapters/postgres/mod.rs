//! `PostgreSQL` adapters for task persistence.

mod bootstrap;
mod models;
mod repository;
mod schema;

pub use bootstrap::{TASKS_SCHEMA_SQL, apply_schema, build_pool};
pub use repository::{PostgresTaskRepository, TaskPgPool};
