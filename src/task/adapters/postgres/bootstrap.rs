//! Connection pool construction and schema bootstrap.

use super::repository::TaskPgPool;
use crate::task::ports::{TaskRepositoryError, TaskRepositoryResult};
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};

/// Idempotent DDL creating the `tasks` table and its indexes.
pub const TASKS_SCHEMA_SQL: &str =
    include_str!("../../../../migrations/2026-10-17-000000_create_tasks/up.sql");

/// Builds a connection pool for `database_url` holding at most `max_size`
/// connections.
///
/// # Errors
///
/// Returns [`TaskRepositoryError::Persistence`] when the pool cannot open its
/// initial connection.
pub fn build_pool(database_url: &str, max_size: u32) -> TaskRepositoryResult<TaskPgPool> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder()
        .max_size(max_size)
        .build(manager)
        .map_err(TaskRepositoryError::persistence)
}

/// Applies [`TASKS_SCHEMA_SQL`] using a pooled connection.
///
/// # Errors
///
/// Returns [`TaskRepositoryError::Persistence`] when a connection cannot be
/// acquired or the DDL fails.
pub async fn apply_schema(pool: &TaskPgPool) -> TaskRepositoryResult<()> {
    let pool_handle = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = pool_handle
            .get()
            .map_err(TaskRepositoryError::persistence)?;
        connection
            .batch_execute(TASKS_SCHEMA_SQL)
            .map_err(TaskRepositoryError::persistence)
    })
    .await
    .map_err(TaskRepositoryError::persistence)?
}
