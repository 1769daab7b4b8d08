//! Repository port for task persistence, lookup, and aggregation.

use crate::task::domain::{NewTask, Task, TaskId, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Implementations perform no validation; every method maps to a single
/// storage statement.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Inserts a new task and returns it with its storage-assigned identifier.
    async fn insert(&self, task: &NewTask) -> TaskRepositoryResult<Task>;

    /// Overwrites every mutable column of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<Task>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns all tasks with the given status.
    async fn find_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns all tasks whose title contains `fragment`, ignoring case.
    ///
    /// The fragment matches literally; pattern metacharacters carry no
    /// special meaning.
    async fn find_by_title_containing(&self, fragment: &str) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns every task ordered by creation time, newest first.
    ///
    /// Tasks created at the same instant are ordered by descending
    /// identifier.
    async fn list_all_newest_first(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Counts the tasks with the given status.
    async fn count_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<u64>;

    /// Deletes a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Returns whether a task with the identifier exists.
    async fn exists_by_id(&self, id: TaskId) -> TaskRepositoryResult<bool>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
