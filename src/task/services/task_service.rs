//! Service layer for task creation, partial updates, queries, and statistics.

use crate::task::{
    domain::{
        NewTask, Task, TaskChanges, TaskDescription, TaskDomainError, TaskId, TaskStatistics,
        TaskStatus, TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Request payload for creating a task.
///
/// The title is optional here so that a missing title surfaces as a
/// validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: Option<String>,
    description: Option<String>,
    status: Option<TaskStatus>,
}

impl CreateTaskRequest {
    /// Creates a request with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Sets the task title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the initial status. Without it the task starts as
    /// [`TaskStatus::Pending`].
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Request payload for a partial task update.
///
/// Only the fields that are set overwrite stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: Option<String>,
    description: Option<String>,
    status: Option<TaskStatus>,
}

impl UpdateTaskRequest {
    /// Creates a request that changes nothing but the modification timestamp.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the task title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the task status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    fn into_changes(self) -> Result<TaskChanges, TaskDomainError> {
        Ok(TaskChanges {
            title: self.title.map(TaskTitle::new).transpose()?,
            description: self.description.map(TaskDescription::new).transpose()?,
            status: self.status,
        })
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),
    /// No task exists with the identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskServiceError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other @ TaskRepositoryError::Persistence(_) => Self::Repository(other),
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Lists every task, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn list_all(&self) -> TaskServiceResult<Vec<Task>> {
        debug!("listing all tasks");
        Ok(self.repository.list_all_newest_first().await?)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn find_by_id(&self, id: TaskId) -> TaskServiceResult<Option<Task>> {
        debug!(task_id = %id, "fetching task");
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Creates a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the title is missing,
    /// blank, or too long, or the description is too long. Nothing is
    /// persisted in that case. Returns [`TaskServiceError::Repository`] when
    /// the insert fails.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let CreateTaskRequest {
            title,
            description,
            status,
        } = request;

        let new_task = validate_new_task(title, description, status, &*self.clock)
            .inspect_err(|err| warn!(error = %err, "rejected task creation"))?;
        let task = self.repository.insert(&new_task).await?;
        info!(task_id = %task.id(), status = %task.status(), "created task");
        Ok(task)
    }

    /// Applies a partial update to an existing task.
    ///
    /// Supplied fields overwrite stored values; the modification timestamp is
    /// always refreshed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when a supplied field is
    /// invalid, [`TaskServiceError::NotFound`] when the task does not exist,
    /// or [`TaskServiceError::Repository`] when persistence fails.
    pub async fn update(&self, id: TaskId, request: UpdateTaskRequest) -> TaskServiceResult<Task> {
        let changes = request
            .into_changes()
            .inspect_err(|err| warn!(task_id = %id, error = %err, "rejected task update"))?;

        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))?;
        task.apply_changes(changes, &*self.clock);

        let updated = self.repository.update(&task).await?;
        info!(task_id = %id, status = %updated.status(), "updated task");
        Ok(updated)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist,
    /// or [`TaskServiceError::Repository`] when persistence fails.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        if !self.repository.exists_by_id(id).await? {
            return Err(TaskServiceError::NotFound(id));
        }
        self.repository.delete_by_id(id).await?;
        info!(task_id = %id, "deleted task");
        Ok(())
    }

    /// Returns the tasks with the given status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn filter_by_status(&self, status: TaskStatus) -> TaskServiceResult<Vec<Task>> {
        debug!(%status, "filtering tasks by status");
        Ok(self.repository.find_by_status(status).await?)
    }

    /// Returns the tasks whose title contains `fragment`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn search_by_title(&self, fragment: &str) -> TaskServiceResult<Vec<Task>> {
        debug!(fragment, "searching tasks by title");
        Ok(self.repository.find_by_title_containing(fragment).await?)
    }

    /// Counts the stored tasks in each status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when a count fails.
    pub async fn statistics(&self) -> TaskServiceResult<TaskStatistics> {
        let pending = self.repository.count_by_status(TaskStatus::Pending).await?;
        let in_progress = self
            .repository
            .count_by_status(TaskStatus::InProgress)
            .await?;
        let done = self.repository.count_by_status(TaskStatus::Done).await?;
        Ok(TaskStatistics {
            pending,
            in_progress,
            done,
        })
    }
}

fn validate_new_task(
    title: Option<String>,
    description: Option<String>,
    status: Option<TaskStatus>,
    clock: &impl Clock,
) -> Result<NewTask, TaskDomainError> {
    let validated_title = TaskTitle::new(title.ok_or(TaskDomainError::MissingTitle)?)?;
    let validated_description = description.map(TaskDescription::new).transpose()?;
    Ok(NewTask::new(
        validated_title,
        validated_description,
        status,
        clock,
    ))
}
