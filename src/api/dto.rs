//! JSON request and response bodies.

use crate::task::{
    domain::{Task, TaskStatistics, TaskStatus},
    services::{CreateTaskRequest, UpdateTaskRequest},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wire representation of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    /// Storage-assigned identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Optional description; `null` when unset.
    pub description: Option<String>,
    /// Task status.
    pub status: TaskStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp; `null` until the first update.
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id().value(),
            title: task.title().as_str().to_owned(),
            description: task.description().map(|text| text.as_str().to_owned()),
            status: task.status(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}

/// Body of `POST /api/tasks`.
///
/// Server-managed fields (`id`, `createdAt`, `updatedAt`) are ignored if a
/// client sends them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskBody {
    /// Task title; required by validation, not by deserialization.
    pub title: Option<String>,
    /// Optional description.
    pub description: Option<String>,
    /// Optional initial status.
    pub status: Option<TaskStatus>,
}

impl From<CreateTaskBody> for CreateTaskRequest {
    fn from(body: CreateTaskBody) -> Self {
        let CreateTaskBody {
            title,
            description,
            status,
        } = body;
        let mut request = Self::default();
        if let Some(value) = title {
            request = request.with_title(value);
        }
        if let Some(value) = description {
            request = request.with_description(value);
        }
        if let Some(value) = status {
            request = request.with_status(value);
        }
        request
    }
}

/// Body of `PUT /api/tasks/{id}`; absent or `null` fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskBody {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement status.
    pub status: Option<TaskStatus>,
}

impl From<UpdateTaskBody> for UpdateTaskRequest {
    fn from(body: UpdateTaskBody) -> Self {
        let UpdateTaskBody {
            title,
            description,
            status,
        } = body;
        let mut request = Self::new();
        if let Some(value) = title {
            request = request.with_title(value);
        }
        if let Some(value) = description {
            request = request.with_description(value);
        }
        if let Some(value) = status {
            request = request.with_status(value);
        }
        request
    }
}

/// Query string of `GET /api/tasks`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListTasksQuery {
    /// Status filter, matched case-insensitively. Takes precedence over
    /// `title`.
    pub status: Option<String>,
    /// Title fragment; blank values are ignored.
    pub title: Option<String>,
}

/// Body of `GET /api/tasks/statistics`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsResponse {
    /// Tasks in `PENDING`.
    pub pending: u64,
    /// Tasks in `IN_PROGRESS`.
    pub in_progress: u64,
    /// Tasks in `DONE`.
    pub done: u64,
    /// Sum of the three counts.
    pub total: u64,
}

impl From<TaskStatistics> for StatisticsResponse {
    fn from(stats: TaskStatistics) -> Self {
        Self {
            pending: stats.pending,
            in_progress: stats.in_progress,
            done: stats.done,
            total: stats.total(),
        }
    }
}
