//! Request handlers for the task endpoints.

use super::{
    dto::{
        CreateTaskBody, ListTasksQuery, StatisticsResponse, TaskResponse, UpdateTaskBody,
    },
    error::ApiError,
};
use crate::task::{
    domain::{Task, TaskId, TaskStatus},
    ports::TaskRepository,
    services::TaskService,
};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use mockable::Clock;
use serde::Serialize;
use std::sync::Arc;

/// Handler state: the task service shared across requests.
pub type SharedTaskService<R, C> = Arc<TaskService<R, C>>;

/// Health check response.
#[derive(Debug, Serialize)]
pub(super) struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// `GET /health`.
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `GET /api/tasks`: status filter first, then a non-blank title search,
/// otherwise every task newest first.
pub(super) async fn list_tasks<R, C>(
    State(service): State<SharedTaskService<R, C>>,
    query: Result<Query<ListTasksQuery>, QueryRejection>,
) -> Result<Json<Vec<TaskResponse>>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let Query(ListTasksQuery { status, title }) = query?;

    let status_filter = status
        .as_deref()
        .filter(|raw| !raw.trim().is_empty())
        .map(TaskStatus::try_from)
        .transpose()
        .map_err(|err| ApiError::BadRequest(err.to_string()))?;
    let title_filter = title.as_deref().filter(|raw| !raw.trim().is_empty());

    let tasks = match (status_filter, title_filter) {
        (Some(wanted), _) => service.filter_by_status(wanted).await?,
        (None, Some(fragment)) => service.search_by_title(fragment).await?,
        (None, None) => service.list_all().await?,
    };
    Ok(Json(into_responses(tasks)))
}

/// `GET /api/tasks/{id}`.
pub(super) async fn get_task<R, C>(
    State(service): State<SharedTaskService<R, C>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<TaskResponse>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let task_id = parse_task_id(id)?;
    let task = service
        .find_by_id(task_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(task.into()))
}

/// `POST /api/tasks`.
pub(super) async fn create_task<R, C>(
    State(service): State<SharedTaskService<R, C>>,
    body: Result<Json<CreateTaskBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let Json(payload) = body?;
    let task = service.create(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(TaskResponse::from(task))))
}

/// `PUT /api/tasks/{id}`.
pub(super) async fn update_task<R, C>(
    State(service): State<SharedTaskService<R, C>>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<UpdateTaskBody>, JsonRejection>,
) -> Result<Json<TaskResponse>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let task_id = parse_task_id(id)?;
    let Json(payload) = body?;
    let task = service.update(task_id, payload.into()).await?;
    Ok(Json(task.into()))
}

/// `DELETE /api/tasks/{id}`.
pub(super) async fn delete_task<R, C>(
    State(service): State<SharedTaskService<R, C>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let task_id = parse_task_id(id)?;
    service.delete(task_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/tasks/statistics`.
pub(super) async fn task_statistics<R, C>(
    State(service): State<SharedTaskService<R, C>>,
) -> Result<Json<StatisticsResponse>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let stats = service.statistics().await?;
    Ok(Json(stats.into()))
}

fn parse_task_id(id: Result<Path<i64>, PathRejection>) -> Result<TaskId, ApiError> {
    let Path(raw) = id?;
    Ok(TaskId::new(raw))
}

fn into_responses(tasks: Vec<Task>) -> Vec<TaskResponse> {
    tasks.into_iter().map(TaskResponse::from).collect()
}
