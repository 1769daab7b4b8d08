//! HTTP adapter exposing the task service as a JSON REST API.
//!
//! Routes are nested under `/api/tasks`; see [`build_router`].

mod dto;
mod error;
mod handlers;
mod routes;

pub use dto::{CreateTaskBody, ListTasksQuery, StatisticsResponse, TaskResponse, UpdateTaskBody};
pub use error::ApiError;
pub use routes::{TASKS_BASE_PATH, build_router, cors_layer};
