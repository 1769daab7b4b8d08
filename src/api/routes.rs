//! Router assembly and cross-cutting HTTP layers.

use super::handlers::{
    SharedTaskService, create_task, delete_task, get_task, health, list_tasks, task_statistics,
    update_task,
};
use crate::task::{ports::TaskRepository, services::TaskService};
use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::get,
};
use mockable::Clock;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Base path under which the task endpoints are mounted.
pub const TASKS_BASE_PATH: &str = "/api/tasks";

/// Builds the CORS policy: a single allowed origin, the CRUD methods plus
/// `OPTIONS`, mirrored request headers, and credentials.
///
/// Requests from any other origin receive no `Access-Control-Allow-Origin`
/// header.
#[must_use]
pub fn cors_layer(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

fn task_routes<R, C>() -> Router<SharedTaskService<R, C>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list_tasks::<R, C>).post(create_task::<R, C>))
        .route("/statistics", get(task_statistics::<R, C>))
        .route(
            "/{id}",
            get(get_task::<R, C>)
                .put(update_task::<R, C>)
                .delete(delete_task::<R, C>),
        )
}

/// Builds the HTTP router serving the task API and `/health`.
///
/// Requests are traced and subject to the CORS policy from [`cors_layer`].
pub fn build_router<R, C>(service: TaskService<R, C>, cors_origin: HeaderValue) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .nest(TASKS_BASE_PATH, task_routes::<R, C>())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origin))
        .with_state(Arc::new(service))
}
