//! Application services for task management.

mod task_service;

pub use task_service::{
    CreateTaskRequest, TaskService, TaskServiceError, TaskServiceResult, UpdateTaskRequest,
};
