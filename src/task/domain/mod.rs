//! Domain model for task management.
//!
//! The task domain owns validation of titles and descriptions, the status
//! enumeration, and timestamp bookkeeping while keeping all infrastructure
//! concerns outside of the domain boundary.

mod error;
mod ids;
mod statistics;
mod status;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS, TaskDescription, TaskId, TaskTitle};
pub use statistics::TaskStatistics;
pub use status::TaskStatus;
pub use task::{NewTask, PersistedTaskData, Task, TaskChanges};
