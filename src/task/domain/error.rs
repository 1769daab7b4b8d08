//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// No title was supplied.
    #[error("task title is required")]
    MissingTitle,

    /// The title is empty after trimming.
    #[error("task title must not be blank")]
    BlankTitle,

    /// The title exceeds the persisted column width.
    #[error("task title must be at most {max} characters, got {actual}")]
    TitleTooLong {
        /// Maximum accepted length in characters.
        max: usize,
        /// Length of the rejected title in characters.
        actual: usize,
    },

    /// The description exceeds the persisted column width.
    #[error("task description must be at most {max} characters, got {actual}")]
    DescriptionTooLong {
        /// Maximum accepted length in characters.
        max: usize,
        /// Length of the rejected description in characters.
        actual: usize,
    },
}

/// Error returned while parsing task statuses from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
