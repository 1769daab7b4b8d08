//! Aggregate task counts by status.

use super::TaskStatus;

/// Number of stored tasks in each status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStatistics {
    /// Tasks in [`TaskStatus::Pending`].
    pub pending: u64,
    /// Tasks in [`TaskStatus::InProgress`].
    pub in_progress: u64,
    /// Tasks in [`TaskStatus::Done`].
    pub done: u64,
}

impl TaskStatistics {
    /// Returns the count recorded for `status`.
    #[must_use]
    pub const fn count(&self, status: TaskStatus) -> u64 {
        match status {
            TaskStatus::Pending => self.pending,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Done => self.done,
        }
    }

    /// Returns the number of tasks across all statuses.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.pending
            .saturating_add(self.in_progress)
            .saturating_add(self.done)
    }
}
