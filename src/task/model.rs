//! Task record definition

use std::fmt;

/// Unique task identifier derived from the creation timestamp in
/// milliseconds. Allocation lives in [`TaskList`](super::TaskList) so two
/// tasks created in the same millisecond still get distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub i64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A user-created to-do item. Timer state deliberately lives outside the
/// record: the view layer owns one timer panel per task, keyed by id, so
/// deleting the task is what tears the timer down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
}
