//! Ordered task collection

use chrono::Utc;

use super::{Task, TaskId};

/// Insertion-ordered collection of tasks. Sole owner and mutator of the
/// task records; nothing else appends or removes.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    last_id: i64,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a task with a fresh id and returns it. Empty or
    /// whitespace-only text is a silent no-op.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.allocate_id();
        self.tasks.push(Task {
            id,
            text: text.to_string(),
        });
        Some(id)
    }

    /// Removes the task with the given id, returning whether it existed.
    pub fn remove(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Creation-timestamp id, bumped past the previous allocation when two
    /// adds land in the same millisecond.
    fn allocate_id(&mut self) -> TaskId {
        let mut id = Utc::now().timestamp_millis();
        if id <= self.last_id {
            id = self.last_id + 1;
        }
        self.last_id = id;
        TaskId(id)
    }
}
