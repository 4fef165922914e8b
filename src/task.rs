// Task records and stable identity

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable opaque identifier assigned to a task at creation.
///
/// List operations are positional and positions shift on delete; the id
/// lets a caller re-locate a task via [`crate::TaskList::position_of`]
/// instead of caching indices across mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One to-do item: text content, completion flag, and inline-edit flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub done: bool,
    pub editing: bool,
}

impl Task {
    /// Create a task in the viewing state, not yet completed.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            text: text.into(),
            done: false,
            editing: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new("Buy milk");
        assert_eq!(task.text, "Buy milk");
        assert!(!task.done);
        assert!(!task.editing);
    }

    #[test]
    fn test_task_ids_are_unique() {
        let a = Task::new("same text");
        let b = Task::new("same text");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_task_serialization() {
        let task = Task::new("Write report");
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"text\":\"Write report\""));
        assert!(json.contains("\"done\":false"));

        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }
}
