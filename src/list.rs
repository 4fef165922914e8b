// Task list store: ordered tasks with positional mutation operations

use crate::intent::Intent;
use crate::task::{Task, TaskId};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Ordered task list, insertion order preserved.
///
/// All mutating operations are positional and synchronous. An index past
/// the end of the list is treated as a stale position: the operation is
/// skipped and the list stays untouched. Returns report whether a
/// mutation was applied; there is no error channel.
///
/// The list expects a single logical owner. The view layer serializes
/// intents into it one at a time, each running to completion before the
/// next.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Task at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Current position of the task with the given id.
    ///
    /// Positions shift when an earlier task is deleted; callers holding a
    /// [`TaskId`] re-derive the position here instead of caching indices
    /// across mutations.
    pub fn position_of(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == *id)
    }

    /// Append a new task built from `raw_text`.
    ///
    /// The text is stored trimmed. Blank input (empty after trimming)
    /// adds nothing and returns `None`; otherwise the new task starts
    /// not done and not editing, and its index is returned.
    pub fn add(&mut self, raw_text: &str) -> Option<usize> {
        let trimmed = raw_text.trim();
        if trimmed.is_empty() {
            debug!("add: blank input, nothing added");
            return None;
        }

        self.tasks.push(Task::new(trimmed));
        let index = self.tasks.len() - 1;
        debug!(index, text = trimmed, "add: task appended");
        Some(index)
    }

    /// Flip the completion flag of the task at `index`.
    pub fn toggle_done(&mut self, index: usize) -> bool {
        let Some(task) = self.tasks.get_mut(index) else {
            warn!(index, len = self.tasks.len(), "toggle_done: index out of range, skipping");
            return false;
        };

        task.done = !task.done;
        debug!(index, done = task.done, "toggle_done: flag flipped");
        true
    }

    /// Remove the task at `index`. Later tasks shift down one position,
    /// in the same relative order.
    pub fn delete(&mut self, index: usize) -> bool {
        if index >= self.tasks.len() {
            warn!(index, len = self.tasks.len(), "delete: index out of range, skipping");
            return false;
        }

        let task = self.tasks.remove(index);
        debug!(index, text = %task.text, "delete: task removed");
        true
    }

    /// Enter (`true`) or leave (`false`) inline-edit mode at `index`.
    ///
    /// Leaving edit mode is the "Save" action. Save does not trim or
    /// validate the text, so a task edited down to nothing is saved
    /// empty.
    pub fn set_editing(&mut self, index: usize, editing: bool) -> bool {
        let Some(task) = self.tasks.get_mut(index) else {
            warn!(index, len = self.tasks.len(), "set_editing: index out of range, skipping");
            return false;
        };

        task.editing = editing;
        debug!(index, editing, "set_editing: flag set");
        true
    }

    /// Replace the text of the task at `index` verbatim, no trimming.
    pub fn edit_text(&mut self, index: usize, new_text: impl Into<String>) -> bool {
        let Some(task) = self.tasks.get_mut(index) else {
            warn!(index, len = self.tasks.len(), "edit_text: index out of range, skipping");
            return false;
        };

        task.text = new_text.into();
        debug!(index, "edit_text: text replaced");
        true
    }

    /// Dispatch one user intent into the matching operation.
    ///
    /// Returns whether the list was mutated.
    pub fn apply(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::Add { text } => self.add(&text).is_some(),
            Intent::ToggleDone { index } => self.toggle_done(index),
            Intent::Delete { index } => self.delete(index),
            Intent::SetEditing { index, editing } => self.set_editing(index, editing),
            Intent::EditText { index, text } => self.edit_text(index, text),
        }
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
