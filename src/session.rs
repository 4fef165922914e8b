// View-side session: the task list plus the draft input

use crate::draft::Draft;
use crate::intent::Intent;
use crate::list::TaskList;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Single-owner surface the view layer drives.
///
/// Owns the one task list instance together with the draft input. Every
/// mutation goes through `&mut self`, so user intents are applied the
/// way an event loop dispatches them: one at a time, each running to
/// completion before the next.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    list: TaskList,
    draft: Draft,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> &TaskList {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut TaskList {
        &mut self.list
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Forward a change of the draft input field.
    pub fn set_draft(&mut self, value: impl Into<String>) {
        self.draft.set(value);
    }

    /// Submit the draft as a new task.
    ///
    /// The draft is cleared only when the add actually appended a task;
    /// a blank draft stays in the input field untouched.
    pub fn submit(&mut self) -> Option<usize> {
        let index = self.list.add(self.draft.as_str())?;
        self.draft.clear();
        debug!(index, "submit: draft accepted and cleared");
        Some(index)
    }

    /// Dispatch one user intent into the task list.
    pub fn apply(&mut self, intent: Intent) -> bool {
        self.list.apply(intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_adds_trimmed_and_clears_draft() {
        let mut session = Session::new();
        session.set_draft("  Buy milk  ");

        let index = session.submit().unwrap();
        assert_eq!(index, 0);
        assert_eq!(session.list().get(0).unwrap().text, "Buy milk");
        assert!(session.draft().is_blank());
    }

    #[test]
    fn test_blank_submit_keeps_draft_and_list() {
        let mut session = Session::new();
        session.set_draft("   ");

        assert_eq!(session.submit(), None);
        assert!(session.list().is_empty());
        // The blank draft is not consumed
        assert_eq!(session.draft().as_str(), "   ");
    }

    #[test]
    fn test_submit_twice_appends_in_order() {
        let mut session = Session::new();

        session.set_draft("first");
        session.submit().unwrap();
        session.set_draft("second");
        session.submit().unwrap();

        assert_eq!(session.list().len(), 2);
        assert_eq!(session.list().get(1).unwrap().text, "second");
    }

    #[test]
    fn test_apply_reaches_the_list() {
        let mut session = Session::new();
        session.set_draft("task");
        session.submit().unwrap();

        assert!(session.apply(Intent::ToggleDone { index: 0 }));
        assert!(session.list().get(0).unwrap().done);

        assert!(!session.apply(Intent::ToggleDone { index: 5 }));
    }
}
