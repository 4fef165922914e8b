// Transient draft input for the not-yet-submitted task

use serde::{Deserialize, Serialize};

/// The "new task" entry field: one transient string, distinct from any
/// task in the list. Held by the view-side session until submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Draft {
    value: String,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the draft with the latest contents of the input field.
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// True when the draft trims to nothing.
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_starts_empty() {
        let draft = Draft::new();
        assert_eq!(draft.as_str(), "");
        assert!(draft.is_blank());
    }

    #[test]
    fn test_set_and_clear() {
        let mut draft = Draft::new();

        draft.set("Buy milk");
        assert_eq!(draft.as_str(), "Buy milk");
        assert!(!draft.is_blank());

        draft.clear();
        assert!(draft.is_blank());
    }

    #[test]
    fn test_whitespace_only_is_blank() {
        let mut draft = Draft::new();
        draft.set("   \t ");
        assert!(draft.is_blank());
        assert_eq!(draft.as_str(), "   \t ");
    }
}
