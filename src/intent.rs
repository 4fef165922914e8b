// User intents forwarded by the view layer

use serde::{Deserialize, Serialize};

/// One discrete user action against the task list.
///
/// The view layer translates UI events into intents and dispatches them
/// through [`crate::TaskList::apply`]. The JSON encoding tags each
/// variant with an `op` field, e.g. `{"op":"toggle_done","index":0}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Intent {
    /// Append a new task; blank text is dropped by the store.
    Add { text: String },
    /// Flip the completion flag of the task at `index`.
    ToggleDone { index: usize },
    /// Remove the task at `index`.
    Delete { index: usize },
    /// Enter or leave inline-edit mode for the task at `index`.
    SetEditing { index: usize, editing: bool },
    /// Replace the text of the task at `index` verbatim.
    EditText { index: usize, text: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_serialization() {
        let intent = Intent::SetEditing { index: 2, editing: true };
        let json = serde_json::to_string(&intent).unwrap();
        assert_eq!(json, r#"{"op":"set_editing","index":2,"editing":true}"#);
    }

    #[test]
    fn test_intent_deserialization() {
        let intent: Intent = serde_json::from_str(r#"{"op":"add","text":"Buy milk"}"#).unwrap();
        assert_eq!(intent, Intent::Add { text: "Buy milk".to_string() });

        let intent: Intent = serde_json::from_str(r#"{"op":"delete","index":0}"#).unwrap();
        assert_eq!(intent, Intent::Delete { index: 0 });
    }

    #[test]
    fn test_negative_index_is_rejected_at_parse() {
        let result: Result<Intent, _> = serde_json::from_str(r#"{"op":"delete","index":-1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_op_is_rejected() {
        let result: Result<Intent, _> = serde_json::from_str(r#"{"op":"reorder","index":0}"#);
        assert!(result.is_err());
    }
}
