//! Read-only assignee directory.
//!
//! # Responsibility
//! - Hold the static in-memory user list for assignment and authorship.
//! - Provide id lookups and select-option shaping for callers.
//!
//! # Invariants
//! - The directory never changes within a session; lookups are read-only.

use crate::model::assignee::Assignee;
use crate::model::todo::AssigneeId;

/// One entry of a selectable assignee list; `value = None` means unassigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssigneeOption {
    pub value: Option<AssigneeId>,
    pub label: String,
}

/// Static directory of users todos can reference.
pub struct AssigneeDirectory {
    assignees: Vec<Assignee>,
}

impl Default for AssigneeDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl AssigneeDirectory {
    /// Builds the directory with the built-in user set.
    pub fn new() -> Self {
        Self {
            assignees: vec![
                Assignee::new(1, "John Doe", "👨‍💻"),
                Assignee::new(2, "Jane Smith", "👩‍💻"),
                Assignee::new(3, "Bob Johnson", "👨‍💼"),
                Assignee::new(4, "Alice Brown", "👩‍🎨"),
            ],
        }
    }

    /// Builds a directory from a caller-supplied user set (tests, imports).
    pub fn with_assignees(assignees: Vec<Assignee>) -> Self {
        Self { assignees }
    }

    /// Returns a copy of all assignees.
    pub fn all(&self) -> Vec<Assignee> {
        self.assignees.clone()
    }

    /// Looks up one assignee by id.
    pub fn get(&self, id: AssigneeId) -> Option<&Assignee> {
        self.assignees.iter().find(|assignee| assignee.id == id)
    }

    /// Select options with "Unassigned" first, then every assignee by name.
    pub fn options(&self) -> Vec<AssigneeOption> {
        let mut options = vec![AssigneeOption {
            value: None,
            label: "Unassigned".to_string(),
        }];
        options.extend(self.assignees.iter().map(|assignee| AssigneeOption {
            value: Some(assignee.id),
            label: assignee.name.clone(),
        }));
        options
    }
}
