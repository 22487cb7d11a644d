//! Assignee reference entity.
//!
//! # Invariants
//! - Assignees are static reference data within one session.
//! - Todos and comments reference assignees by id, never by ownership.

use crate::model::todo::AssigneeId;
use serde::{Deserialize, Serialize};

/// A user that todos can be assigned to and comments authored by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    pub id: AssigneeId,
    /// Display name.
    pub name: String,
    /// Single avatar glyph rendered next to the name.
    pub avatar: String,
}

impl Assignee {
    pub fn new(id: AssigneeId, name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            avatar: avatar.into(),
        }
    }
}
