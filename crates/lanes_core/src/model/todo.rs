//! Todo and comment domain records.
//!
//! # Responsibility
//! - Define the todo record shared by board, search and persistence layers.
//! - Keep serialized field names compatible with the persisted JSON shape.
//!
//! # Invariants
//! - `id` is assigned at creation and never changes.
//! - `created_at` is immutable; `closed_at` is set on close, cleared on reopen.
//! - `comments` keeps insertion order.
//! - Timestamps deserialize from epoch milliseconds or the ISO-8601 strings
//!   earlier app versions persisted; serialization is epoch milliseconds.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Time-derived identifier for a todo (Unix epoch milliseconds at creation).
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TodoId = i64;

/// Time-derived identifier for a comment, unique within its parent todo.
pub type CommentId = i64;

/// Identifier referencing an [`crate::model::assignee::Assignee`].
pub type AssigneeId = i64;

/// Priority level of a todo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

impl Priority {
    /// All priorities in display order.
    pub const ALL: [Priority; 3] = [Self::High, Self::Medium, Self::Low];

    /// Human-readable label used by select options.
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Select options for priority pickers, in display order.
    pub fn options() -> [(Priority, &'static str); 3] {
        Self::ALL.map(|priority| (priority, priority.label()))
    }
}

/// One of the 7 fixed board columns a todo occupies.
///
/// Serialized values match the persisted wire shape (`"no-status"`,
/// `"in-progress"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    NoStatus,
    Backlog,
    InDesign,
    ReadyToEstimate,
    Todo,
    InProgress,
    Closed,
}

impl Default for Status {
    fn default() -> Self {
        Self::NoStatus
    }
}

impl Status {
    /// All statuses in board column order.
    pub const ALL: [Status; 7] = [
        Self::NoStatus,
        Self::Backlog,
        Self::InDesign,
        Self::ReadyToEstimate,
        Self::Todo,
        Self::InProgress,
        Self::Closed,
    ];

    /// Wire value used in persisted JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoStatus => "no-status",
            Self::Backlog => "backlog",
            Self::InDesign => "in-design",
            Self::ReadyToEstimate => "ready-to-estimate",
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Closed => "closed",
        }
    }

    /// Parses a wire value back to a status.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

/// Threaded comment owned by one todo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    /// Reference to the authoring assignee; id lookup, never ownership.
    pub author_id: AssigneeId,
    pub content: String,
    /// Unix epoch milliseconds. Immutable after creation.
    #[serde(with = "timestamp")]
    pub created_at: i64,
}

/// Canonical todo record.
///
/// Field names serialize camelCase so board state persisted by earlier
/// versions of the app loads unchanged; timestamps additionally accept the
/// ISO-8601 strings those versions wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    /// Optional free-form body; `None` never matches search.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    /// `None` means unassigned.
    #[serde(default)]
    pub assignee_id: Option<AssigneeId>,
    #[serde(default)]
    pub status: Status,
    /// Unix epoch milliseconds. Immutable after creation.
    #[serde(with = "timestamp")]
    pub created_at: i64,
    /// Set when the todo is closed, cleared on reopen.
    #[serde(default, with = "timestamp_opt")]
    pub closed_at: Option<i64>,
    /// Insertion-ordered comment thread. Absent in old payloads.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Todo {
    /// Returns whether this todo sits in the closed column.
    pub fn is_closed(&self) -> bool {
        self.status == Status::Closed
    }
}

/// Wire representation of one timestamp value.
///
/// Earlier app versions wrote `Date.toISOString()` strings; current records
/// carry epoch milliseconds. Both must load.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireTimestamp {
    Millis(i64),
    Iso(String),
}

fn wire_timestamp_to_millis(value: WireTimestamp) -> Result<i64, String> {
    match value {
        WireTimestamp::Millis(ms) => Ok(ms),
        WireTimestamp::Iso(text) => DateTime::parse_from_rfc3339(&text)
            .map(|parsed| parsed.timestamp_millis())
            .map_err(|err| format!("invalid timestamp `{text}`: {err}")),
    }
}

mod timestamp {
    use super::{wire_timestamp_to_millis, WireTimestamp};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(*value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        wire_timestamp_to_millis(WireTimestamp::deserialize(deserializer)?)
            .map_err(de::Error::custom)
    }
}

mod timestamp_opt {
    use super::{wire_timestamp_to_millis, WireTimestamp};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<i64>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(ms) => serializer.serialize_some(ms),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<i64>, D::Error> {
        Option::<WireTimestamp>::deserialize(deserializer)?
            .map(wire_timestamp_to_millis)
            .transpose()
            .map_err(de::Error::custom)
    }
}
