//! Domain model for the board state layer.
//!
//! # Responsibility
//! - Define the canonical todo/comment/assignee records used by core logic.
//! - Pin the JSON wire shape of persisted board state.
//!
//! # Invariants
//! - Every todo occupies exactly one status column at a time.
//! - Comments are owned by their parent todo and die with it.
//! - Assignees are static reference data; todos hold id references only.

pub mod assignee;
pub mod column;
pub mod todo;
