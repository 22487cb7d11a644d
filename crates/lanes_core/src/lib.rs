//! Core state and service layer for the Lanes kanban board.
//! This crate is the single source of truth for board mutation rules.

pub mod db;
pub mod directory;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;
pub mod store;

pub use directory::{AssigneeDirectory, AssigneeOption};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::assignee::Assignee;
pub use model::column::{column_for, ColumnSpec, COLUMNS};
pub use model::todo::{AssigneeId, Comment, CommentId, Priority, Status, Todo, TodoId};
pub use repo::board_repo::{
    BoardRepository, RepoError, RepoResult, SqliteBoardRepository, DEFAULT_BOARD_KEY,
};
pub use search::{filter_todos, SearchField, SearchQuery, DEFAULT_SEARCH_FIELDS};
pub use service::todo_service::{
    now_epoch_ms, todo_by_id, todos_by_status, CommentDraft, CommentPatch, TodoDraft, TodoPatch,
    TodoService,
};
pub use store::{StoreState, SubscriptionId, TodoStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
