//! Todo use-case service: pure list transformations plus id generation.
//!
//! # Responsibility
//! - Build new todo/comment records with generated ids and timestamps.
//! - Transform todo lists without mutating the input.
//!
//! # Invariants
//! - Every transform returns a new list; the input slice is never changed.
//! - Operations on an absent id are silent no-ops (list content unchanged).
//! - Issued ids are time-derived and strictly increasing per service.

use crate::model::todo::{
    AssigneeId, Comment, CommentId, Priority, Status, Todo, TodoId,
};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall clock as Unix epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}

/// Caller-supplied fields for a new todo.
///
/// Title validation is the caller's responsibility; the service builds the
/// record as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoDraft {
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub assignee_id: Option<AssigneeId>,
    /// Defaults to [`Status::NoStatus`] when absent.
    pub status: Option<Status>,
}

/// Shallow-merge patch for an existing todo.
///
/// `None` leaves a field untouched; the nested `Option` carries the new
/// value for nullable fields (so `Some(None)` clears an assignee).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub priority: Option<Priority>,
    pub assignee_id: Option<Option<AssigneeId>>,
    pub status: Option<Status>,
}

/// Caller-supplied fields for a new comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDraft {
    pub author_id: AssigneeId,
    pub content: String,
}

/// Shallow-merge patch for an existing comment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentPatch {
    pub content: Option<String>,
}

/// Stateless-by-contract transformation service.
///
/// The only held state is the id watermark; list operations read their input
/// and return a fresh list.
pub struct TodoService {
    last_id: AtomicI64,
}

impl Default for TodoService {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoService {
    pub fn new() -> Self {
        Self {
            last_id: AtomicI64::new(0),
        }
    }

    /// Issues the next time-derived id.
    ///
    /// Ids follow the wall clock but never repeat within one service, even
    /// for successive calls inside the same millisecond.
    fn next_id(&self) -> i64 {
        let now = now_epoch_ms();
        self.last_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            // fetch_update only fails when the closure returns None.
            .map_or(now, |last| now.max(last + 1))
    }

    /// Builds a new todo record from caller-supplied fields.
    ///
    /// # Contract
    /// - `id` is generated, `created_at = now`, comments start empty.
    /// - `status` falls back to [`Status::NoStatus`] when the draft omits it.
    pub fn create_todo(&self, draft: TodoDraft) -> Todo {
        Todo {
            id: self.next_id(),
            title: draft.title,
            description: draft.description,
            priority: draft.priority,
            assignee_id: draft.assignee_id,
            status: draft.status.unwrap_or_default(),
            created_at: now_epoch_ms(),
            closed_at: None,
            comments: Vec::new(),
        }
    }

    /// Shallow-merges `patch` into the matching todo.
    pub fn update_todo(&self, todos: &[Todo], id: TodoId, patch: &TodoPatch) -> Vec<Todo> {
        map_todo(todos, id, |todo| {
            if let Some(title) = &patch.title {
                todo.title = title.clone();
            }
            if let Some(description) = &patch.description {
                todo.description = description.clone();
            }
            if let Some(priority) = patch.priority {
                todo.priority = priority;
            }
            if let Some(assignee_id) = patch.assignee_id {
                todo.assignee_id = assignee_id;
            }
            if let Some(status) = patch.status {
                todo.status = status;
            }
        })
    }

    /// Removes the matching todo; its comments go with it.
    pub fn delete_todo(&self, todos: &[Todo], id: TodoId) -> Vec<Todo> {
        todos
            .iter()
            .filter(|todo| todo.id != id)
            .cloned()
            .collect()
    }

    /// Moves the matching todo to another status column.
    pub fn move_todo(&self, todos: &[Todo], id: TodoId, new_status: Status) -> Vec<Todo> {
        map_todo(todos, id, |todo| todo.status = new_status)
    }

    /// Closes the matching todo, stamping `closed_at`.
    pub fn close_todo(&self, todos: &[Todo], id: TodoId) -> Vec<Todo> {
        let closed_at = now_epoch_ms();
        map_todo(todos, id, |todo| {
            todo.status = Status::Closed;
            todo.closed_at = Some(closed_at);
        })
    }

    /// Reopens the matching todo.
    ///
    /// Always resets to [`Status::NoStatus`] rather than the pre-close
    /// column; the previous status is not recorded anywhere.
    pub fn reopen_todo(&self, todos: &[Todo], id: TodoId) -> Vec<Todo> {
        map_todo(todos, id, |todo| {
            todo.status = Status::NoStatus;
            todo.closed_at = None;
        })
    }

    /// Appends a new comment to the matching todo's thread.
    pub fn add_comment(&self, todos: &[Todo], todo_id: TodoId, draft: &CommentDraft) -> Vec<Todo> {
        let comment = Comment {
            id: self.next_id(),
            author_id: draft.author_id,
            content: draft.content.clone(),
            created_at: now_epoch_ms(),
        };

        map_todo(todos, todo_id, |todo| todo.comments.push(comment.clone()))
    }

    /// Shallow-merges `patch` into one comment of the matching todo.
    pub fn update_comment(
        &self,
        todos: &[Todo],
        todo_id: TodoId,
        comment_id: CommentId,
        patch: &CommentPatch,
    ) -> Vec<Todo> {
        map_todo(todos, todo_id, |todo| {
            for comment in &mut todo.comments {
                if comment.id == comment_id {
                    if let Some(content) = &patch.content {
                        comment.content = content.clone();
                    }
                }
            }
        })
    }

    /// Removes one comment from the matching todo's thread.
    pub fn delete_comment(
        &self,
        todos: &[Todo],
        todo_id: TodoId,
        comment_id: CommentId,
    ) -> Vec<Todo> {
        map_todo(todos, todo_id, |todo| {
            todo.comments.retain(|comment| comment.id != comment_id);
        })
    }
}

/// Returns the todos sitting in one status column, input order preserved.
pub fn todos_by_status(todos: &[Todo], status: Status) -> Vec<Todo> {
    todos
        .iter()
        .filter(|todo| todo.status == status)
        .cloned()
        .collect()
}

/// Finds one todo by id.
pub fn todo_by_id(todos: &[Todo], id: TodoId) -> Option<&Todo> {
    todos.iter().find(|todo| todo.id == id)
}

/// Clones the list, applying `mutate` to the todo with the given id.
///
/// Absent ids yield an unchanged copy, matching the silent-no-op contract.
fn map_todo(todos: &[Todo], id: TodoId, mutate: impl Fn(&mut Todo)) -> Vec<Todo> {
    todos
        .iter()
        .map(|todo| {
            if todo.id == id {
                let mut updated = todo.clone();
                mutate(&mut updated);
                updated
            } else {
                todo.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::TodoService;

    #[test]
    fn ids_are_strictly_increasing_within_one_tick() {
        let service = TodoService::new();
        let mut last = 0;
        for _ in 0..64 {
            let id = service.next_id();
            assert!(id > last, "id {id} must exceed previous {last}");
            last = id;
        }
    }
}
