//! Observable board state container.
//!
//! # Responsibility
//! - Own the authoritative in-memory todo list for one session.
//! - Route every mutation through the todo service, persist the result, and
//!   notify subscribers synchronously.
//!
//! # Invariants
//! - The store is the single writer; state replacement is whole-list only.
//! - Subscribers are notified in registration order, synchronously.
//! - Persistence failures are logged and swallowed here; in-memory state
//!   stays the source of truth for the rest of the session.

use crate::directory::AssigneeDirectory;
use crate::model::assignee::Assignee;
use crate::model::todo::{CommentId, Status, Todo, TodoId};
use crate::repo::board_repo::BoardRepository;
use crate::service::todo_service::{
    now_epoch_ms, CommentDraft, CommentPatch, TodoDraft, TodoPatch, TodoService,
};
use log::{error, info};

const MS_PER_HOUR: i64 = 60 * 60 * 1000;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Snapshot of the store handed to subscribers and `state()` callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreState {
    pub todos: Vec<Todo>,
    pub assignees: Vec<Assignee>,
    pub loading: bool,
}

/// Handle returned by [`TodoStore::subscribe`]; pass back to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&StoreState)>;

/// Explicitly constructed state container over an injected repository.
///
/// Replaces the original global store singleton: callers build one at
/// startup, call [`TodoStore::init`], and drop it on teardown.
pub struct TodoStore<R: BoardRepository> {
    repo: R,
    service: TodoService,
    todos: Vec<Todo>,
    assignees: Vec<Assignee>,
    loading: bool,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl<R: BoardRepository> TodoStore<R> {
    /// Creates an uninitialized store; call [`TodoStore::init`] to load state.
    pub fn new(repo: R) -> Self {
        Self::with_directory(repo, &AssigneeDirectory::new())
    }

    /// Creates a store with a caller-chosen assignee directory.
    pub fn with_directory(repo: R, directory: &AssigneeDirectory) -> Self {
        Self {
            repo,
            service: TodoService::new(),
            todos: Vec::new(),
            assignees: directory.all(),
            loading: true,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Loads persisted board state, seeding sample todos on first run.
    ///
    /// # Contract
    /// - Emits a loading=true notification before touching storage and a
    ///   loading=false notification after.
    /// - A load failure logs and falls back to an empty board.
    pub fn init(&mut self) {
        self.loading = true;
        self.notify();

        let loaded = match self.repo.load_todos() {
            Ok(todos) => todos,
            Err(err) => {
                error!("event=board_load module=store status=error error={err}");
                Vec::new()
            }
        };

        if loaded.is_empty() {
            self.todos = sample_todos();
            info!(
                "event=board_seed module=store status=ok count={}",
                self.todos.len()
            );
            self.persist();
        } else {
            info!(
                "event=board_load module=store status=ok count={}",
                loaded.len()
            );
            self.todos = loaded;
        }

        self.loading = false;
        self.notify();
    }

    /// Registers a subscriber; it is invoked synchronously on every change,
    /// in registration order.
    pub fn subscribe(&mut self, callback: impl FnMut(&StoreState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a subscriber; unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }

    /// Returns a full snapshot copy of the current state.
    pub fn state(&self) -> StoreState {
        StoreState {
            todos: self.todos.clone(),
            assignees: self.assignees.clone(),
            loading: self.loading,
        }
    }

    /// Current todo list copy.
    pub fn todos(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    /// Creates a todo from the draft and appends it to the board.
    pub fn add_todo(&mut self, draft: TodoDraft) -> TodoId {
        let todo = self.service.create_todo(draft);
        let id = todo.id;
        let mut next = self.todos.clone();
        next.push(todo);
        self.replace(next);
        id
    }

    /// Shallow-merges `patch` into the matching todo; no-op when absent.
    pub fn update_todo(&mut self, id: TodoId, patch: &TodoPatch) {
        let next = self.service.update_todo(&self.todos, id, patch);
        self.replace(next);
    }

    /// Deletes the matching todo and its comments.
    pub fn delete_todo(&mut self, id: TodoId) {
        let next = self.service.delete_todo(&self.todos, id);
        self.replace(next);
    }

    /// Moves the matching todo to another column.
    pub fn move_todo(&mut self, id: TodoId, new_status: Status) {
        let next = self.service.move_todo(&self.todos, id, new_status);
        self.replace(next);
    }

    /// Closes the matching todo.
    pub fn close_todo(&mut self, id: TodoId) {
        let next = self.service.close_todo(&self.todos, id);
        self.replace(next);
    }

    /// Reopens the matching todo into the no-status column.
    pub fn reopen_todo(&mut self, id: TodoId) {
        let next = self.service.reopen_todo(&self.todos, id);
        self.replace(next);
    }

    /// Appends a comment to the matching todo.
    pub fn add_comment(&mut self, todo_id: TodoId, draft: &CommentDraft) {
        let next = self.service.add_comment(&self.todos, todo_id, draft);
        self.replace(next);
    }

    /// Edits one comment of the matching todo.
    pub fn update_comment(&mut self, todo_id: TodoId, comment_id: CommentId, patch: &CommentPatch) {
        let next = self
            .service
            .update_comment(&self.todos, todo_id, comment_id, patch);
        self.replace(next);
    }

    /// Removes one comment from the matching todo.
    pub fn delete_comment(&mut self, todo_id: TodoId, comment_id: CommentId) {
        let next = self.service.delete_comment(&self.todos, todo_id, comment_id);
        self.replace(next);
    }

    /// Persist, swap in the new list, notify. Whole-list replace only.
    fn replace(&mut self, next: Vec<Todo>) {
        self.todos = next;
        self.persist();
        self.notify();
    }

    fn persist(&self) {
        if let Err(err) = self.repo.save_todos(&self.todos) {
            error!("event=board_persist module=store status=error error={err}");
        }
    }

    fn notify(&mut self) {
        let snapshot = StoreState {
            todos: self.todos.clone(),
            assignees: self.assignees.clone(),
            loading: self.loading,
        };
        for (_, callback) in &mut self.subscribers {
            callback(&snapshot);
        }
    }
}

/// First-run example records, matching the board the original app seeds.
fn sample_todos() -> Vec<Todo> {
    use crate::model::todo::{Comment, Priority};

    let now = now_epoch_ms();
    vec![
        Todo {
            id: 1,
            title: "Implement drag and drop functionality".to_string(),
            description: Some("Add smooth drag and drop between columns for better UX".to_string()),
            priority: Priority::High,
            assignee_id: Some(1),
            status: Status::InProgress,
            created_at: now - MS_PER_DAY,
            closed_at: None,
            comments: vec![Comment {
                id: 1,
                author_id: 1,
                content: "This is looking great! The drag and drop feels smooth.".to_string(),
                created_at: now - MS_PER_HOUR,
            }],
        },
        Todo {
            id: 2,
            title: "Design responsive mobile layout".to_string(),
            description: Some("Ensure the app works well on mobile devices".to_string()),
            priority: Priority::Medium,
            assignee_id: Some(2),
            status: Status::Todo,
            created_at: now - 2 * MS_PER_DAY,
            closed_at: None,
            comments: Vec::new(),
        },
        Todo {
            id: 3,
            title: "Add search and filtering".to_string(),
            description: Some("Implement search functionality to find todos quickly".to_string()),
            priority: Priority::Low,
            assignee_id: None,
            status: Status::Backlog,
            created_at: now - 3 * MS_PER_DAY,
            closed_at: None,
            comments: Vec::new(),
        },
    ]
}
